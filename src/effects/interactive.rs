use super::{Bindings, PageContext};
use crate::behavior::pointer::{card_transform, ripples_to_remove, RippleGeometry};
use crate::constants::{BUTTON_SELECTOR, CARD_SELECTOR, LOADED_CLASS, RIPPLE_CLASS};
use crate::dom::{js_err, set_style, set_styles, ElementRegistry};
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn install(ctx: &PageContext, bindings: &mut Bindings) -> anyhow::Result<()> {
    wire_card_hover(ctx, bindings)?;
    wire_ripples(ctx, bindings)?;

    let body = ctx.registry.body();
    bindings.on_load(ctx, move || {
        if let Some(body) = body {
            _ = body.class_list().add_1(LOADED_CLASS);
        }
    })
}

fn wire_card_hover(ctx: &PageContext, bindings: &mut Bindings) -> anyhow::Result<()> {
    for card in ctx.registry.all(CARD_SELECTOR) {
        let entered = card.clone();
        bindings.listen(&card, "mouseenter", move |_| {
            set_style(&entered, "transform", card_transform(true));
        })?;
        let left = card.clone();
        bindings.listen(&card, "mouseleave", move |_| {
            set_style(&left, "transform", card_transform(false));
        })?;
    }
    Ok(())
}

fn wire_ripples(ctx: &PageContext, bindings: &mut Bindings) -> anyhow::Result<()> {
    for button in ctx.registry.all(BUTTON_SELECTOR) {
        let registry = ctx.registry.clone();
        let target = button.clone();
        bindings.listen(&button, "click", move |ev| {
            let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
                return;
            };
            if let Err(e) = spawn_ripple(&registry, &target, ev) {
                log::debug!("[ripple] {:?}", e);
            }
        })?;
    }
    Ok(())
}

// Replace the button's current ripples, if any, with one centred on the click.
fn spawn_ripple(
    registry: &ElementRegistry,
    button: &web::HtmlElement,
    ev: &web::MouseEvent,
) -> anyhow::Result<()> {
    let geometry = RippleGeometry::at_click(
        ev.client_x() as f64,
        ev.client_y() as f64,
        button.offset_left() as f64,
        button.offset_top() as f64,
        button.client_width() as f64,
        button.client_height() as f64,
    );
    let circle = registry.create("span")?;
    set_styles(&circle, &geometry.style_properties());
    circle.class_list().add_1(RIPPLE_CLASS).map_err(js_err)?;

    // live collection: it shrinks as ripples are removed
    let previous = button.get_elements_by_class_name(RIPPLE_CLASS);
    for _ in 0..ripples_to_remove(previous.length() as usize) {
        if let Some(ripple) = previous.item(0) {
            ripple.remove();
        }
    }
    button.append_child(&circle).map_err(js_err)?;
    Ok(())
}
