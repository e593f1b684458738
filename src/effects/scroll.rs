use super::{Bindings, PageContext};
use crate::behavior::scroll::{navbar_background, parallax_transform, VisibilitySet};
use crate::behavior::timing::Debounced;
use crate::constants::{FADE_IN_SELECTOR, HERO_BG_SELECTOR, NAVBAR_SELECTOR, VISIBLE_CLASS};
use crate::dom::{set_style, Observer};
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn install(ctx: &PageContext, bindings: &mut Bindings) -> anyhow::Result<()> {
    wire_navbar_shading(ctx, bindings)?;
    wire_parallax(ctx, bindings)?;
    wire_fade_in(ctx, bindings)?;
    wire_settled_hook(ctx, bindings)
}

fn wire_navbar_shading(ctx: &PageContext, bindings: &mut Bindings) -> anyhow::Result<()> {
    let Some(navbar) = ctx.registry.first(NAVBAR_SELECTOR) else {
        log::debug!("[scroll] no navbar");
        return Ok(());
    };
    let window = ctx.window.clone();
    let threshold = ctx.config.navbar_threshold;
    bindings.listen(&ctx.window, "scroll", move |_| {
        let y = window.scroll_y().unwrap_or(0.0);
        set_style(&navbar, "background", navbar_background(y, threshold));
    })
}

fn wire_parallax(ctx: &PageContext, bindings: &mut Bindings) -> anyhow::Result<()> {
    let Some(layer) = ctx.registry.first(HERO_BG_SELECTOR) else {
        log::debug!("[scroll] no hero background");
        return Ok(());
    };
    let window = ctx.window.clone();
    let speed = ctx.config.parallax_speed;
    bindings.listen(&ctx.window, "scroll", move |_| {
        let y = window.scroll_y().unwrap_or(0.0);
        set_style(&layer, "transform", &parallax_transform(y, speed));
    })
}

// Reveal `.fade-in` elements the first time they enter the viewport, then stop
// observing them.
fn wire_fade_in(ctx: &PageContext, bindings: &mut Bindings) -> anyhow::Result<()> {
    let elements = ctx.registry.all_elements(FADE_IN_SELECTOR);
    if elements.is_empty() {
        return Ok(());
    }
    let targets = elements.clone();
    let mut revealed = VisibilitySet::new();
    let observer = Observer::new(
        ctx.config.fade_in_threshold,
        &ctx.config.fade_in_root_margin,
        move |entries, observer| {
            for entry in entries.iter() {
                let entry: web::IntersectionObserverEntry = entry.unchecked_into();
                let target = entry.target();
                let Some(key) = targets.iter().position(|el| *el == target) else {
                    continue;
                };
                if revealed.record(key, entry.is_intersecting()) {
                    _ = target.class_list().add_1(VISIBLE_CLASS);
                    observer.unobserve(&target);
                }
            }
        },
    )?;
    for el in &elements {
        observer.observe(el);
    }
    log::debug!("[scroll] observing {} fade-in elements", elements.len());
    bindings.keep_observer(observer);
    Ok(())
}

// Debounced hook kept for scroll work that should only run once scrolling
// settles; currently it only traces.
fn wire_settled_hook(ctx: &PageContext, bindings: &mut Bindings) -> anyhow::Result<()> {
    let window = ctx.window.clone();
    let settled = Debounced::new(
        ctx.scheduler.clone(),
        ctx.config.scroll_debounce_ms,
        false,
        move || log::trace!("[scroll] settled at {:?}", window.scroll_y().ok()),
    );
    bindings.listen(&ctx.window, "scroll", move |_| settled.call())
}
