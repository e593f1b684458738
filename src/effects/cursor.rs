use super::{Bindings, PageContext};
use crate::behavior::pointer::{cursor_opacity, cursor_transform, px, CursorPosition};
use crate::constants::{CURSOR_CLASS, HOVER_CAPABLE_QUERY};
use crate::dom::{js_err, media_matches, set_style};
use wasm_bindgen::JsCast;
use web_sys as web;

// Static style writes on the cursor for a document event.
fn style_on(
    bindings: &mut Bindings,
    document: &web::Document,
    kind: &'static str,
    cursor: &web::HtmlElement,
    property: &'static str,
    value: &'static str,
) -> anyhow::Result<()> {
    let cursor = cursor.clone();
    bindings.listen(document, kind, move |_| set_style(&cursor, property, value))
}

/// Custom cursor for hover-capable devices only. Touch devices keep the
/// native behaviour.
pub fn install(ctx: &PageContext, bindings: &mut Bindings) -> anyhow::Result<()> {
    if !media_matches(&ctx.window, HOVER_CAPABLE_QUERY) {
        log::debug!("[cursor] device cannot hover; skipping");
        return Ok(());
    }
    let Some(body) = ctx.registry.body() else {
        return Ok(());
    };
    let cursor = ctx.registry.create("div")?;
    cursor.set_class_name(CURSOR_CLASS);
    body.append_child(&cursor).map_err(js_err)?;

    let document = ctx.registry.document();
    let offset = ctx.config.cursor_offset_px;
    let follower = cursor.clone();
    bindings.listen(document, "mousemove", move |ev| {
        if let Some(ev) = ev.dyn_ref::<web::MouseEvent>() {
            let pos =
                CursorPosition::from_pointer(ev.client_x() as f64, ev.client_y() as f64, offset);
            set_style(&follower, "left", &px(pos.x));
            set_style(&follower, "top", &px(pos.y));
        }
    })?;

    style_on(bindings, document, "mousedown", &cursor, "transform", cursor_transform(true))?;
    style_on(bindings, document, "mouseup", &cursor, "transform", cursor_transform(false))?;
    style_on(bindings, document, "mouseleave", &cursor, "opacity", cursor_opacity(false))?;
    style_on(bindings, document, "mouseenter", &cursor, "opacity", cursor_opacity(true))?;
    Ok(())
}
