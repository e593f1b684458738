use super::{Bindings, PageContext};
use crate::behavior::a11y::{
    keyboard_nav_on_key, keyboard_nav_on_mouse_down, reduced_motion_override,
};
use crate::constants::{KEYBOARD_NAV_CLASS, REDUCED_MOTION_QUERY};
use crate::dom::{apply_marker, js_err, media_matches, ElementRegistry};
use wasm_bindgen::JsCast;
use web_sys as web;

// Installed before the DOM is parsed, so `<body>` is looked up per event.
pub fn install(ctx: &PageContext, bindings: &mut Bindings) -> anyhow::Result<()> {
    inject_reduced_motion(ctx)?;

    let document = ctx.registry.document();
    let registry = ctx.registry.clone();
    bindings.listen(document, "keydown", move |ev| {
        let Some(ev) = ev.dyn_ref::<web::KeyboardEvent>() else {
            return;
        };
        if let Some(change) = keyboard_nav_on_key(&ev.key()) {
            if let Some(body) = registry.body() {
                apply_marker(&body, KEYBOARD_NAV_CLASS, change);
            }
        }
    })?;
    let registry = ctx.registry.clone();
    bindings.listen(document, "mousedown", move |_| {
        if let Some(body) = registry.body() {
            apply_marker(&body, KEYBOARD_NAV_CLASS, keyboard_nav_on_mouse_down());
        }
    })
}

// Checked once at startup; a later change of the OS preference is not picked up.
fn inject_reduced_motion(ctx: &PageContext) -> anyhow::Result<()> {
    let prefers = media_matches(&ctx.window, REDUCED_MOTION_QUERY);
    let Some(css) = reduced_motion_override(prefers) else {
        return Ok(());
    };
    let Some(parent) = style_parent(&ctx.registry) else {
        return Ok(());
    };
    let style = ctx.registry.document().create_element("style").map_err(js_err)?;
    style.set_text_content(Some(css));
    parent.append_child(&style).map_err(js_err)?;
    log::info!("[a11y] reduced motion requested; animations collapsed");
    Ok(())
}

// `<head>` may not be parsed yet when the module starts.
fn style_parent(registry: &ElementRegistry) -> Option<web::Element> {
    match registry.head() {
        Some(head) => Some(head.into()),
        None => registry.document().document_element(),
    }
}
