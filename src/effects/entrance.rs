use super::{Bindings, PageContext};
use crate::behavior::decor::{entrances_for, secs, stagger_delay};
use crate::constants::{ENTRANCE_SELECTOR, PROJECT_CARD_CLASS, SKILL_ITEM_CLASS};
use crate::dom::{set_style, Observer};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Staggered entrance animations for skills and project cards. Separate from
/// the fade-in observer: different margin, marker classes and element set.
/// Elements stay observed, so the delay is re-rolled on every entry.
pub fn install(ctx: &PageContext, bindings: &mut Bindings) -> anyhow::Result<()> {
    let elements = ctx.registry.all_elements(ENTRANCE_SELECTOR);
    if elements.is_empty() {
        return Ok(());
    }
    let observer = Observer::new(
        ctx.config.entrance_threshold,
        &ctx.config.entrance_root_margin,
        |entries, _| {
            let mut rng = rand::thread_rng();
            for entry in entries.iter() {
                let entry: web::IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                let Ok(el) = entry.target().dyn_into::<web::HtmlElement>() else {
                    continue;
                };
                let cl = el.class_list();
                let plan = entrances_for(
                    cl.contains(SKILL_ITEM_CLASS),
                    cl.contains(PROJECT_CARD_CLASS),
                );
                for entrance in plan {
                    let delay = stagger_delay(&mut rng, entrance.max_delay_secs);
                    set_style(&el, "animation-delay", &secs(delay));
                    _ = cl.add_1(entrance.marker);
                }
            }
        },
    )?;
    for el in &elements {
        observer.observe(el);
    }
    bindings.keep_observer(observer);
    Ok(())
}
