use super::{Bindings, PageContext};
use crate::behavior::decor::floating_styles;
use crate::behavior::timing::{type_writer_with, Scheduler, TaskHandle};
use crate::constants::{FLOATING_CONTAINER_SELECTOR, FLOATING_ELEMENT_CLASS, HERO_SUBTITLE_SELECTOR};
use crate::dom::{js_err, set_styles};

pub fn install(ctx: &PageContext, bindings: &mut Bindings) -> anyhow::Result<()> {
    bindings.keep_task(schedule_subtitle_typing(ctx));
    spawn_floating_elements(ctx)
}

/// Retype the hero subtitle after the start delay. The subtitle is looked up
/// when the delay expires, not at install time.
fn schedule_subtitle_typing(ctx: &PageContext) -> TaskHandle {
    let handle = TaskHandle::new();
    let task = handle.clone();
    let registry = ctx.registry.clone();
    let scheduler = ctx.scheduler.clone();
    let speed_ms = ctx.config.subtitle_type_speed_ms;
    _ = ctx.scheduler.schedule(
        ctx.config.subtitle_start_delay_ms,
        Box::new(move || {
            let Some(subtitle) = registry.first(HERO_SUBTITLE_SELECTOR) else {
                return;
            };
            let text = subtitle.text_content().unwrap_or_default();
            log::debug!("[typewriter] typing {} chars", text.chars().count());
            let sink = subtitle.clone();
            type_writer_with(task, scheduler, &text, Some(speed_ms), move |typed| {
                sink.set_text_content(Some(typed));
            });
        }),
    );
    handle
}

fn spawn_floating_elements(ctx: &PageContext) -> anyhow::Result<()> {
    let Some(container) = ctx.registry.first(FLOATING_CONTAINER_SELECTOR) else {
        return Ok(());
    };
    let mut rng = rand::thread_rng();
    for style in floating_styles(&mut rng, ctx.config.floating_count) {
        let el = ctx.registry.create("div")?;
        el.set_class_name(FLOATING_ELEMENT_CLASS);
        set_styles(&el, &style.style_properties());
        container.append_child(&el).map_err(js_err)?;
    }
    Ok(())
}
