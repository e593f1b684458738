use super::{Bindings, PageContext};
use crate::behavior::diagnostics::{describe_error, load_event_duration, load_report};
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn install(ctx: &PageContext, bindings: &mut Bindings) -> anyhow::Result<()> {
    bindings.listen(&ctx.window, "error", |ev| match ev.dyn_ref::<web::ErrorEvent>() {
        Some(err) => {
            log::error!(
                "{}",
                describe_error(&err.message(), &err.filename(), err.lineno(), err.colno())
            );
            log::error!("error value: {:?}", err.error());
        }
        None => log::warn!("[error] {} event without details", ev.type_()),
    })?;

    bindings.listen(&ctx.window, "unhandledrejection", |ev| {
        if let Some(rejection) = ev.dyn_ref::<web::PromiseRejectionEvent>() {
            log::error!("Unhandled promise rejection: {:?}", rejection.reason());
        }
        ev.prevent_default();
    })?;

    if let Some(performance) = ctx.window.performance() {
        let scheduler = ctx.scheduler.clone();
        bindings.on_load(ctx, move || {
            scheduler.defer(move || report_load_time(&performance));
        })?;
    }
    Ok(())
}

fn report_load_time(performance: &web::Performance) {
    let entry = performance.get_entries_by_type("navigation").get(0);
    let Ok(timing) = entry.dyn_into::<web::PerformanceNavigationTiming>() else {
        return;
    };
    if let Some(ms) = load_event_duration(timing.load_event_start(), timing.load_event_end()) {
        log::info!("{}", load_report(ms));
    }
}
