#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

mod behavior;
mod config;
mod constants;
mod dom;
mod effects;
mod scheduler;

use config::PageConfig;
use effects::PageController;

thread_local! {
    // Lives for the whole page; never torn down.
    static CONTROLLER: RefCell<Option<PageController>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Stop the subtitle typewriter if it is still running.
#[wasm_bindgen]
pub fn cancel_animations() {
    CONTROLLER.with(|slot| {
        if let Some(controller) = slot.borrow().as_ref() {
            controller.cancel_animations();
        }
    });
}

// Resolves once the DOM is parsed; immediately if that already happened.
async fn dom_ready(document: &web::Document) -> anyhow::Result<()> {
    if document.ready_state() != "loading" {
        return Ok(());
    }
    let ready = js_sys::Promise::new(&mut |resolve, _reject| {
        let on_ready = Closure::once_into_js(move || {
            _ = resolve.call0(&JsValue::NULL);
        });
        _ = document
            .add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref());
    });
    JsFuture::from(ready).await.map_err(dom::js_err)?;
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    static INSTALLED: AtomicBool = AtomicBool::new(false);
    if INSTALLED.swap(true, Ordering::SeqCst) {
        log::warn!("page controller already installed");
        return Ok(());
    }
    // Error logging and accessibility hooks go in before the DOM is parsed.
    let controller = PageController::new(window, document.clone(), PageConfig::default());
    CONTROLLER.with(|slot| *slot.borrow_mut() = Some(controller));

    dom_ready(&document).await?;
    CONTROLLER.with(|slot| {
        if let Some(controller) = slot.borrow_mut().as_mut() {
            controller.install_ready();
        }
    });
    Ok(())
}
