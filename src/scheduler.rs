use crate::behavior::timing::Scheduler;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `setTimeout`-backed scheduler. Tasks run on the browser event loop.
pub struct WindowScheduler {
    window: web::Window,
}

impl WindowScheduler {
    pub fn new(window: web::Window) -> Self {
        Self { window }
    }

    /// Run `task` on the next tick.
    pub fn defer(&self, task: impl FnOnce() + 'static) {
        _ = self.schedule(0, Box::new(task));
    }
}

impl Scheduler for WindowScheduler {
    type Handle = Option<i32>;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle {
        let callback = Closure::once_into_js(task);
        match self.window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            delay_ms.min(i32::MAX as u32) as i32,
        ) {
            Ok(handle) => Some(handle),
            Err(e) => {
                log::warn!("[timer] setTimeout failed: {:?}", e);
                None
            }
        }
    }

    fn cancel(&self, handle: Self::Handle) {
        if let Some(handle) = handle {
            self.window.clear_timeout_with_handle(handle);
        }
    }
}
