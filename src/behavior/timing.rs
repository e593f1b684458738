use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Typewriter interval when the caller does not pick one.
pub const DEFAULT_SPEED_MS: u32 = 100;

/// One-shot delayed callbacks on the host event loop.
pub trait Scheduler {
    type Handle: 'static;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;
    fn cancel(&self, handle: Self::Handle);
}

/// Cancellation flag shared with a running scheduled task.
#[derive(Debug, Clone, Default)]
pub struct TaskHandle {
    cancelled: Rc<Cell<bool>>,
}

impl TaskHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

/// Rate-limits calls to `func`.
///
/// Each `call` restarts a `wait_ms` window. With `immediate == false` the
/// function runs once when a window elapses without further calls (trailing);
/// with `immediate == true` it runs on the first call of a burst and further
/// calls are swallowed until the window elapses (leading).
pub struct Debounced<S: Scheduler> {
    scheduler: Rc<S>,
    wait_ms: u32,
    immediate: bool,
    pending: Rc<RefCell<Option<S::Handle>>>,
    func: Rc<RefCell<dyn FnMut()>>,
}

impl<S: Scheduler + 'static> Debounced<S> {
    pub fn new(
        scheduler: Rc<S>,
        wait_ms: u32,
        immediate: bool,
        func: impl FnMut() + 'static,
    ) -> Self {
        Self {
            scheduler,
            wait_ms,
            immediate,
            pending: Rc::new(RefCell::new(None)),
            func: Rc::new(RefCell::new(func)),
        }
    }

    pub fn call(&self) {
        let call_now = self.immediate && self.pending.borrow().is_none();
        if let Some(handle) = self.pending.borrow_mut().take() {
            self.scheduler.cancel(handle);
        }

        let pending = self.pending.clone();
        let func = self.func.clone();
        let immediate = self.immediate;
        let handle = self.scheduler.schedule(
            self.wait_ms,
            Box::new(move || {
                pending.borrow_mut().take();
                if !immediate {
                    let mut f = func.borrow_mut();
                    (*f)();
                }
            }),
        );
        *self.pending.borrow_mut() = Some(handle);

        if call_now {
            let mut f = self.func.borrow_mut();
            (*f)();
        }
    }

    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.pending.borrow().is_some()
    }
}

struct TypewriterRun<S> {
    scheduler: Rc<S>,
    chars: Vec<char>,
    revealed: usize,
    speed_ms: u32,
    sink: Box<dyn FnMut(&str)>,
    handle: TaskHandle,
}

/// Reveal `text` one character at a time through `sink`.
///
/// `sink` receives the full prefix typed so far. It is called with `""`
/// first, then the first character synchronously, then one more character
/// every `speed_ms` ([`DEFAULT_SPEED_MS`] when `None`). The run ends on its
/// own after the last character or when the returned handle is cancelled.
#[cfg(test)]
pub fn type_writer<S: Scheduler + 'static>(
    scheduler: Rc<S>,
    text: &str,
    speed_ms: Option<u32>,
    sink: impl FnMut(&str) + 'static,
) -> TaskHandle {
    let handle = TaskHandle::new();
    type_writer_with(handle.clone(), scheduler, text, speed_ms, sink);
    handle
}

/// Typewriter run driven by a handle the caller already holds, so it can be
/// cancelled before it starts.
pub fn type_writer_with<S: Scheduler + 'static>(
    handle: TaskHandle,
    scheduler: Rc<S>,
    text: &str,
    speed_ms: Option<u32>,
    sink: impl FnMut(&str) + 'static,
) {
    let mut run = TypewriterRun {
        scheduler,
        chars: text.chars().collect(),
        revealed: 0,
        speed_ms: speed_ms.unwrap_or(DEFAULT_SPEED_MS),
        sink: Box::new(sink),
        handle,
    };
    if run.handle.is_cancelled() {
        return;
    }
    (run.sink)("");
    type_step(run);
}

fn type_step<S: Scheduler + 'static>(mut run: TypewriterRun<S>) {
    if run.handle.is_cancelled() || run.revealed >= run.chars.len() {
        return;
    }
    run.revealed += 1;
    let prefix: String = run.chars[..run.revealed].iter().collect();
    (run.sink)(&prefix);
    if run.revealed < run.chars.len() {
        let scheduler = run.scheduler.clone();
        let delay = run.speed_ms;
        let _ = scheduler.schedule(delay, Box::new(move || type_step(run)));
    }
}
