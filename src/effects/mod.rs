use crate::behavior::groups::{groups_in, Group, Phase};
use crate::behavior::timing::TaskHandle;
use crate::config::PageConfig;
use crate::dom::{ElementRegistry, Listener, Observer};
use crate::scheduler::WindowScheduler;
use instant::Instant;
use std::rc::Rc;
use web_sys as web;

mod a11y;
mod animation;
mod cursor;
mod diagnostics;
mod entrance;
mod interactive;
mod nav;
mod scroll;

/// Everything an effect group needs to install itself.
pub struct PageContext {
    pub window: web::Window,
    pub registry: ElementRegistry,
    pub scheduler: Rc<WindowScheduler>,
    pub config: PageConfig,
}

/// Listener, observer and task lifetimes owned by the controller.
#[derive(Default)]
pub struct Bindings {
    listeners: Vec<Listener>,
    observers: Vec<Observer>,
    tasks: Vec<TaskHandle>,
}

impl Bindings {
    pub fn listen(
        &mut self,
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<()> {
        self.listeners.push(Listener::new(target, kind, handler)?);
        Ok(())
    }

    /// Run `handler` once the window `load` event has fired, immediately if it
    /// already has.
    pub fn on_load(
        &mut self,
        ctx: &PageContext,
        handler: impl FnOnce() + 'static,
    ) -> anyhow::Result<()> {
        if ctx.registry.document().ready_state() == "complete" {
            handler();
            return Ok(());
        }
        let mut handler = Some(handler);
        self.listen(&ctx.window, "load", move |_| {
            if let Some(h) = handler.take() {
                h();
            }
        })
    }

    pub fn keep_observer(&mut self, observer: Observer) {
        self.observers.push(observer);
    }

    pub fn keep_task(&mut self, task: TaskHandle) {
        self.tasks.push(task);
    }
}

type Installer = fn(&PageContext, &mut Bindings) -> anyhow::Result<()>;

fn installer(group: Group) -> Installer {
    match group {
        Group::Diagnostics => diagnostics::install,
        Group::A11y => a11y::install,
        Group::Nav => nav::install,
        Group::Scroll => scroll::install,
        Group::Animation => animation::install,
        Group::Interactive => interactive::install,
        Group::Cursor => cursor::install,
        Group::Entrance => entrance::install,
    }
}

/// Owns every effect installed on the page and keeps it until the page
/// unloads. Window-level groups go in when the controller is built; the rest
/// wait for [`PageController::install_ready`].
pub struct PageController {
    ctx: PageContext,
    bindings: Bindings,
    ready: bool,
}

impl PageController {
    pub fn new(window: web::Window, document: web::Document, config: PageConfig) -> Self {
        let config = if config.is_valid() {
            config
        } else {
            log::warn!("[page] invalid config {:?}; using defaults", config);
            PageConfig::default()
        };
        let ctx = PageContext {
            scheduler: Rc::new(WindowScheduler::new(window.clone())),
            window,
            registry: ElementRegistry::new(document),
            config,
        };
        let mut controller = Self {
            ctx,
            bindings: Bindings::default(),
            ready: false,
        };
        controller.install_phase(Phase::Startup);
        controller
    }

    /// Install the groups that query the markup. Call once the DOM is parsed;
    /// later calls do nothing.
    pub fn install_ready(&mut self) {
        if self.ready {
            return;
        }
        self.ready = true;
        self.install_phase(Phase::DocumentReady);
    }

    fn install_phase(&mut self, phase: Phase) {
        let started = Instant::now();
        let listeners = self.bindings.listeners.len();
        let observers = self.bindings.observers.len();
        for group in groups_in(phase) {
            if let Err(e) = installer(group)(&self.ctx, &mut self.bindings) {
                log::warn!("[{}] install failed: {:?}", group.name(), e);
            }
        }
        log::info!(
            "[page] {:?}: installed {} listeners, {} observers in {:?}",
            phase,
            self.bindings.listeners.len() - listeners,
            self.bindings.observers.len() - observers,
            started.elapsed()
        );
    }

    /// Stop scheduled animations (the subtitle typewriter). Nothing on the
    /// page calls this; it exists for embedding and teardown.
    pub fn cancel_animations(&self) {
        for task in &self.bindings.tasks {
            task.cancel();
        }
    }
}
