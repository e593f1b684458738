// Host-side tests for debounce and the typewriter, driven by a manual clock.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod timing {
    include!("../src/behavior/timing.rs");
}

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use timing::*;

type Task = (u64, u64, Box<dyn FnOnce()>);

/// Virtual clock: tasks only run inside `advance`.
#[derive(Default)]
struct ManualScheduler {
    now: Cell<u64>,
    next_id: Cell<u64>,
    queue: RefCell<Vec<Task>>,
}

impl ManualScheduler {
    fn advance(&self, ms: u64) {
        let target = self.now.get() + ms;
        loop {
            let next = {
                let mut q = self.queue.borrow_mut();
                let idx = q
                    .iter()
                    .enumerate()
                    .filter(|(_, t)| t.0 <= target)
                    .min_by_key(|(_, t)| (t.0, t.1))
                    .map(|(i, _)| i);
                idx.map(|i| q.remove(i))
            };
            match next {
                Some((due, _, task)) => {
                    self.now.set(due);
                    task();
                }
                None => break,
            }
        }
        self.now.set(target);
    }

    fn pending(&self) -> usize {
        self.queue.borrow().len()
    }
}

impl Scheduler for ManualScheduler {
    type Handle = u64;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> u64 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let due = self.now.get() + delay_ms as u64;
        self.queue.borrow_mut().push((due, id, task));
        id
    }

    fn cancel(&self, handle: u64) {
        self.queue.borrow_mut().retain(|t| t.1 != handle);
    }
}

fn recorder(sched: &Rc<ManualScheduler>) -> (Rc<RefCell<Vec<u64>>>, impl FnMut() + 'static) {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let sink = calls.clone();
    let clock = sched.clone();
    (calls, move || sink.borrow_mut().push(clock.now.get()))
}

#[test]
fn trailing_debounce_fires_once_after_last_call() {
    let sched = Rc::new(ManualScheduler::default());
    let (calls, f) = recorder(&sched);
    let debounced = Debounced::new(sched.clone(), 100, false, f);

    debounced.call();
    sched.advance(50);
    debounced.call();
    sched.advance(50);
    debounced.call();
    assert!(calls.borrow().is_empty());

    sched.advance(99);
    assert!(calls.borrow().is_empty());
    assert!(debounced.is_pending());

    sched.advance(1);
    assert_eq!(*calls.borrow(), vec![200]);
    assert!(!debounced.is_pending());

    sched.advance(1000);
    assert_eq!(calls.borrow().len(), 1);
}

#[test]
fn trailing_debounce_keeps_a_single_timer() {
    let sched = Rc::new(ManualScheduler::default());
    let (_calls, f) = recorder(&sched);
    let debounced = Debounced::new(sched.clone(), 100, false, f);
    for _ in 0..10 {
        debounced.call();
        sched.advance(10);
    }
    assert_eq!(sched.pending(), 1);
}

#[test]
fn separate_bursts_fire_separately() {
    let sched = Rc::new(ManualScheduler::default());
    let (calls, f) = recorder(&sched);
    let debounced = Debounced::new(sched.clone(), 100, false, f);

    debounced.call();
    sched.advance(150);
    debounced.call();
    sched.advance(150);
    assert_eq!(*calls.borrow(), vec![100, 250]);
}

#[test]
fn leading_debounce_fires_immediately_and_suppresses_burst() {
    let sched = Rc::new(ManualScheduler::default());
    let (calls, f) = recorder(&sched);
    let debounced = Debounced::new(sched.clone(), 100, true, f);

    debounced.call();
    assert_eq!(*calls.borrow(), vec![0]);
    sched.advance(50);
    debounced.call();
    sched.advance(50);
    debounced.call();
    sched.advance(500);
    assert_eq!(*calls.borrow(), vec![0]);

    // window elapsed: next call fires right away again
    debounced.call();
    assert_eq!(*calls.borrow(), vec![0, 600]);
}

type Typed = (Rc<RefCell<Vec<String>>>, TaskHandle);

fn typed_at(sched: &Rc<ManualScheduler>, text: &str, speed: Option<u32>) -> Typed {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    let handle = type_writer(sched.clone(), text, speed, move |s| {
        sink.borrow_mut().push(s.to_string())
    });
    (seen, handle)
}

fn typed(sched: &Rc<ManualScheduler>, text: &str, speed: u32) -> Typed {
    typed_at(sched, text, Some(speed))
}

#[test]
fn typewriter_clears_then_types_first_char_synchronously() {
    let sched = Rc::new(ManualScheduler::default());
    let (seen, _) = typed(&sched, "Rust", 50);
    assert_eq!(*seen.borrow(), vec!["", "R"]);
}

#[test]
fn typewriter_reveals_one_char_per_tick() {
    let sched = Rc::new(ManualScheduler::default());
    let (seen, _) = typed(&sched, "Rust", 50);

    sched.advance(49);
    assert_eq!(seen.borrow().last().map(String::as_str), Some("R"));
    sched.advance(1);
    assert_eq!(seen.borrow().last().map(String::as_str), Some("Ru"));
    sched.advance(100);
    assert_eq!(*seen.borrow(), vec!["", "R", "Ru", "Rus", "Rust"]);
    assert_eq!(sched.pending(), 0);
}

#[test]
fn typewriter_without_speed_uses_default_interval() {
    assert_eq!(DEFAULT_SPEED_MS, 100);
    let sched = Rc::new(ManualScheduler::default());
    let (seen, _) = typed_at(&sched, "abc", None);

    sched.advance(99);
    assert_eq!(*seen.borrow(), vec!["", "a"]);
    sched.advance(1);
    assert_eq!(*seen.borrow(), vec!["", "a", "ab"]);
    sched.advance(100);
    assert_eq!(*seen.borrow(), vec!["", "a", "ab", "abc"]);
    assert_eq!(sched.pending(), 0);
}

#[test]
fn typewriter_counts_characters_not_bytes() {
    let sched = Rc::new(ManualScheduler::default());
    let (seen, _) = typed(&sched, "héllo ✓", 100);
    sched.advance(10_000);
    let seen = seen.borrow();
    assert_eq!(seen.len(), 1 + "héllo ✓".chars().count());
    assert_eq!(seen[2], "hé");
    assert_eq!(seen.last().map(String::as_str), Some("héllo ✓"));
}

#[test]
fn typewriter_empty_text_only_clears() {
    let sched = Rc::new(ManualScheduler::default());
    let (seen, _) = typed(&sched, "", 50);
    assert_eq!(*seen.borrow(), vec![""]);
    assert_eq!(sched.pending(), 0);
}

#[test]
fn typewriter_runs_to_completion_without_cancel() {
    let sched = Rc::new(ManualScheduler::default());
    let (seen, handle) = typed(&sched, "abc", 100);
    sched.advance(200);
    assert!(!handle.is_cancelled());
    assert_eq!(seen.borrow().last().map(String::as_str), Some("abc"));
}

#[test]
fn cancelled_typewriter_stops() {
    let sched = Rc::new(ManualScheduler::default());
    let (seen, handle) = typed(&sched, "portfolio", 50);
    sched.advance(50);
    handle.cancel();
    sched.advance(1000);
    assert_eq!(*seen.borrow(), vec!["", "p", "po"]);
    assert_eq!(sched.pending(), 0);
}

#[test]
fn pre_cancelled_handle_never_writes() {
    let sched = Rc::new(ManualScheduler::default());
    let seen = Rc::new(RefCell::new(Vec::<String>::new()));
    let sink = seen.clone();
    let handle = TaskHandle::new();
    handle.cancel();
    type_writer_with(handle, sched.clone(), "abc", Some(50), move |s| {
        sink.borrow_mut().push(s.to_string())
    });
    sched.advance(500);
    assert!(seen.borrow().is_empty());
}

#[test]
fn task_handle_clones_share_cancellation() {
    let a = TaskHandle::new();
    let b = a.clone();
    assert!(!b.is_cancelled());
    a.cancel();
    assert!(b.is_cancelled());
}
