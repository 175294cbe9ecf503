//! Capabilities the interaction logic needs from the browser.
//!
//! The components only talk to these traits; `dom::platform` implements them
//! on top of `web-sys` and the tests substitute deterministic fakes.

use crate::error::LandingError;

pub trait Viewport {
    /// Current vertical scroll offset in CSS pixels.
    fn scroll_y(&self) -> f64;
    /// Smoothly scroll to the page origin.
    fn scroll_to_top(&self);
    /// Smoothly scroll the element with `id` to the top of the viewport.
    /// Returns false when there is no such element.
    fn scroll_into_view(&self, id: &str) -> bool;
    /// Suppress or restore scrolling of the page behind an overlay.
    fn set_scroll_locked(&self, locked: bool);
    /// Blocking notice.
    fn alert(&self, message: &str);
}

#[cfg_attr(test, mockall::automock)]
pub trait MediaPlayer {
    fn set_source(&self, src: &str) -> Result<(), LandingError>;
    fn load(&self) -> Result<(), LandingError>;
    /// Start playback. Implementations resolve the platform promise on their own.
    fn play(&self) -> Result<(), LandingError>;
    fn pause(&self) -> Result<(), LandingError>;
    /// Seek back to time zero.
    fn rewind(&self) -> Result<(), LandingError>;
}

/// Fire-and-forget delayed callbacks. Scheduled tasks cannot be cancelled.
pub trait Scheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::{Cell, RefCell};
    use std::collections::HashSet;

    use super::{Scheduler, Viewport};

    struct Pending {
        due: u64,
        seq: u64,
        task: Box<dyn FnOnce()>,
    }

    /// Scheduler driven by hand: tasks run only when `advance` passes their due time.
    #[derive(Default)]
    pub struct ManualScheduler {
        now: Cell<u64>,
        seq: Cell<u64>,
        pending: RefCell<Vec<Pending>>,
    }

    impl ManualScheduler {
        pub fn pending(&self) -> usize {
            self.pending.borrow().len()
        }

        /// Move the clock forward, running due tasks in (due, insertion) order.
        /// Tasks scheduled by a running task are picked up in the same call.
        pub fn advance(&self, ms: u64) {
            let target = self.now.get() + ms;
            loop {
                let next = {
                    let mut pending = self.pending.borrow_mut();
                    let idx = pending
                        .iter()
                        .enumerate()
                        .filter(|(_, p)| p.due <= target)
                        .min_by_key(|(_, p)| (p.due, p.seq))
                        .map(|(idx, _)| idx);
                    idx.map(|idx| pending.remove(idx))
                };
                match next {
                    Some(p) => {
                        self.now.set(p.due);
                        (p.task)();
                    }
                    None => break,
                }
            }
            self.now.set(target);
        }
    }

    impl Scheduler for ManualScheduler {
        fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
            let seq = self.seq.get();
            self.seq.set(seq + 1);
            self.pending.borrow_mut().push(Pending {
                due: self.now.get() + u64::from(delay_ms),
                seq,
                task,
            });
        }
    }

    /// Viewport over a fixed set of element ids that records what it was asked to do.
    #[derive(Default)]
    pub struct FakeViewport {
        pub ids: HashSet<String>,
        pub scroll_y: Cell<f64>,
        pub scrolled_to: RefCell<Vec<String>>,
        pub scrolled_to_top: Cell<usize>,
        pub scroll_locked: Cell<bool>,
        pub alerts: RefCell<Vec<String>>,
    }

    impl FakeViewport {
        pub fn with_ids(ids: &[&str]) -> Self {
            Self {
                ids: ids.iter().map(|id| id.to_string()).collect(),
                ..Default::default()
            }
        }
    }

    impl Viewport for FakeViewport {
        fn scroll_y(&self) -> f64 {
            self.scroll_y.get()
        }

        fn scroll_to_top(&self) {
            self.scrolled_to_top.set(self.scrolled_to_top.get() + 1);
            self.scroll_y.set(0.0);
        }

        fn scroll_into_view(&self, id: &str) -> bool {
            if !self.ids.contains(id) {
                return false;
            }
            self.scrolled_to.borrow_mut().push(id.to_string());
            true
        }

        fn set_scroll_locked(&self, locked: bool) {
            self.scroll_locked.set(locked);
        }

        fn alert(&self, message: &str) {
            self.alerts.borrow_mut().push(message.to_string());
        }
    }
}
