use std::cell::RefCell;
use std::rc::Rc;

use crate::platform::Scheduler;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Error,
    Success,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastPhase {
    #[default]
    Hidden,
    Visible,
    FadingOut,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToastState {
    pub message: String,
    pub kind: Option<ToastKind>,
    pub phase: ToastPhase,
    generation: u64,
}

impl ToastState {
    /// Opacity the surface should render with.
    pub fn opacity(&self) -> &'static str {
        match self.phase {
            ToastPhase::Visible => "1",
            ToastPhase::Hidden | ToastPhase::FadingOut => "0",
        }
    }

    pub fn displayed(&self) -> bool {
        self.phase != ToastPhase::Hidden
    }
}

pub trait ToastSurface {
    fn render(&self, state: &ToastState);
}

/// The page's single notification surface.
///
/// Each `show` starts a new generation. Timers left over from an earlier
/// toast find a newer generation and do nothing, so the latest message is
/// always kept for its full duration.
#[derive(Clone)]
pub struct Toast {
    state: Rc<RefCell<ToastState>>,
    scheduler: Rc<dyn Scheduler>,
    surface: Rc<dyn ToastSurface>,
    duration_ms: u32,
    fade_ms: u32,
}

impl Toast {
    pub fn new(
        scheduler: Rc<dyn Scheduler>,
        surface: Rc<dyn ToastSurface>,
        duration_ms: u32,
        fade_ms: u32,
    ) -> Self {
        Self {
            state: Rc::new(RefCell::new(ToastState::default())),
            scheduler,
            surface,
            duration_ms,
            fade_ms,
        }
    }

    pub fn state(&self) -> ToastState {
        self.state.borrow().clone()
    }

    pub fn show(&self, message: &str, kind: ToastKind) {
        let generation = {
            let mut state = self.state.borrow_mut();
            state.generation += 1;
            state.message = message.to_string();
            state.kind = Some(kind);
            state.phase = ToastPhase::Visible;
            state.generation
        };
        self.render();

        let toast = self.clone();
        self.scheduler.schedule(
            self.duration_ms,
            Box::new(move || {
                if !toast.advance(generation, ToastPhase::FadingOut) {
                    return;
                }
                let hide = toast.clone();
                toast.scheduler.schedule(
                    toast.fade_ms,
                    Box::new(move || {
                        hide.advance(generation, ToastPhase::Hidden);
                    }),
                );
            }),
        );
    }

    fn advance(&self, generation: u64, phase: ToastPhase) -> bool {
        {
            let mut state = self.state.borrow_mut();
            if state.generation != generation {
                log::debug!("Skipping stale toast timer");
                return false;
            }
            state.phase = phase;
        }
        self.render();
        true
    }

    fn render(&self) {
        let state = self.state.borrow();
        self.surface.render(&state);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::platform::testing::ManualScheduler;

    #[derive(Default)]
    pub(crate) struct RecordingSurface {
        pub frames: RefCell<Vec<ToastState>>,
    }

    impl RecordingSurface {
        pub fn last(&self) -> ToastState {
            self.frames.borrow().last().cloned().unwrap_or_default()
        }
    }

    impl ToastSurface for RecordingSurface {
        fn render(&self, state: &ToastState) {
            self.frames.borrow_mut().push(state.clone());
        }
    }

    fn toast() -> (Rc<ManualScheduler>, Rc<RecordingSurface>, Toast) {
        let scheduler = Rc::new(ManualScheduler::default());
        let surface = Rc::new(RecordingSurface::default());
        let toast = Toast::new(scheduler.clone(), surface.clone(), 3000, 350);
        (scheduler, surface, toast)
    }

    #[test]
    fn shows_then_fades_then_hides() {
        let (scheduler, surface, toast) = toast();
        toast.show("Saved", ToastKind::Success);

        let shown = surface.last();
        assert_eq!(shown.message, "Saved");
        assert_eq!(shown.kind, Some(ToastKind::Success));
        assert_eq!(shown.opacity(), "1");
        assert!(shown.displayed());

        scheduler.advance(2999);
        assert_eq!(toast.state().phase, ToastPhase::Visible);
        scheduler.advance(1);
        assert_eq!(toast.state().phase, ToastPhase::FadingOut);
        assert_eq!(surface.last().opacity(), "0");
        assert!(surface.last().displayed());

        scheduler.advance(350);
        assert_eq!(toast.state().phase, ToastPhase::Hidden);
        assert!(!surface.last().displayed());
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn later_toast_keeps_its_full_duration() {
        let (scheduler, _surface, toast) = toast();
        toast.show("first", ToastKind::Error);
        scheduler.advance(2000);
        toast.show("second", ToastKind::Success);

        // the first toast's timer fires here and must not fade the second
        scheduler.advance(1000);
        let state = toast.state();
        assert_eq!(state.message, "second");
        assert_eq!(state.phase, ToastPhase::Visible);

        scheduler.advance(2000);
        assert_eq!(toast.state().phase, ToastPhase::FadingOut);
        scheduler.advance(350);
        assert_eq!(toast.state().phase, ToastPhase::Hidden);
    }
}
