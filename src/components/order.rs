use std::cell::RefCell;
use std::rc::Rc;

use thiserror::Error;

use crate::components::toast::{Toast, ToastKind};
use crate::config::LandingConfig;
use crate::platform::Scheduler;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    Recipient,
    Event,
    Message,
    Character,
    Contact,
}

impl RequiredField {
    pub const ALL: [RequiredField; 5] = [
        RequiredField::Recipient,
        RequiredField::Event,
        RequiredField::Message,
        RequiredField::Character,
        RequiredField::Contact,
    ];

    /// Form control name.
    pub fn name(self) -> &'static str {
        match self {
            RequiredField::Recipient => "recipient",
            RequiredField::Event => "event",
            RequiredField::Message => "message",
            RequiredField::Character => "character",
            RequiredField::Contact => "contact",
        }
    }
}

/// Aggregate validation failure. Only logged in detail, the user sees one message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("missing fields {missing:?}, terms accepted: {terms_accepted}")]
pub struct ValidationError {
    pub missing: Vec<RequiredField>,
    pub terms_accepted: bool,
}

/// Field values as the user left them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderDraft {
    pub recipient: String,
    pub event: String,
    pub message: String,
    pub character: String,
    pub contact: String,
    pub agree: bool,
}

impl OrderDraft {
    pub fn field(&self, field: RequiredField) -> &str {
        match field {
            RequiredField::Recipient => &self.recipient,
            RequiredField::Event => &self.event,
            RequiredField::Message => &self.message,
            RequiredField::Character => &self.character,
            RequiredField::Contact => &self.contact,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let missing: Vec<RequiredField> = RequiredField::ALL
            .into_iter()
            .filter(|field| self.field(*field).trim().is_empty())
            .collect();
        if missing.is_empty() && self.agree {
            Ok(())
        } else {
            Err(ValidationError {
                missing,
                terms_accepted: self.agree,
            })
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitButton {
    pub disabled: bool,
    pub label: String,
}

/// The form as seen by the submission flow.
pub trait OrderSurface {
    fn read_draft(&self) -> OrderDraft;
    fn render_submit(&self, button: &SubmitButton);
    /// Empty every field, put custom selects back on their placeholder and
    /// reset the character counter.
    fn clear(&self);
}

/// Simulated order submission.
#[derive(Clone)]
pub struct OrderForm {
    surface: Rc<dyn OrderSurface>,
    scheduler: Rc<dyn Scheduler>,
    toast: Toast,
    button: Rc<RefCell<SubmitButton>>,
    busy_label: String,
    validation_message: String,
    success_message: String,
    delay_ms: u32,
}

impl OrderForm {
    pub fn new(
        surface: Rc<dyn OrderSurface>,
        scheduler: Rc<dyn Scheduler>,
        toast: Toast,
        config: &LandingConfig,
        submit_label: impl Into<String>,
    ) -> Self {
        Self {
            surface,
            scheduler,
            toast,
            button: Rc::new(RefCell::new(SubmitButton {
                disabled: false,
                label: submit_label.into(),
            })),
            busy_label: config.busy_label.clone(),
            validation_message: config.validation_message.clone(),
            success_message: config.success_message.clone(),
            delay_ms: config.submit_delay_ms,
        }
    }

    pub fn button(&self) -> SubmitButton {
        self.button.borrow().clone()
    }

    pub fn is_submitting(&self) -> bool {
        self.button.borrow().disabled
    }

    /// Validate the current draft and start the simulated round-trip.
    ///
    /// On a validation failure the form is left untouched for correction.
    pub fn submit(&self) -> Result<(), ValidationError> {
        if self.is_submitting() {
            log::debug!("Order already in flight, ignoring submit");
            return Ok(());
        }

        let draft = self.surface.read_draft();
        if let Err(e) = draft.validate() {
            log::info!("Order rejected: {}", e);
            self.toast.show(&self.validation_message, ToastKind::Error);
            return Err(e);
        }

        let idle_label = {
            let mut button = self.button.borrow_mut();
            let idle_label = std::mem::replace(&mut button.label, self.busy_label.clone());
            button.disabled = true;
            idle_label
        };
        self.surface.render_submit(&self.button.borrow());
        log::info!("Submitting order for {}", draft.recipient.trim());

        let form = self.clone();
        self.scheduler.schedule(
            self.delay_ms,
            Box::new(move || form.complete(idle_label)),
        );
        Ok(())
    }

    fn complete(&self, idle_label: String) {
        {
            let mut button = self.button.borrow_mut();
            button.disabled = false;
            button.label = idle_label;
        }
        self.surface.render_submit(&self.button.borrow());
        self.surface.clear();
        self.toast.show(&self.success_message, ToastKind::Success);
        log::info!("Order accepted");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::counter::CharCounter;
    use crate::components::select::CustomSelect;
    use crate::components::toast::tests::RecordingSurface;
    use crate::components::toast::ToastPhase;
    use crate::platform::testing::ManualScheduler;

    /// Form with a real event select and message counter behind it.
    struct FakeForm {
        draft: RefCell<OrderDraft>,
        buttons: RefCell<Vec<SubmitButton>>,
        cleared: RefCell<usize>,
        select: RefCell<CustomSelect>,
        counter: CharCounter,
        counter_text: RefCell<String>,
    }

    impl Default for FakeForm {
        fn default() -> Self {
            let counter = CharCounter::new(300);
            Self {
                draft: RefCell::default(),
                buttons: RefCell::default(),
                cleared: RefCell::default(),
                select: RefCell::new(CustomSelect::new(
                    vec!["Birthday".into(), "Wedding".into()],
                    "Choose an event",
                )),
                counter_text: RefCell::new(counter.empty()),
                counter,
            }
        }
    }

    impl FakeForm {
        /// What the user does before submitting: pick an event, type a message.
        fn fill(&self, draft: &OrderDraft) {
            self.select.borrow_mut().select(0);
            *self.counter_text.borrow_mut() = self.counter.render(&draft.message);
        }
    }

    impl OrderSurface for FakeForm {
        fn read_draft(&self) -> OrderDraft {
            self.draft.borrow().clone()
        }

        fn render_submit(&self, button: &SubmitButton) {
            self.buttons.borrow_mut().push(button.clone());
        }

        fn clear(&self) {
            *self.draft.borrow_mut() = OrderDraft::default();
            self.select.borrow_mut().reset();
            *self.counter_text.borrow_mut() = self.counter.empty();
            *self.cleared.borrow_mut() += 1;
        }
    }

    fn complete_draft() -> OrderDraft {
        OrderDraft {
            recipient: "Mom".into(),
            event: "Birthday".into(),
            message: "Happy birthday!".into(),
            character: "Santa".into(),
            contact: "@mom".into(),
            agree: true,
        }
    }

    struct Harness {
        scheduler: Rc<ManualScheduler>,
        toast_surface: Rc<RecordingSurface>,
        form_surface: Rc<FakeForm>,
        form: OrderForm,
    }

    fn harness(draft: OrderDraft) -> Harness {
        let config = LandingConfig::default();
        let scheduler = Rc::new(ManualScheduler::default());
        let toast_surface = Rc::new(RecordingSurface::default());
        let toast = Toast::new(
            scheduler.clone(),
            toast_surface.clone(),
            config.toast_duration_ms,
            config.toast_fade_ms,
        );
        let form_surface = Rc::new(FakeForm::default());
        form_surface.fill(&draft);
        *form_surface.draft.borrow_mut() = draft;
        let form = OrderForm::new(
            form_surface.clone(),
            scheduler.clone(),
            toast,
            &config,
            "Create video",
        );
        Harness {
            scheduler,
            toast_surface,
            form_surface,
            form,
        }
    }

    #[test]
    fn every_blank_required_field_is_rejected() {
        for field in RequiredField::ALL {
            let mut draft = complete_draft();
            match field {
                RequiredField::Recipient => draft.recipient = "   ".into(),
                RequiredField::Event => draft.event = String::new(),
                RequiredField::Message => draft.message = "\n\t".into(),
                RequiredField::Character => draft.character = String::new(),
                RequiredField::Contact => draft.contact = " ".into(),
            }
            let err = draft.validate().unwrap_err();
            assert_eq!(err.missing, vec![field]);
            assert!(err.terms_accepted);
        }
    }

    #[test]
    fn unchecked_terms_is_rejected() {
        let draft = OrderDraft {
            agree: false,
            ..complete_draft()
        };
        let err = draft.validate().unwrap_err();
        assert!(err.missing.is_empty());
        assert!(!err.terms_accepted);
        assert!(complete_draft().validate().is_ok());
    }

    #[test]
    fn invalid_submit_shows_error_and_keeps_values() {
        let draft = OrderDraft {
            contact: "  ".into(),
            ..complete_draft()
        };
        let h = harness(draft.clone());

        assert!(h.form.submit().is_err());

        let toast = h.toast_surface.last();
        assert_eq!(toast.kind, Some(ToastKind::Error));
        assert_eq!(toast.message, LandingConfig::default().validation_message);
        assert_eq!(*h.form_surface.draft.borrow(), draft);
        assert_eq!(h.form_surface.select.borrow().hidden_value(), "Birthday");
        assert_eq!(*h.form_surface.counter_text.borrow(), "15/300");
        assert!(h.form_surface.buttons.borrow().is_empty());
        assert_eq!(h.scheduler.pending(), 1); // only the toast timer
        assert!(!h.form.is_submitting());
    }

    #[test]
    fn valid_submit_busy_then_reset_with_success() {
        let h = harness(complete_draft());

        assert_eq!(h.form_surface.select.borrow().hidden_value(), "Birthday");
        assert_eq!(*h.form_surface.counter_text.borrow(), "15/300");

        h.form.submit().unwrap();
        assert_eq!(
            h.form.button(),
            SubmitButton {
                disabled: true,
                label: "Создаём...".into()
            }
        );
        assert_eq!(*h.form_surface.cleared.borrow(), 0);

        h.scheduler.advance(1499);
        assert!(h.form.is_submitting());

        h.scheduler.advance(1);
        assert_eq!(
            h.form.button(),
            SubmitButton {
                disabled: false,
                label: "Create video".into()
            }
        );
        assert_eq!(*h.form_surface.cleared.borrow(), 1);
        assert_eq!(*h.form_surface.draft.borrow(), OrderDraft::default());
        let select = h.form_surface.select.borrow();
        assert_eq!(select.display_text(), "Choose an event");
        assert_eq!(select.hidden_value(), "");
        assert_eq!(select.active(), None);
        assert_eq!(*h.form_surface.counter_text.borrow(), "0/300");

        let toast = h.toast_surface.last();
        assert_eq!(toast.kind, Some(ToastKind::Success));
        assert_eq!(toast.phase, ToastPhase::Visible);

        let rendered = h.form_surface.buttons.borrow();
        assert_eq!(rendered.len(), 2);
        assert!(rendered[0].disabled);
        assert!(!rendered[1].disabled);
    }

    #[test]
    fn submit_while_in_flight_is_ignored() {
        let h = harness(complete_draft());
        h.form.submit().unwrap();
        h.form.submit().unwrap();
        assert_eq!(h.scheduler.pending(), 1);

        h.scheduler.advance(1500);
        assert_eq!(*h.form_surface.cleared.borrow(), 1);
        assert_eq!(h.form.button().label, "Create video");
    }
}
