use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{
    Element, FormData, HtmlButtonElement, HtmlElement, HtmlFormElement, HtmlInputElement,
    HtmlTextAreaElement,
};

use crate::components::counter::CharCounter;
use crate::components::order::{OrderDraft, OrderForm, OrderSurface, RequiredField, SubmitButton};
use crate::components::toast::{Toast, ToastKind, ToastState, ToastSurface};
use crate::dom::select::SelectBinding;
use crate::dom::PageContext;
use crate::error::LandingError;
use crate::utils::dom;

/// Message field and its "n/300" display.
pub struct CounterBinding {
    field: HtmlTextAreaElement,
    display: Element,
    counter: CharCounter,
}

impl CounterBinding {
    fn update(&self) {
        self.display
            .set_text_content(Some(&self.counter.render(&self.field.value())));
    }

    fn clear(&self) {
        self.display.set_text_content(Some(&self.counter.empty()));
    }
}

pub fn wire_counter(ctx: &PageContext) -> Option<Rc<CounterBinding>> {
    let field = ctx
        .document
        .query_selector("textarea[name=\"message\"]")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlTextAreaElement>().ok())?;
    let display = ctx.document.get_element_by_id("charCount")?;
    let binding = Rc::new(CounterBinding {
        field,
        display,
        counter: CharCounter::new(ctx.config.char_limit),
    });

    binding.update();
    let listener_binding = binding.clone();
    EventListener::new(&binding.field, "input", move |_| listener_binding.update()).forget();
    Some(binding)
}

struct ToastElement {
    element: HtmlElement,
    error_background: String,
    success_background: String,
}

impl ToastSurface for ToastElement {
    fn render(&self, state: &ToastState) {
        self.element.set_text_content(Some(&state.message));
        let background = match state.kind {
            Some(ToastKind::Error) => self.error_background.as_str(),
            Some(ToastKind::Success) | None => self.success_background.as_str(),
        };
        let display = if state.displayed() { "block" } else { "none" };
        let style = self.element.style();
        let result = style
            .set_property("display", display)
            .and_then(|_| style.set_property("opacity", state.opacity()))
            .and_then(|_| style.set_property("background", background));
        if let Err(e) = result {
            log::warn!("Failed to render toast: {:?}", e);
        }
    }
}

struct FormElement {
    form: HtmlFormElement,
    submit: Option<HtmlButtonElement>,
    selects: Vec<Rc<SelectBinding>>,
    counter: Option<Rc<CounterBinding>>,
}

impl OrderSurface for FormElement {
    fn read_draft(&self) -> OrderDraft {
        let data = match FormData::new_with_form(&self.form) {
            Ok(data) => Some(data),
            Err(e) => {
                log::error!("Failed to read order form: {:?}", e);
                None
            }
        };
        let value = |field: RequiredField| {
            data.as_ref()
                .and_then(|data| data.get(field.name()).as_string())
                .unwrap_or_default()
        };
        let agree = dom::query::<HtmlInputElement>(&self.form, "[name=\"agree\"]")
            .map(|input| input.checked())
            .unwrap_or(false);

        OrderDraft {
            recipient: value(RequiredField::Recipient),
            event: value(RequiredField::Event),
            message: value(RequiredField::Message),
            character: value(RequiredField::Character),
            contact: value(RequiredField::Contact),
            agree,
        }
    }

    fn render_submit(&self, button: &SubmitButton) {
        if let Some(submit) = &self.submit {
            submit.set_disabled(button.disabled);
            submit.set_text_content(Some(&button.label));
        }
    }

    fn clear(&self) {
        self.form.reset();
        for select in &self.selects {
            select.reset();
        }
        if let Some(counter) = &self.counter {
            counter.clear();
        }
    }
}

pub fn wire_order_form(
    ctx: &PageContext,
    selects: Vec<Rc<SelectBinding>>,
    counter: Option<Rc<CounterBinding>>,
) -> Result<(), LandingError> {
    let form: HtmlFormElement = dom::by_id(&ctx.document, "orderForm")?;
    let toast_element: HtmlElement = dom::by_id(&ctx.document, "toast")?;
    let submit = dom::query::<HtmlButtonElement>(&form, "button[type=\"submit\"]");
    let submit_label = submit
        .as_ref()
        .and_then(|button| button.text_content())
        .unwrap_or_default();

    let toast = Toast::new(
        ctx.scheduler.clone(),
        Rc::new(ToastElement {
            element: toast_element,
            error_background: ctx.config.toast_error_background.clone(),
            success_background: ctx.config.toast_success_background.clone(),
        }),
        ctx.config.toast_duration_ms,
        ctx.config.toast_fade_ms,
    );
    let surface = Rc::new(FormElement {
        form: form.clone(),
        submit,
        selects,
        counter,
    });
    let order = OrderForm::new(surface, ctx.scheduler.clone(), toast, &ctx.config, submit_label);

    EventListener::new_with_options(
        &form,
        "submit",
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            event.prevent_default();
            if let Err(e) = order.submit() {
                log::debug!("Order not submitted: {}", e);
            }
        },
    )
    .forget();
    Ok(())
}
