use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, HtmlInputElement, KeyboardEvent};

use crate::components::select::{CustomSelect, KeyOutcome};
use crate::dom::PageContext;
use crate::error::LandingError;
use crate::utils::dom;

/// One `.custom-select` on the page together with its state.
pub struct SelectBinding {
    root: Element,
    trigger: HtmlElement,
    options: Vec<Element>,
    hidden: Option<HtmlInputElement>,
    state: RefCell<CustomSelect>,
}

impl SelectBinding {
    fn from_root(root: Element, fallback_placeholder: &str) -> Result<Self, LandingError> {
        let trigger: HtmlElement = dom::query(&root, ".cs-trigger")
            .ok_or_else(|| LandingError::MissingElement(".cs-trigger".to_string()))?;
        let options = dom::query_all_in(&root, ".cs-options li")?;
        let hidden = dom::query(&root, "input[type=\"hidden\"]");

        let values = options
            .iter()
            .map(|opt| {
                opt.get_attribute("data-value")
                    .unwrap_or_else(|| opt.text_content().unwrap_or_default().trim().to_string())
            })
            .collect();
        let placeholder = trigger
            .text_content()
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| fallback_placeholder.to_string());

        Ok(Self {
            root,
            trigger,
            options,
            hidden,
            state: RefCell::new(CustomSelect::new(values, placeholder)),
        })
    }

    /// Open marker and expanded attribute only.
    fn render_open(&self) {
        let state = self.state.borrow();
        dom::set_class(&self.root, "open", state.is_open());
        if let Err(e) = self.root.set_attribute("aria-expanded", state.aria_expanded()) {
            log::warn!("Failed to set aria-expanded on select: {:?}", e);
        }
    }

    fn render(&self) {
        self.render_open();
        let state = self.state.borrow();
        self.trigger.set_text_content(Some(state.display_text()));
        if let Some(hidden) = &self.hidden {
            hidden.set_value(state.hidden_value());
        }
        for (idx, option) in self.options.iter().enumerate() {
            dom::set_class(option, "active", state.active() == Some(idx));
        }
    }

    fn on_document_click(&self, inside: bool) {
        let closed = self.state.borrow_mut().on_document_click(inside);
        if closed {
            self.render_open();
        }
    }

    /// Placeholder text, empty hidden value, no active option.
    pub fn reset(&self) {
        self.state.borrow_mut().reset();
        self.render();
    }
}

pub fn wire_selects(ctx: &PageContext) -> Result<Vec<Rc<SelectBinding>>, LandingError> {
    let mut bindings = Vec::new();
    for root in dom::query_all(&ctx.document, ".custom-select")? {
        let binding = match SelectBinding::from_root(root, &ctx.config.select_placeholder) {
            Ok(binding) => Rc::new(binding),
            Err(e) => {
                log::warn!("Skipping malformed custom select: {}", e);
                continue;
            }
        };
        wire_select(ctx, &binding);
        bindings.push(binding);
    }
    log::debug!("Wired {} custom selects", bindings.len());
    Ok(bindings)
}

fn wire_select(ctx: &PageContext, binding: &Rc<SelectBinding>) {
    {
        let binding = binding.clone();
        EventListener::new(&binding.trigger.clone(), "click", move |event| {
            event.stop_propagation();
            binding.state.borrow_mut().toggle();
            binding.render_open();
        })
        .forget();
    }

    {
        let binding = binding.clone();
        EventListener::new_with_options(
            &binding.root.clone(),
            "keydown",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                let outcome = binding.state.borrow_mut().on_key(&event.key());
                match outcome {
                    KeyOutcome::Toggled(_) => {
                        event.prevent_default();
                        binding.render_open();
                    }
                    KeyOutcome::Closed => binding.render_open(),
                    KeyOutcome::Ignored => {}
                }
            },
        )
        .forget();
    }

    for (idx, option) in binding.options.iter().enumerate() {
        let binding = binding.clone();
        EventListener::new(option, "click", move |event| {
            event.stop_propagation();
            let chosen = binding.state.borrow_mut().select(idx).map(str::to_string);
            if let Some(value) = chosen {
                log::debug!("Selected {}", value);
            }
            binding.render();
            if let Err(e) = binding.trigger.focus() {
                log::debug!("Could not focus select trigger: {:?}", e);
            }
        })
        .forget();
    }

    // containment, not target equality: nested children count as inside
    let binding = binding.clone();
    EventListener::new(&ctx.document, "click", move |event| {
        let inside = dom::event_node(event)
            .map(|node| binding.root.contains(Some(&node)))
            .unwrap_or(false);
        binding.on_document_click(inside);
    })
    .forget();
}
