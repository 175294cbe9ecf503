use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use web_sys::HtmlElement;

use crate::components::accordion::Accordion;
use crate::dom::PageContext;
use crate::error::LandingError;
use crate::utils::dom;

pub fn wire_accordion(ctx: &PageContext) -> Result<(), LandingError> {
    let mut questions = Vec::new();
    let mut panels: Vec<HtmlElement> = Vec::new();
    for question in dom::query_all(&ctx.document, ".acc-q")? {
        let panel = question
            .parent_element()
            .and_then(|parent| dom::query::<HtmlElement>(&parent, ".acc-a"));
        match panel {
            Some(panel) => {
                questions.push(question);
                panels.push(panel);
            }
            None => log::warn!("Accordion question without an answer panel"),
        }
    }

    let panels = Rc::new(panels);
    let accordion = Rc::new(RefCell::new(Accordion::new(panels.len())));

    for (idx, question) in questions.iter().enumerate() {
        let window = ctx.window.clone();
        let panels = panels.clone();
        let accordion = accordion.clone();
        EventListener::new(question, "click", move |_| {
            // the stylesheet decides the initial display, so ask the page
            let rendered_open = window
                .get_computed_style(&panels[idx])
                .ok()
                .flatten()
                .and_then(|style| style.get_property_value("display").ok())
                .map(|display| display == "block")
                .unwrap_or(false);

            let mut accordion = accordion.borrow_mut();
            accordion.sync(idx, rendered_open);
            accordion.toggle(idx);
            for (panel_idx, panel) in panels.iter().enumerate() {
                let display = if accordion.is_open(panel_idx) { "block" } else { "none" };
                if let Err(e) = panel.style().set_property("display", display) {
                    log::warn!("Failed to set accordion panel display: {:?}", e);
                }
            }
        })
        .forget();
    }
    Ok(())
}
