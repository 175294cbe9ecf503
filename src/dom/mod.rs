//! Wires the components to the document.

pub mod accordion;
pub mod modal;
pub mod navigation;
pub mod order;
pub mod platform;
pub mod reveal;
pub mod select;

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Document, Element, Window};

use crate::components::nav::NavMenu;
use crate::config::{LandingConfig, CONFIG_ELEMENT_ID};
use crate::error::LandingError;
use crate::dom::platform::{TimeoutScheduler, WindowViewport};
use crate::utils::dom;

/// Everything the registration routines share, built once at startup.
#[derive(Clone)]
pub struct PageContext {
    pub window: Window,
    pub document: Document,
    pub config: Rc<LandingConfig>,
    pub viewport: Rc<WindowViewport>,
    pub scheduler: Rc<TimeoutScheduler>,
    pub nav: Rc<RefCell<NavMenu>>,
    pub nav_element: Option<Element>,
    pub nav_toggle: Option<Element>,
}

impl PageContext {
    pub fn new() -> Result<Self, LandingError> {
        let window = dom::window()?;
        let document = dom::document(&window)?;
        let raw_config = document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content());
        let config = LandingConfig::from_optional_json(raw_config.as_deref());

        Ok(Self {
            viewport: Rc::new(WindowViewport::new(window.clone(), document.clone())),
            scheduler: Rc::new(TimeoutScheduler),
            nav: Rc::new(RefCell::new(NavMenu::new())),
            nav_element: document.query_selector(".nav").ok().flatten(),
            nav_toggle: document.get_element_by_id("mobileToggle"),
            config: Rc::new(config),
            window,
            document,
        })
    }

    /// Push the menu state onto the nav container and its toggle.
    pub fn render_nav(&self) {
        let nav = self.nav.borrow();
        if let Some(element) = &self.nav_element {
            dom::set_class(element, "mobile-open", nav.is_open());
        }
        if let Some(toggle) = &self.nav_toggle {
            if let Err(e) = toggle.set_attribute("aria-expanded", nav.aria_expanded()) {
                log::warn!("Failed to set aria-expanded on menu toggle: {:?}", e);
            }
        }
    }
}

fn report(feature: &str, result: Result<(), LandingError>) {
    match result {
        Ok(()) => log::debug!("Wired {}", feature),
        Err(e) => log::warn!("Skipping {}: {}", feature, e),
    }
}

/// Build the context and attach every handler. A block missing from the page
/// only disables its own behaviour.
pub fn boot() -> Result<(), LandingError> {
    let ctx = PageContext::new()?;

    report("anchor scrolling", navigation::wire_anchors(&ctx));
    report("header shadow", navigation::wire_header_shadow(&ctx));
    report("mobile menu", navigation::wire_mobile_menu(&ctx));
    report("nav links", navigation::wire_nav_links(&ctx));
    report("demo button", navigation::wire_demo_button(&ctx));
    report("to-top button", navigation::wire_to_top(&ctx));
    report("footer year", navigation::set_footer_year(&ctx));

    let selects = select::wire_selects(&ctx).unwrap_or_else(|e| {
        log::warn!("Skipping custom selects: {}", e);
        Vec::new()
    });
    report("reveal animations", reveal::wire_reveal(&ctx));
    report("video modal", modal::wire_modal(&ctx));
    report("accordion", accordion::wire_accordion(&ctx));

    let counter = order::wire_counter(&ctx);
    report("order form", order::wire_order_form(&ctx, selects, counter));

    log::info!("Landing page ready");
    Ok(())
}
