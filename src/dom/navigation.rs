use chrono::Local;
use gloo_events::{EventListener, EventListenerOptions};
use web_sys::HtmlElement;

use crate::components::footer;
use crate::components::nav::{self, follow_anchor};
use crate::dom::PageContext;
use crate::error::LandingError;
use crate::platform::Viewport;
use crate::utils::dom;

/// Smooth scrolling for every `a[href^="#"]`.
pub fn wire_anchors(ctx: &PageContext) -> Result<(), LandingError> {
    for anchor in dom::query_all(&ctx.document, "a[href^=\"#\"]")? {
        let ctx = ctx.clone();
        let link = anchor.clone();
        EventListener::new_with_options(
            &anchor,
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                let href = link.get_attribute("href").unwrap_or_default();
                let handled = follow_anchor(&href, &*ctx.viewport, &mut ctx.nav.borrow_mut());
                if handled {
                    event.prevent_default();
                    ctx.render_nav();
                }
            },
        )
        .forget();
    }
    Ok(())
}

pub fn wire_header_shadow(ctx: &PageContext) -> Result<(), LandingError> {
    let header: HtmlElement = dom::by_id(&ctx.document, "site-header")?;
    let window = ctx.window.clone();
    let ctx = ctx.clone();
    EventListener::new(&window, "scroll", move |_| {
        let style = header.style();
        let shadow =
            nav::header_has_shadow(ctx.viewport.scroll_y(), ctx.config.header_shadow_threshold);
        let result = if shadow {
            style.set_property("box-shadow", &ctx.config.header_shadow)
        } else {
            style.remove_property("box-shadow").map(|_| ())
        };
        if let Err(e) = result {
            log::warn!("Failed to update header shadow: {:?}", e);
        }
    })
    .forget();
    Ok(())
}

pub fn wire_mobile_menu(ctx: &PageContext) -> Result<(), LandingError> {
    let toggle = ctx
        .nav_toggle
        .clone()
        .ok_or_else(|| LandingError::MissingElement("#mobileToggle".to_string()))?;
    if ctx.nav_element.is_none() {
        return Err(LandingError::MissingElement(".nav".to_string()));
    }
    let ctx = ctx.clone();
    EventListener::new(&toggle, "click", move |_| {
        let state = ctx.nav.borrow_mut().toggle();
        log::debug!("Mobile menu {:?}", state);
        ctx.render_nav();
    })
    .forget();
    Ok(())
}

/// Picking a nav link always leaves the mobile menu closed.
pub fn wire_nav_links(ctx: &PageContext) -> Result<(), LandingError> {
    for link in dom::query_all(&ctx.document, ".nav-link")? {
        let ctx = ctx.clone();
        EventListener::new(&link, "click", move |_| {
            if ctx.nav.borrow_mut().close() {
                ctx.render_nav();
            }
        })
        .forget();
    }
    Ok(())
}

pub fn wire_demo_button(ctx: &PageContext) -> Result<(), LandingError> {
    let Some(button) = dom::optional_by_id::<HtmlElement>(&ctx.document, "demoBtn") else {
        return Ok(());
    };
    let ctx = ctx.clone();
    EventListener::new(&button, "click", move |_| {
        if !ctx.viewport.scroll_into_view("examples") {
            log::debug!("No #examples section to scroll to");
        }
    })
    .forget();
    Ok(())
}

pub fn wire_to_top(ctx: &PageContext) -> Result<(), LandingError> {
    let button: HtmlElement = dom::by_id(&ctx.document, "toTop")?;

    let check = {
        let ctx = ctx.clone();
        let button = button.clone();
        move || {
            let visible = nav::to_top_visible(ctx.viewport.scroll_y(), ctx.config.to_top_threshold);
            dom::set_class(&button, "show", visible);
            dom::set_class(&button, "hide", !visible);
        }
    };
    check();
    EventListener::new(&ctx.window, "scroll", move |_| check()).forget();

    let viewport = ctx.viewport.clone();
    EventListener::new(&button, "click", move |_| viewport.scroll_to_top()).forget();
    Ok(())
}

pub fn set_footer_year(ctx: &PageContext) -> Result<(), LandingError> {
    if let Some(year) = ctx.document.get_element_by_id("year") {
        year.set_text_content(Some(&footer::year_label(&Local::now())));
    }
    Ok(())
}
