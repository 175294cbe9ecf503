use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::components::reveal::RevealTracker;
use crate::dom::PageContext;
use crate::error::LandingError;
use crate::utils::dom;

pub fn wire_reveal(ctx: &PageContext) -> Result<(), LandingError> {
    let targets = Rc::new(dom::query_all(&ctx.document, &ctx.config.reveal_selector)?);
    if targets.is_empty() {
        return Ok(());
    }
    let tracker = Rc::new(RefCell::new(RevealTracker::new(targets.len())));
    let class = ctx.config.reveal_class.clone();

    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new({
        let targets = targets.clone();
        let class = class.clone();
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(key) = targets
                    .iter()
                    .position(|el| el.is_same_node(Some(target.as_ref())))
                else {
                    continue;
                };
                if tracker.borrow_mut().on_intersection(key, entry.is_intersecting()) {
                    dom::set_class(&target, &class, true);
                    observer.unobserve(&target);
                }
            }
        }
    });

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(ctx.config.reveal_threshold));
    let observer = match IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    ) {
        Ok(observer) => observer,
        Err(e) => {
            // no observer support: show everything right away
            log::warn!("IntersectionObserver unavailable, revealing all: {:?}", e);
            for target in targets.iter() {
                dom::set_class(target, &class, true);
            }
            return Ok(());
        }
    };
    for target in targets.iter() {
        observer.observe(target);
    }
    callback.forget();
    log::debug!("Observing {} reveal targets", targets.len());
    Ok(())
}
