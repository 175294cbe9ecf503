use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlVideoElement, KeyboardEvent};

use crate::components::modal::VideoModal;
use crate::dom::platform::VideoPlayer;
use crate::dom::PageContext;
use crate::error::LandingError;
use crate::utils::dom;

pub fn wire_modal(ctx: &PageContext) -> Result<(), LandingError> {
    let container: Element = dom::by_id(&ctx.document, "previewModal")?;
    let video: HtmlVideoElement = dom::by_id(&ctx.document, "modalVideo")?;
    let close_area: Element = dom::by_id(&ctx.document, "modalClose")?;
    let close_button: Element = dom::by_id(&ctx.document, "modalCloseBtn")?;

    let modal = Rc::new(RefCell::new(VideoModal::new(
        VideoPlayer::new(video),
        ctx.config.missing_video_notice.clone(),
    )));

    let render = {
        let modal = modal.clone();
        move || {
            let hidden = modal.borrow().aria_hidden();
            if let Err(e) = container.set_attribute("aria-hidden", hidden) {
                log::warn!("Failed to set aria-hidden on modal: {:?}", e);
            }
        }
    };
    let render = Rc::new(render);

    for button in dom::query_all(&ctx.document, ".play")? {
        let ctx = ctx.clone();
        let modal = modal.clone();
        let render = render.clone();
        let control = button.clone();
        EventListener::new(&button, "click", move |_| {
            let source = control.get_attribute("data-video");
            let opened = modal.borrow_mut().open(source.as_deref(), &*ctx.viewport);
            if opened.is_ok() {
                render();
            }
        })
        .forget();
    }

    let close = {
        let viewport = ctx.viewport.clone();
        move || {
            modal.borrow_mut().close(&*viewport);
            render();
        }
    };
    let close = Rc::new(close);

    for target in [close_area, close_button] {
        let close = close.clone();
        EventListener::new(&target, "click", move |_| close()).forget();
    }

    EventListener::new(&ctx.document, "keydown", move |event| {
        let escape = event
            .dyn_ref::<KeyboardEvent>()
            .map(|event| event.key() == "Escape")
            .unwrap_or(false);
        if escape {
            close();
        }
    })
    .forget();
    Ok(())
}
