//! `web-sys` implementations of the platform capabilities.

use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    Document, HtmlSourceElement, HtmlVideoElement, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition, ScrollToOptions, Window,
};

use crate::error::LandingError;
use crate::platform::{MediaPlayer, Scheduler, Viewport};

pub struct WindowViewport {
    window: Window,
    document: Document,
}

impl WindowViewport {
    pub fn new(window: Window, document: Document) -> Self {
        Self { window, document }
    }
}

impl Viewport for WindowViewport {
    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn scroll_to_top(&self) {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn scroll_into_view(&self, id: &str) -> bool {
        let Some(element) = self.document.get_element_by_id(id) else {
            return false;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }

    fn set_scroll_locked(&self, locked: bool) {
        let Some(body) = self.document.body() else {
            return;
        };
        let style = body.style();
        let result = if locked {
            style.set_property("overflow", "hidden")
        } else {
            style.remove_property("overflow").map(|_| ())
        };
        if let Err(e) = result {
            log::warn!("Failed to update body overflow: {:?}", e);
        }
    }

    fn alert(&self, message: &str) {
        if let Err(e) = self.window.alert_with_message(message) {
            log::warn!("Alert failed: {:?}", e);
        }
    }
}

/// The modal's `<video>` and its `<source>` child.
pub struct VideoPlayer {
    video: HtmlVideoElement,
    source: Option<HtmlSourceElement>,
}

impl VideoPlayer {
    pub fn new(video: HtmlVideoElement) -> Self {
        let source = crate::utils::dom::query::<HtmlSourceElement>(&video, "source");
        Self { video, source }
    }
}

impl MediaPlayer for VideoPlayer {
    fn set_source(&self, src: &str) -> Result<(), LandingError> {
        match &self.source {
            Some(source) => source.set_src(src),
            None => self.video.set_src(src),
        }
        Ok(())
    }

    fn load(&self) -> Result<(), LandingError> {
        self.video.load();
        Ok(())
    }

    fn play(&self) -> Result<(), LandingError> {
        let promise = self.video.play()?;
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::debug!("Video playback rejected: {:?}", e);
            }
        });
        Ok(())
    }

    fn pause(&self) -> Result<(), LandingError> {
        self.video.pause()?;
        Ok(())
    }

    fn rewind(&self) -> Result<(), LandingError> {
        self.video.set_current_time(0.0);
        Ok(())
    }
}

/// Scheduler on top of `setTimeout`.
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        Timeout::new(delay_ms, task).forget();
    }
}
