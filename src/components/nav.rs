use crate::platform::Viewport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// Mobile navigation menu.
#[derive(Debug, Default)]
pub struct NavMenu {
    state: MenuState,
}

impl NavMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == MenuState::Open
    }

    /// Flip the menu and return the new state.
    pub fn toggle(&mut self) -> MenuState {
        self.state = match self.state {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        };
        self.state
    }

    /// Close the menu. Returns true if it was open.
    pub fn close(&mut self) -> bool {
        let was_open = self.is_open();
        self.state = MenuState::Closed;
        was_open
    }

    pub fn aria_expanded(&self) -> &'static str {
        if self.is_open() {
            "true"
        } else {
            "false"
        }
    }
}

/// Fragment id an in-page link points at, `None` for a bare `#` or any other href.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Handle activation of an in-page anchor.
///
/// Returns true when the link was handled and its default jump must be
/// cancelled. A missing target leaves everything to the browser.
pub fn follow_anchor(href: &str, viewport: &dyn Viewport, nav: &mut NavMenu) -> bool {
    let Some(id) = anchor_target(href) else {
        return false;
    };
    if !viewport.scroll_into_view(id) {
        log::debug!("No element with id {} for anchor", id);
        return false;
    }
    if nav.close() {
        log::debug!("Closed mobile menu after anchor navigation");
    }
    true
}

pub fn header_has_shadow(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

pub fn to_top_visible(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}
