#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectState {
    #[default]
    Closed,
    Open,
}

/// What a key press did to the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Enter or Space: the widget toggled and the key must not reach the page.
    Toggled(SelectState),
    Closed,
    Ignored,
}

/// Non-native dropdown backed by a hidden form field.
#[derive(Debug, Clone)]
pub struct CustomSelect {
    options: Vec<String>,
    active: Option<usize>,
    state: SelectState,
    placeholder: String,
}

impl CustomSelect {
    pub fn new(options: Vec<String>, placeholder: impl Into<String>) -> Self {
        Self {
            options,
            active: None,
            state: SelectState::Closed,
            placeholder: placeholder.into(),
        }
    }

    pub fn state(&self) -> SelectState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == SelectState::Open
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn toggle(&mut self) -> SelectState {
        self.state = match self.state {
            SelectState::Closed => SelectState::Open,
            SelectState::Open => SelectState::Closed,
        };
        self.state
    }

    pub fn close(&mut self) {
        self.state = SelectState::Closed;
    }

    pub fn on_key(&mut self, key: &str) -> KeyOutcome {
        match key {
            "Enter" | " " => KeyOutcome::Toggled(self.toggle()),
            "Escape" => {
                self.close();
                KeyOutcome::Closed
            }
            _ => KeyOutcome::Ignored,
        }
    }

    /// A click somewhere on the page. Only clicks outside the widget close it.
    /// Returns true when this click closed an open widget.
    pub fn on_document_click(&mut self, inside: bool) -> bool {
        if inside || !self.is_open() {
            return false;
        }
        self.close();
        true
    }

    /// Make `index` the only active option and close. Returns the chosen value.
    pub fn select(&mut self, index: usize) -> Option<&str> {
        if index >= self.options.len() {
            return None;
        }
        self.active = Some(index);
        self.close();
        Some(self.options[index].as_str())
    }

    /// Back to the placeholder with nothing selected.
    pub fn reset(&mut self) {
        self.active = None;
        self.close();
    }

    /// Text shown on the trigger.
    pub fn display_text(&self) -> &str {
        self.active
            .map(|idx| self.options[idx].as_str())
            .unwrap_or(&self.placeholder)
    }

    /// Value carried by the hidden field.
    pub fn hidden_value(&self) -> &str {
        self.active
            .map(|idx| self.options[idx].as_str())
            .unwrap_or("")
    }

    pub fn aria_expanded(&self) -> &'static str {
        if self.is_open() {
            "true"
        } else {
            "false"
        }
    }
}
