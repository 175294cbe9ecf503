/// Question/answer group where at most one answer is shown.
#[derive(Debug)]
pub struct Accordion {
    len: usize,
    expanded: Option<usize>,
}

impl Accordion {
    pub fn new(len: usize) -> Self {
        Self { len, expanded: None }
    }

    pub fn expanded(&self) -> Option<usize> {
        self.expanded
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.expanded == Some(index)
    }

    /// Reconcile with what the page actually renders for `index`.
    pub fn sync(&mut self, index: usize, rendered_open: bool) {
        if index >= self.len {
            return;
        }
        if rendered_open {
            self.expanded = Some(index);
        } else if self.expanded == Some(index) {
            self.expanded = None;
        }
    }

    /// Collapse everything, then expand `index` unless it was the open panel.
    pub fn toggle(&mut self, index: usize) -> Option<usize> {
        if index >= self.len {
            return self.expanded;
        }
        let was_open = self.is_open(index);
        self.expanded = None;
        if !was_open {
            self.expanded = Some(index);
        }
        self.expanded
    }
}
