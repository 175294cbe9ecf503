#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Watching,
    Revealed,
}

/// One-way reveal bookkeeping for the observed elements, keyed by position.
#[derive(Debug)]
pub struct RevealTracker {
    states: Vec<RevealState>,
}

impl RevealTracker {
    pub fn new(count: usize) -> Self {
        Self {
            states: vec![RevealState::Watching; count],
        }
    }

    pub fn state(&self, key: usize) -> Option<RevealState> {
        self.states.get(key).copied()
    }

    /// Returns true exactly once per element: the first time it intersects.
    /// The caller adds the reveal class and stops observing it.
    pub fn on_intersection(&mut self, key: usize, intersecting: bool) -> bool {
        match self.states.get_mut(key) {
            Some(state) if intersecting && *state == RevealState::Watching => {
                *state = RevealState::Revealed;
                true
            }
            _ => false,
        }
    }

    pub fn watching(&self) -> usize {
        self.states
            .iter()
            .filter(|state| **state == RevealState::Watching)
            .count()
    }
}
