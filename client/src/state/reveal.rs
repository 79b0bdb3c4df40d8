//! One-shot reveal-on-scroll tracking.
//!
//! Tracked elements start hidden. The first intersection report that says an
//! element is visible flips it to revealed, and revealed is terminal: later
//! reports for the same element are ignored, so nothing is ever re-hidden.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

/// Fraction of an element that must be visible before it reveals.
pub const THRESHOLD: f64 = 0.08;

pub const HIDDEN_OPACITY: &str = "0";
pub const HIDDEN_TRANSFORM: &str = "translateY(12px)";
pub const SHOWN_OPACITY: &str = "1";
pub const SHOWN_TRANSFORM: &str = "translateY(0)";
pub const SHOWN_TRANSITION: &str = "opacity .6s var(--ease), transform .6s var(--ease)";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Hidden,
    Revealed,
}

/// One entry from an intersection callback batch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Intersection {
    pub index: usize,
    pub is_intersecting: bool,
}

#[derive(Clone, Debug, Default)]
pub struct RevealSet {
    states: Vec<RevealState>,
}

impl RevealSet {
    pub fn new(count: usize) -> Self {
        Self { states: vec![RevealState::Hidden; count] }
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn state(&self, index: usize) -> Option<RevealState> {
        self.states.get(index).copied()
    }

    pub fn revealed_count(&self) -> usize {
        self.states
            .iter()
            .filter(|state| **state == RevealState::Revealed)
            .count()
    }

    /// Every element has been revealed; the observer has nothing left to do.
    pub fn is_complete(&self) -> bool {
        self.revealed_count() == self.len()
    }

    /// Apply a callback batch and return the indices revealed by it, in
    /// batch order. Callers stop observing exactly these elements.
    pub fn on_intersections(&mut self, batch: impl IntoIterator<Item = Intersection>) -> Vec<usize> {
        let mut revealed = Vec::new();
        for entry in batch {
            if !entry.is_intersecting {
                continue;
            }
            let Some(state) = self.states.get_mut(entry.index) else {
                continue;
            };
            if *state == RevealState::Hidden {
                *state = RevealState::Revealed;
                revealed.push(entry.index);
            }
        }
        revealed
    }
}
