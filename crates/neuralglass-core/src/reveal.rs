//! Reveal-on-intersect tracking
//!
//! Elements start hidden and are revealed the first time they intersect the
//! viewport. The transition is one-way.

use std::collections::HashMap;

use crate::config::RevealOptions;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum RevealState {
    #[default]
    Hidden,
    Revealed,
}

/// Reveal state of every observed element, keyed by element id.
#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    options: RevealOptions,
    states: HashMap<String, RevealState>,
}

impl RevealTracker {
    pub fn new(options: RevealOptions) -> Self {
        Self {
            options,
            states: HashMap::new(),
        }
    }

    pub fn options(&self) -> &RevealOptions {
        &self.options
    }

    /// Start tracking an element. Re-observing keeps its current state.
    pub fn observe(&mut self, key: impl Into<String>) {
        self.states.entry(key.into()).or_default();
    }

    /// Apply an intersection report. Returns `true` only when this report
    /// revealed the element.
    pub fn on_intersection(&mut self, key: &str, is_intersecting: bool) -> bool {
        if !is_intersecting {
            return false;
        }
        match self.states.get_mut(key) {
            Some(state @ RevealState::Hidden) => {
                *state = RevealState::Revealed;
                true
            }
            _ => false,
        }
    }

    /// State of an element; unobserved elements count as hidden.
    pub fn state(&self, key: &str) -> RevealState {
        self.states.get(key).copied().unwrap_or_default()
    }

    pub fn revealed_count(&self) -> usize {
        self.states
            .values()
            .filter(|state| **state == RevealState::Revealed)
            .count()
    }

    /// Inline style for an element, transition included in both states.
    pub fn style(&self, key: &str) -> String {
        let transition = format!(
            "transition: opacity {secs}s ease, transform {secs}s ease;",
            secs = self.options.transition_secs
        );
        match self.state(key) {
            RevealState::Hidden => format!(
                "opacity: 0; transform: translateY({}px); {}",
                self.options.offset_px, transition
            ),
            RevealState::Revealed => format!("opacity: 1; transform: translateY(0); {}", transition),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden() {
        let mut tracker = RevealTracker::default();
        tracker.observe("timeline-0");
        assert_eq!(tracker.state("timeline-0"), RevealState::Hidden);
        assert_eq!(
            tracker.style("timeline-0"),
            "opacity: 0; transform: translateY(50px); transition: opacity 0.8s ease, transform 0.8s ease;"
        );
    }

    #[test]
    fn first_intersection_reveals() {
        let mut tracker = RevealTracker::default();
        tracker.observe("hex-1");
        assert!(!tracker.on_intersection("hex-1", false));
        assert!(tracker.on_intersection("hex-1", true));
        assert_eq!(tracker.state("hex-1"), RevealState::Revealed);
        // Later reports are no-ops
        assert!(!tracker.on_intersection("hex-1", true));
        assert!(!tracker.on_intersection("hex-1", false));
        assert_eq!(tracker.state("hex-1"), RevealState::Revealed);
        assert!(tracker.style("hex-1").starts_with("opacity: 1; transform: translateY(0);"));
    }

    #[test]
    fn unobserved_elements_are_ignored() {
        let mut tracker = RevealTracker::default();
        assert!(!tracker.on_intersection("ghost", true));
        assert_eq!(tracker.state("ghost"), RevealState::Hidden);
        assert_eq!(tracker.revealed_count(), 0);
    }

    #[test]
    fn reobserve_keeps_revealed() {
        let mut tracker = RevealTracker::default();
        tracker.observe("timeline-2");
        tracker.on_intersection("timeline-2", true);
        tracker.observe("timeline-2");
        assert_eq!(tracker.state("timeline-2"), RevealState::Revealed);
        assert_eq!(tracker.revealed_count(), 1);
    }
}
