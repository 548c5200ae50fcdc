//! Highlight state tokens and the per-course board they live on.
//!
//! [`HighlightState`] mirrors the original UI's CSS classes as opaque typed
//! tokens; what each token looks like is entirely the renderer's business.
//! [`HighlightBoard`] holds one token slot per rendered course id and is
//! the single place highlight state exists between focus-enter and
//! focus-leave.

use std::collections::BTreeMap;

use super::Classification;
use crate::catalog::Flowsheet;

/// Visual state token for one rendered course.
///
/// Opaque to the core: the renderer alone decides what each token means
/// visually. `Neutral` is the single rest state every course returns to on
/// focus-leave.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HighlightState {
    /// Rest state, no focus interaction active
    #[default]
    Neutral,
    /// De-emphasized while some other course holds focus
    Dimmed,
    /// The focused course itself
    Focus,
    /// Direct prerequisite of the focused course
    Primary,
    /// Prerequisite of a prerequisite
    Secondary,
    /// Directly unlocked by the focused course
    Unlock,
}

/// One [`HighlightState`] slot per rendered course id.
///
/// Applying a classification touches only ids that have a slot; ids in the
/// classification with no slot are silently skipped, the same outcome as
/// the original page failing to find an element to style.
#[derive(Debug, Clone, Default)]
pub struct HighlightBoard {
    slots: BTreeMap<String, HighlightState>,
}

impl HighlightBoard {
    /// Create a board with one neutral slot per course in the flowsheet.
    #[must_use]
    pub fn new(flowsheet: &Flowsheet) -> Self {
        let slots = flowsheet
            .courses()
            .map(|course| (course.id.clone(), HighlightState::Neutral))
            .collect();
        Self {
            slots,
        }
    }

    /// Apply a classification, replacing whatever state was on the board.
    ///
    /// A classification with no resolved focal course resets to neutral:
    /// focusing an unknown element highlights nothing.
    ///
    /// Otherwise every slot is dimmed first, then tokens are layered in
    /// the original UI's application order - secondary, primary (which
    /// overwrites a secondary token on the same course), unlocks last,
    /// and finally the focal course itself.
    pub fn apply(&mut self, classification: &Classification) {
        let Some(focal) = &classification.focal else {
            self.reset();
            return;
        };

        for state in self.slots.values_mut() {
            *state = HighlightState::Dimmed;
        }

        for id in &classification.secondary {
            self.set(id, HighlightState::Secondary);
        }
        for id in &classification.primary {
            self.set(id, HighlightState::Primary);
        }
        for id in &classification.unlocks {
            self.set(id, HighlightState::Unlock);
        }
        self.set(focal, HighlightState::Focus);
    }

    /// Return every slot to [`HighlightState::Neutral`].
    ///
    /// Total: no partial or stale highlight survives a focus-leave.
    pub fn reset(&mut self) {
        for state in self.slots.values_mut() {
            *state = HighlightState::Neutral;
        }
    }

    /// Current state of a course, neutral for unknown ids.
    #[must_use]
    pub fn state_of(&self, id: &str) -> HighlightState {
        self.slots.get(id).copied().unwrap_or_default()
    }

    /// Whether every slot is in the neutral rest state.
    #[must_use]
    pub fn is_neutral(&self) -> bool {
        self.slots.values().all(|state| *state == HighlightState::Neutral)
    }

    /// Iterate over `(id, state)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, HighlightState)> {
        self.slots.iter().map(|(id, state)| (id, *state))
    }

    fn set(&mut self, id: &str, state: HighlightState) {
        if let Some(slot) = self.slots.get_mut(id) {
            *slot = state;
        }
    }
}
