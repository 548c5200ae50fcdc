//! Hover-highlight computation and presentation state.
//!
//! This is the interactive core of the tool. One focus interaction works
//! like the original page's hover:
//!
//! 1. [`classify`] consults the registry and unlock index and produces a
//!    pure [`Classification`] value - three sets of course ids (primary
//!    prerequisites, secondary prerequisites, unlocks).
//! 2. [`HighlightBoard::apply`] translates that value into one
//!    [`HighlightState`] token per rendered course.
//! 3. [`HighlightBoard::reset`] returns every course to neutral on
//!    focus-leave - a total reset, no stale highlight survives.
//!
//! [`Highlighter`] wires the three together as a session driver with
//! last-focus-wins semantics. Classification itself stays free of any
//! rendering concern, so it is unit-testable without a display surface.

mod board;
mod classification;
mod classifier;
mod session;

pub use board::{HighlightBoard, HighlightState};
pub use classification::Classification;
pub use classifier::classify;
pub use session::Highlighter;
