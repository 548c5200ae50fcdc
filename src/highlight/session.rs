//! Focus session driver tying classification to board state.

use anyhow::Result;

use super::{Classification, HighlightBoard, classify};
use crate::catalog::Flowsheet;
use crate::graph::{CourseRegistry, UnlockIndex};

/// Owns the derived graph and the highlight board for one display surface.
///
/// Focus sessions are mutually exclusive: [`focus_enter`] replaces the
/// whole board state unconditionally (last-focus-wins), matching the
/// original UI's single global dimmed/hover-active state. Independent
/// multi-pointer sessions would simply hold one board each; nothing here
/// prevents that, but this driver models a single pointer.
///
/// All operations are synchronous pure computation over in-memory maps;
/// a focus transition completes within the event turn that triggered it.
///
/// [`focus_enter`]: Highlighter::focus_enter
///
/// # Examples
///
/// ```rust,no_run
/// use flowsheet_cli::catalog::Flowsheet;
/// use flowsheet_cli::highlight::Highlighter;
/// use std::path::Path;
///
/// let flowsheet = Flowsheet::load(Path::new("flowsheet.toml"))?;
/// let mut highlighter = Highlighter::new(&flowsheet)?;
///
/// let classification = highlighter.focus_enter("CS201");
/// println!("{} direct prerequisites", classification.primary.len());
///
/// highlighter.focus_leave();
/// assert!(highlighter.board().is_neutral());
/// # Ok::<(), anyhow::Error>(())
/// ```
#[derive(Debug)]
pub struct Highlighter {
    registry: CourseRegistry,
    unlock_index: UnlockIndex,
    board: HighlightBoard,
}

impl Highlighter {
    /// Build the registry, derive the unlock index, and set up a neutral
    /// board for the flowsheet.
    ///
    /// # Errors
    ///
    /// Fails only on duplicate course ids (registry construction).
    pub fn new(flowsheet: &Flowsheet) -> Result<Self> {
        let registry = CourseRegistry::build(flowsheet)?;
        let unlock_index = UnlockIndex::derive(&registry);
        let board = HighlightBoard::new(flowsheet);

        Ok(Self {
            registry,
            unlock_index,
            board,
        })
    }

    /// Classify `id` and apply the result to the board.
    ///
    /// Replaces any active focus. Unknown ids leave the board all-neutral,
    /// indistinguishable from a course with no relationships.
    pub fn focus_enter(&mut self, id: &str) -> Classification {
        let classification = classify(id, &self.registry, &self.unlock_index);
        self.board.apply(&classification);
        classification
    }

    /// Return every course to the neutral state.
    pub fn focus_leave(&mut self) {
        self.board.reset();
    }

    /// The current highlight board.
    #[must_use]
    pub fn board(&self) -> &HighlightBoard {
        &self.board
    }

    /// The underlying course registry.
    #[must_use]
    pub fn registry(&self) -> &CourseRegistry {
        &self.registry
    }

    /// The derived unlock index.
    #[must_use]
    pub fn unlock_index(&self) -> &UnlockIndex {
        &self.unlock_index
    }
}
