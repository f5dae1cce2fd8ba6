//! Persistent cross-page selection.
//!
//! The [`SelectionLedger`] remembers selection decisions by record id, so a
//! row selected on page 1 stays selected while page 5 is on screen even
//! though page 1's records are gone. The [`projector`] functions intersect
//! the ledger with the current [`PageCache`](crate::PageCache), and
//! [`BulkSelect`] selects the first N rows of the current page.

mod bulk;
mod ledger;
pub mod projector;

pub use bulk::*;
pub use ledger::*;
pub use projector::is_all_selected;
pub use projector::visible_selection;

/// Derived selection verdict for a record id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SelectionState {
    Selected,
    /// Explicitly deselected, or never touched.
    #[default]
    Unselected,
}

impl SelectionState {
    /// Returns `true` for [`SelectionState::Selected`].
    pub fn is_selected(self) -> bool {
        matches!(self, Self::Selected)
    }
}
