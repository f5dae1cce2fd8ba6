//! The included/excluded id ledger.

use std::collections::HashSet;

use super::SelectionState;
use crate::model::RecordId;

/// Selection decisions keyed by record id, kept for the whole session.
///
/// The ledger holds two sets. `included` records ids the user selected and
/// `excluded` records ids the user explicitly deselected, which is the only
/// durable trace of a deselection once the record has left the page cache.
/// Every mutation leaves an id in at most one of the two sets.
#[derive(Debug, Clone, Default)]
pub struct SelectionLedger {
    included: HashSet<RecordId>,
    excluded: HashSet<RecordId>,
}

impl SelectionLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks an id as selected, overriding any earlier deselection.
    ///
    /// Returns `true` if the effective state changed.
    pub fn mark_selected(&mut self, id: RecordId) -> bool {
        self.excluded.remove(&id);
        self.included.insert(id)
    }

    /// Marks an id as explicitly deselected.
    ///
    /// Returns `true` if the id was selected before.
    pub fn mark_unselected(&mut self, id: RecordId) -> bool {
        self.excluded.insert(id);
        self.included.remove(&id)
    }

    /// Returns the effective state of an id.
    pub fn effective_state(&self, id: RecordId) -> SelectionState {
        if self.included.contains(&id) && !self.excluded.contains(&id) {
            SelectionState::Selected
        } else {
            SelectionState::Unselected
        }
    }

    /// Shorthand for `effective_state(id).is_selected()`.
    pub fn is_selected(&self, id: RecordId) -> bool {
        self.effective_state(id).is_selected()
    }

    /// Number of ids whose effective state is selected.
    ///
    /// This is the "Selected: N rows" counter shown to the user.
    pub fn count(&self) -> usize {
        self.included.difference(&self.excluded).count()
    }

    /// `max(0, |included| - |excluded|)`.
    ///
    /// Undercounts by one for every id that was selected and then
    /// deselected, because deselection moves the id from one set to the
    /// other. Use [`count`](Self::count) for display.
    pub fn legacy_count(&self) -> usize {
        self.included.len().saturating_sub(self.excluded.len())
    }

    /// Returns `true` if no id has been selected or deselected.
    pub fn is_empty(&self) -> bool {
        self.included.is_empty() && self.excluded.is_empty()
    }

    /// Selected ids, sorted.
    pub fn included(&self) -> Vec<RecordId> {
        let mut ids: Vec<_> = self.included.iter().copied().collect();
        ids.sort();
        ids
    }

    /// Explicitly deselected ids, sorted.
    pub fn excluded(&self) -> Vec<RecordId> {
        let mut ids: Vec<_> = self.excluded.iter().copied().collect();
        ids.sort();
        ids
    }

    #[cfg(test)]
    fn is_disjoint(&self) -> bool {
        self.included.is_disjoint(&self.excluded)
    }
}
