//! Select the first N rows of the current page.

use super::SelectionLedger;
use crate::PageCache;

/// The "custom select" popover: an open flag and a pending numeric input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BulkSelect {
    open: bool,
    input: Option<i64>,
}

impl BulkSelect {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` while the popover is shown.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The value currently typed into the popover.
    pub fn input(&self) -> Option<i64> {
        self.input
    }

    /// Shows the popover if hidden and hides it if shown.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Hides the popover and clears its input.
    pub fn dismiss(&mut self) {
        self.open = false;
        self.input = None;
    }

    /// Replaces the pending input.
    pub fn set_input(&mut self, value: Option<i64>) {
        self.input = value;
    }

    /// Selects the first `count` records of `page`.
    ///
    /// Absent or non-positive counts are ignored and return `0` without
    /// touching the popover. Otherwise the popover is dismissed and the
    /// number of records marked is returned. Records already selected are
    /// marked again and included in the returned number.
    pub fn submit(&mut self, count: Option<i64>, page: &PageCache, ledger: &mut SelectionLedger) -> usize {
        let Some(count) = count.filter(|n| *n > 0) else {
            log::debug!("Ignoring bulk select with count {:?}", count);
            return 0;
        };

        let take = usize::try_from(count).unwrap_or(usize::MAX).min(page.len());
        for id in page.ids().take(take) {
            ledger.mark_selected(id);
        }

        self.dismiss();
        take
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Artwork;
    use crate::model::RecordId;

    fn page() -> PageCache {
        PageCache::new((1..=12).map(|i| Artwork::new(i, format!("Art {i}"))).collect(), 120)
    }

    #[test]
    fn test_selects_first_n_in_order() {
        let page = page();
        let mut ledger = SelectionLedger::new();
        let mut bulk = BulkSelect::new();

        assert_eq!(bulk.submit(Some(5), &page, &mut ledger), 5);
        assert_eq!(ledger.included(), (1..=5).map(RecordId).collect::<Vec<_>>());
        assert_eq!(ledger.count(), 5);
    }

    #[test]
    fn test_count_beyond_page_selects_whole_page() {
        let page = page();
        let mut ledger = SelectionLedger::new();

        assert_eq!(BulkSelect::new().submit(Some(500), &page, &mut ledger), 12);
        assert_eq!(ledger.count(), 12);
    }

    #[test]
    fn test_non_positive_or_absent_is_ignored() {
        let page = page();
        let mut ledger = SelectionLedger::new();
        let mut bulk = BulkSelect::new();
        bulk.toggle();
        bulk.set_input(Some(-3));

        for count in [None, Some(0), Some(-3)] {
            assert_eq!(bulk.submit(count, &page, &mut ledger), 0);
        }
        assert!(ledger.is_empty());
        assert!(bulk.is_open());
        assert_eq!(bulk.input(), Some(-3));
    }

    #[test]
    fn test_overrides_exclusion_and_never_deselects() {
        let page = page();
        let mut ledger = SelectionLedger::new();
        ledger.mark_unselected(RecordId(2));
        ledger.mark_selected(RecordId(10));

        BulkSelect::new().submit(Some(3), &page, &mut ledger);

        assert!(ledger.is_selected(RecordId(2)));
        assert!(ledger.is_selected(RecordId(10)));
        assert_eq!(ledger.count(), 4);
    }

    #[test]
    fn test_submit_dismisses_and_resets_input() {
        let page = page();
        let mut ledger = SelectionLedger::new();
        let mut bulk = BulkSelect::new();
        bulk.toggle();
        bulk.set_input(Some(2));

        assert_eq!(bulk.submit(bulk.input(), &page, &mut ledger), 2);
        assert!(!bulk.is_open());
        assert_eq!(bulk.input(), None);
    }
}
