//! Projection of the ledger onto the loaded page.

use super::SelectionLedger;
use crate::PageCache;
use crate::model::Artwork;

/// Records of `page` that are effectively selected, in page order.
pub fn visible_selection<'a>(page: &'a PageCache, ledger: &SelectionLedger) -> Vec<&'a Artwork> {
    page.records()
        .iter()
        .filter(|r| ledger.is_selected(r.id))
        .collect()
}

/// `true` when the page has records and every one of them is selected.
pub fn is_all_selected(page: &PageCache, ledger: &SelectionLedger) -> bool {
    !page.is_empty() && page.ids().all(|id| ledger.is_selected(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RecordId;

    fn page() -> PageCache {
        PageCache::new((1..=6).map(|i| Artwork::new(i, format!("Art {i}"))).collect(), 6)
    }

    #[test]
    fn test_visible_selection_keeps_page_order() {
        let page = page();
        let mut ledger = SelectionLedger::new();
        ledger.mark_selected(RecordId(5));
        ledger.mark_selected(RecordId(2));
        ledger.mark_selected(RecordId(99));

        let ids: Vec<_> = visible_selection(&page, &ledger).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![RecordId(2), RecordId(5)]);
    }

    #[test]
    fn test_visible_selection_skips_excluded() {
        let page = page();
        let mut ledger = SelectionLedger::new();
        ledger.mark_selected(RecordId(1));
        ledger.mark_unselected(RecordId(1));

        assert!(visible_selection(&page, &ledger).is_empty());
    }

    #[test]
    fn test_is_all_selected() {
        let page = page();
        let mut ledger = SelectionLedger::new();
        assert!(!is_all_selected(&page, &ledger));

        for id in page.ids() {
            ledger.mark_selected(id);
        }
        assert!(is_all_selected(&page, &ledger));

        ledger.mark_unselected(RecordId(3));
        assert!(!is_all_selected(&page, &ledger));
    }

    #[test]
    fn test_empty_page_is_never_all_selected() {
        assert!(!is_all_selected(&PageCache::empty(), &SelectionLedger::new()));
    }
}
