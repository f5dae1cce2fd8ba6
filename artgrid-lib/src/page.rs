//! The ephemeral page cache.

use crate::model::Artwork;
use crate::model::RecordId;

/// Records of the currently displayed page plus the server's total count.
///
/// There is no history: loading another page replaces the cache wholesale.
///
/// # Example
///
/// ```
/// use artgrid_lib::PageCache;
/// use artgrid_lib::model::Artwork;
///
/// let page = PageCache::new(vec![Artwork::new(1, "One"), Artwork::new(2, "Two")], 40);
///
/// assert_eq!(page.len(), 2);
/// assert_eq!(page.total_records(), 40);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageCache {
    records: Vec<Artwork>,
    total_records: u64,
}

impl PageCache {
    /// Creates a page from records and the server-reported total.
    pub fn new(records: Vec<Artwork>, total_records: u64) -> Self {
        Self {
            records,
            total_records,
        }
    }

    /// Creates an empty page.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Drops records beyond `page_size`.
    ///
    /// A server that ignores the requested limit must not break the
    /// `len <= page_size` invariant.
    pub fn truncated(mut self, page_size: usize) -> Self {
        if self.records.len() > page_size {
            log::warn!(
                "Page returned {} records, truncating to page size {}",
                self.records.len(),
                page_size
            );
            self.records.truncate(page_size);
        }
        self
    }

    /// Returns the records in server order.
    pub fn records(&self) -> &[Artwork] {
        &self.records
    }

    /// Returns the total record count reported by the server.
    pub fn total_records(&self) -> u64 {
        self.total_records
    }

    /// Returns the ids of the records, in order.
    pub fn ids(&self) -> impl Iterator<Item = RecordId> + '_ {
        self.records.iter().map(|r| r.id)
    }

    /// Returns `true` if a record with this id is on the page.
    pub fn contains(&self, id: RecordId) -> bool {
        self.records.iter().any(|r| r.id == id)
    }

    /// Returns `true` if this page has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the number of records in this page.
    pub fn len(&self) -> usize {
        self.records.len()
    }
}
