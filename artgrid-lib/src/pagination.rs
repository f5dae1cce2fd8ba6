//! Page number bookkeeping and request sequencing.

use crate::error::Error;

/// Page size used by the artworks listing.
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Handle for one issued page request.
///
/// Tickets are numbered in issue order. Only the result of the most
/// recently issued ticket is applied; older ones are stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    seq: u64,
    page: u32,
    page_size: usize,
}

impl FetchTicket {
    /// The 1-indexed page requested.
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Number of records per page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }
}

/// 1-based inclusive range of records shown on the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRange {
    pub first: u64,
    pub last: u64,
}

/// Tracks the current page, the loading flag and outstanding requests.
#[derive(Debug, Clone)]
pub struct PaginationController {
    page_number: u32,
    page_size: usize,
    total_records: u64,
    issued: u64,
    loading: bool,
    /// Page whose records were last applied successfully.
    loaded_page: Option<u32>,
}

impl PaginationController {
    /// Creates a controller positioned on page 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_number: 1,
            page_size: page_size.max(1),
            total_records: 0,
            issued: 0,
            loading: false,
            loaded_page: None,
        }
    }

    /// Moves to page `n` and issues a ticket for fetching it.
    ///
    /// Earlier tickets are not cancelled; their results will be ignored.
    pub fn go_to_page(&mut self, n: u32) -> Result<FetchTicket, Error> {
        if n == 0 {
            return Err(Error::InvalidPage(n));
        }

        self.page_number = n;
        self.issued += 1;
        self.loading = true;

        let ticket = FetchTicket {
            seq: self.issued,
            page: n,
            page_size: self.page_size,
        };
        log::debug!("Issued fetch #{} for page {}", ticket.seq, n);
        Ok(ticket)
    }

    /// Returns `true` if `ticket` is the most recently issued one.
    pub fn is_current(&self, ticket: &FetchTicket) -> bool {
        ticket.seq == self.issued
    }

    /// Records completion of `ticket`.
    ///
    /// Returns `false` for stale tickets, which leave the state untouched.
    /// For the current ticket, `loading` clears and, on success, the total
    /// is updated and the ticket's page becomes the loaded page.
    pub fn complete(&mut self, ticket: &FetchTicket, total_records: Option<u64>) -> bool {
        if !self.is_current(ticket) {
            log::debug!(
                "Discarding stale fetch #{} for page {} (latest is #{})",
                ticket.seq,
                ticket.page,
                self.issued
            );
            return false;
        }

        self.loading = false;
        if let Some(total) = total_records {
            self.total_records = total;
            self.loaded_page = Some(ticket.page);
        }
        true
    }

    pub fn page_number(&self) -> u32 {
        self.page_number
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_records(&self) -> u64 {
        self.total_records
    }

    /// Page the displayed records came from, if any page has loaded.
    ///
    /// Differs from [`page_number`](Self::page_number) while a request is
    /// in flight or after it failed.
    pub fn loaded_page(&self) -> Option<u32> {
        self.loaded_page
    }

    /// `true` while the latest request is outstanding.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Zero-based offset of the first record on the current page.
    pub fn offset(&self) -> u64 {
        self.offset_of(self.page_number)
    }

    fn offset_of(&self, page: u32) -> u64 {
        u64::from(page.saturating_sub(1)) * self.page_size as u64
    }

    /// Number of pages needed to show every record.
    pub fn total_pages(&self) -> u64 {
        self.total_records.div_ceil(self.page_size as u64)
    }

    pub fn has_previous(&self) -> bool {
        self.page_number > 1
    }

    pub fn has_next(&self) -> bool {
        u64::from(self.page_number) < self.total_pages()
    }

    /// Range of records shown when the loaded page holds `len` records.
    ///
    /// The range follows [`loaded_page`](Self::loaded_page), not the
    /// requested page. Returns `None` for an empty page, before any page
    /// has loaded, or when the page lies past the reported total.
    pub fn range(&self, len: usize) -> Option<PageRange> {
        let page = self.loaded_page?;
        if len == 0 {
            return None;
        }
        let offset = self.offset_of(page);
        let first = offset + 1;
        let mut last = offset + len as u64;
        if self.total_records > 0 {
            last = last.min(self.total_records);
        }
        (first <= last).then_some(PageRange { first, last })
    }
}

impl Default for PaginationController {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_go_to_page_issues_ticket() {
        let mut pager = PaginationController::default();
        let ticket = pager.go_to_page(3).unwrap();

        assert_eq!(ticket.page(), 3);
        assert_eq!(pager.offset(), 24);
        assert_eq!(pager.page_number(), 3);
        assert!(pager.is_loading());
    }

    #[test]
    fn test_page_zero_is_rejected() {
        let mut pager = PaginationController::default();

        assert!(matches!(pager.go_to_page(0), Err(Error::InvalidPage(0))));
        assert_eq!(pager.page_number(), 1);
        assert!(!pager.is_loading());
    }

    #[test]
    fn test_stale_ticket_is_ignored() {
        let mut pager = PaginationController::default();
        let first = pager.go_to_page(2).unwrap();
        let second = pager.go_to_page(5).unwrap();

        assert!(!pager.complete(&first, Some(10)));
        assert!(pager.is_loading());
        assert_eq!(pager.total_records(), 0);

        assert!(pager.complete(&second, Some(100)));
        assert!(!pager.is_loading());
        assert_eq!(pager.total_records(), 100);
    }

    #[test]
    fn test_failed_fetch_clears_loading_and_keeps_total() {
        let mut pager = PaginationController::default();
        let ok = pager.go_to_page(1).unwrap();
        pager.complete(&ok, Some(50));

        let failed = pager.go_to_page(2).unwrap();
        assert!(pager.complete(&failed, None));
        assert!(!pager.is_loading());
        assert_eq!(pager.total_records(), 50);
    }

    #[test]
    fn test_range_and_page_counts() {
        let mut pager = PaginationController::default();
        let ticket = pager.go_to_page(3).unwrap();
        pager.complete(&ticket, Some(30));

        assert_eq!(pager.total_pages(), 3);
        assert!(pager.has_previous());
        assert!(!pager.has_next());
        assert_eq!(pager.range(6), Some(PageRange { first: 25, last: 30 }));
        assert_eq!(pager.range(0), None);
    }

    #[test]
    fn test_range_follows_loaded_page_while_loading() {
        let mut pager = PaginationController::default();
        assert_eq!(pager.range(12), None);

        let first = pager.go_to_page(1).unwrap();
        pager.complete(&first, Some(30));
        pager.go_to_page(3).unwrap();

        assert!(pager.is_loading());
        assert_eq!(pager.loaded_page(), Some(1));
        assert_eq!(pager.range(12), Some(PageRange { first: 1, last: 12 }));
    }

    #[test]
    fn test_range_follows_loaded_page_after_failure() {
        let mut pager = PaginationController::default();
        let ok = pager.go_to_page(2).unwrap();
        pager.complete(&ok, Some(30));

        let failed = pager.go_to_page(9).unwrap();
        pager.complete(&failed, None);

        assert_eq!(pager.page_number(), 9);
        assert_eq!(pager.loaded_page(), Some(2));
        assert_eq!(pager.range(12), Some(PageRange { first: 13, last: 24 }));
    }

    #[test]
    fn test_range_past_total_is_none() {
        let mut pager = PaginationController::default();
        let ticket = pager.go_to_page(9).unwrap();
        pager.complete(&ticket, Some(30));

        assert_eq!(pager.range(3), None);
    }

    #[test]
    fn test_zero_page_size_is_clamped() {
        assert_eq!(PaginationController::new(0).page_size(), 1);
    }
}
