//! The session controller.
//!
//! [`Session`] owns the page cache, the selection ledger, the pagination
//! controller and the bulk-select popover. Front ends feed it
//! [`SessionEvent`]s and render [`SessionView`] snapshots.
//!
//! Everything here is synchronous except page fetches. A page change
//! returns a [`PendingFetch`]; the caller runs it (inline or on a spawned
//! task) and hands the [`FetchOutcome`] back to [`Session::apply`]. Outcomes
//! of superseded requests are discarded, so the page on screen always
//! matches the most recent page change.

use std::collections::HashSet;
use std::sync::Arc;

use crate::PageCache;
use crate::config::SessionConfig;
use crate::error::Error;
use crate::model::Artwork;
use crate::model::RecordId;
use crate::pagination::FetchTicket;
use crate::pagination::PageRange;
use crate::pagination::PaginationController;
use crate::selection::BulkSelect;
use crate::selection::SelectionLedger;
use crate::selection::is_all_selected;
use crate::selection::visible_selection;
use crate::source::PageSource;

/// Input events produced by a presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// Navigate to a 1-indexed page.
    PageChange(u32),
    /// A row checkbox was ticked.
    RowSelect(RecordId),
    /// A row checkbox was cleared.
    RowUnselect(RecordId),
    /// The header checkbox was set (`true`) or cleared (`false`).
    SelectAllToggle(bool),
    /// The table reported its complete selection for the current page.
    PageSelectionChanged(Vec<RecordId>),
    /// Show or hide the bulk-select popover.
    BulkToggle,
    /// The bulk-select input changed.
    BulkInput(Option<i64>),
    /// The bulk-select popover was submitted with this count.
    BulkCountSubmit(Option<i64>),
}

/// A page request that has been issued but not yet run.
pub struct PendingFetch {
    ticket: FetchTicket,
    source: Arc<dyn PageSource>,
}

impl PendingFetch {
    pub fn ticket(&self) -> FetchTicket {
        self.ticket
    }

    /// Performs the request.
    pub async fn run(self) -> FetchOutcome {
        let result = self
            .source
            .fetch_page(self.ticket.page(), self.ticket.page_size())
            .await;
        FetchOutcome {
            ticket: self.ticket,
            result,
        }
    }
}

impl std::fmt::Debug for PendingFetch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingFetch")
            .field("ticket", &self.ticket)
            .finish_non_exhaustive()
    }
}

/// Result of running a [`PendingFetch`].
#[derive(Debug)]
pub struct FetchOutcome {
    pub ticket: FetchTicket,
    pub result: Result<PageCache, Error>,
}

/// What [`Session::apply`] did with an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStatus {
    /// The page cache was replaced.
    Loaded,
    /// The fetch failed; the previous page is still shown.
    Failed,
    /// A newer request was issued since; the outcome was dropped.
    Stale,
}

/// Everything a presentation layer needs to draw one frame.
#[derive(Debug, Clone)]
pub struct SessionView<'a> {
    pub records: &'a [Artwork],
    pub total_records: u64,
    pub loading: bool,
    pub selected_count: usize,
    pub visible_selection: Vec<&'a Artwork>,
    pub is_all_current_page_selected: bool,
    pub page_number: u32,
    pub total_pages: u64,
    pub page_range: Option<PageRange>,
    pub bulk_open: bool,
    pub bulk_input: Option<i64>,
    /// Message of the last failed fetch, cleared by the next successful one.
    pub error: Option<&'a str>,
}

/// State of one browsing session.
pub struct Session {
    source: Arc<dyn PageSource>,
    config: SessionConfig,
    cache: PageCache,
    ledger: SelectionLedger,
    pager: PaginationController,
    bulk: BulkSelect,
    error: Option<String>,
}

impl Session {
    /// Creates a session reading from `source`.
    ///
    /// Nothing is fetched until [`start`](Self::start) or a page change.
    pub fn new(source: impl PageSource + 'static, config: SessionConfig) -> Self {
        Self::with_source(Arc::new(source), config)
    }

    /// Creates a session from a shared source.
    pub fn with_source(source: Arc<dyn PageSource>, config: SessionConfig) -> Self {
        let pager = PaginationController::new(config.page_size);
        Self {
            source,
            config,
            cache: PageCache::empty(),
            ledger: SelectionLedger::new(),
            pager,
            bulk: BulkSelect::new(),
            error: None,
        }
    }

    /// Issues the request for the configured start page.
    pub fn start(&mut self) -> Result<PendingFetch, Error> {
        self.request_page(self.config.start_page)
    }

    /// Issues a request for page `n`.
    pub fn request_page(&mut self, n: u32) -> Result<PendingFetch, Error> {
        let ticket = self.pager.go_to_page(n)?;
        Ok(PendingFetch {
            ticket,
            source: Arc::clone(&self.source),
        })
    }

    /// Changes page and waits for the result.
    pub async fn go_to_page(&mut self, n: u32) -> Result<FetchStatus, Error> {
        let outcome = self.request_page(n)?.run().await;
        Ok(self.apply(outcome))
    }

    /// Applies a completed fetch.
    pub fn apply(&mut self, outcome: FetchOutcome) -> FetchStatus {
        let FetchOutcome { ticket, result } = outcome;

        if !self.pager.is_current(&ticket) {
            self.pager.complete(&ticket, None);
            return FetchStatus::Stale;
        }

        match result {
            Ok(page) => {
                let page = page.truncated(self.pager.page_size());
                self.pager.complete(&ticket, Some(page.total_records()));
                self.cache = page;
                self.error = None;
                FetchStatus::Loaded
            }
            Err(e) => {
                log::warn!("Failed to load page {}: {}", ticket.page(), e);
                self.pager.complete(&ticket, None);
                self.error = Some(e.to_string());
                FetchStatus::Failed
            }
        }
    }

    /// Handles one event.
    ///
    /// Only [`SessionEvent::PageChange`] can fail or return a fetch to run.
    pub fn handle(&mut self, event: SessionEvent) -> Result<Option<PendingFetch>, Error> {
        match event {
            SessionEvent::PageChange(n) => return self.request_page(n).map(Some),
            SessionEvent::RowSelect(id) => {
                self.ledger.mark_selected(id);
            }
            SessionEvent::RowUnselect(id) => {
                self.ledger.mark_unselected(id);
            }
            SessionEvent::SelectAllToggle(checked) => self.toggle_all(checked),
            SessionEvent::PageSelectionChanged(ids) => self.reconcile_page(&ids),
            SessionEvent::BulkToggle => self.bulk.toggle(),
            SessionEvent::BulkInput(value) => self.bulk.set_input(value),
            SessionEvent::BulkCountSubmit(count) => {
                let marked = self.bulk.submit(count, &self.cache, &mut self.ledger);
                log::debug!("Bulk select marked {} records", marked);
            }
        }
        Ok(None)
    }

    fn toggle_all(&mut self, checked: bool) {
        for id in self.cache.ids() {
            if checked {
                self.ledger.mark_selected(id);
            } else {
                self.ledger.mark_unselected(id);
            }
        }
    }

    fn reconcile_page(&mut self, ids: &[RecordId]) {
        let chosen: HashSet<RecordId> = ids.iter().copied().collect();
        for id in self.cache.ids() {
            if chosen.contains(&id) {
                self.ledger.mark_selected(id);
            } else {
                self.ledger.mark_unselected(id);
            }
        }
    }

    /// Snapshot for rendering.
    pub fn view(&self) -> SessionView<'_> {
        SessionView {
            records: self.cache.records(),
            total_records: self.pager.total_records(),
            loading: self.pager.is_loading(),
            selected_count: self.ledger.count(),
            visible_selection: visible_selection(&self.cache, &self.ledger),
            is_all_current_page_selected: is_all_selected(&self.cache, &self.ledger),
            page_number: self.pager.page_number(),
            total_pages: self.pager.total_pages(),
            page_range: self.pager.range(self.cache.len()),
            bulk_open: self.bulk.is_open(),
            bulk_input: self.bulk.input(),
            error: self.error.as_deref(),
        }
    }

    pub fn ledger(&self) -> &SelectionLedger {
        &self.ledger
    }

    pub fn page(&self) -> &PageCache {
        &self.cache
    }

    pub fn pagination(&self) -> &PaginationController {
        &self.pager
    }
}
