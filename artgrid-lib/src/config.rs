//! Session configuration

use crate::pagination::DEFAULT_PAGE_SIZE;

/// Settings fixed for the lifetime of a [`Session`](crate::Session).
///
/// # Example
///
/// ```
/// use artgrid_lib::SessionConfig;
///
/// let config = SessionConfig::default().with_start_page(3);
/// assert_eq!(config.page_size, 12);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Records per page.
    ///
    /// Default: 12
    pub page_size: usize,

    /// Page loaded by [`Session::start`](crate::Session::start).
    ///
    /// Default: 1
    pub start_page: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            start_page: 1,
        }
    }
}

impl SessionConfig {
    /// Creates a new session config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the start page.
    pub fn with_start_page(mut self, page: u32) -> Self {
        self.start_page = page;
        self
    }
}
