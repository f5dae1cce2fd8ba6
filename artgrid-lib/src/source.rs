//! The data source seam.

use async_trait::async_trait;

use crate::PageCache;
use crate::error::Error;

/// Something that can deliver one page of artworks.
///
/// [`ArticClient`](crate::ArticClient) is the HTTP implementation; tests and
/// offline front ends can provide their own.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetches the 1-indexed `page` holding up to `page_size` records.
    async fn fetch_page(&self, page: u32, page_size: usize) -> Result<PageCache, Error>;
}
