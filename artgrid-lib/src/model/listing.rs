//! Wire format of the paginated artworks listing.

use serde::Deserialize;

use super::Artwork;

/// Top-level response of `GET <base>?page=<n>`.
///
/// Only `data` and `pagination` are consumed; `info`, `config` and any other
/// top-level members are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct Listing {
    /// Records of the requested page, in server order.
    pub data: Vec<Artwork>,
    /// Pagination metadata.
    pub pagination: ListingPagination,
}

/// The `pagination` object of a listing response.
#[derive(Debug, Clone, Deserialize)]
pub struct ListingPagination {
    /// Total number of records available on the server.
    pub total: u64,
    #[serde(default)]
    pub limit: Option<u64>,
    #[serde(default)]
    pub offset: Option<u64>,
    #[serde(default)]
    pub total_pages: Option<u64>,
    #[serde(default)]
    pub current_page: Option<u64>,
    #[serde(default)]
    pub next_url: Option<String>,
}
