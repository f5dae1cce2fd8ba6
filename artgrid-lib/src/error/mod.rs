//! Error types

mod api;

pub use api::*;

/// Errors returned by the artgrid library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The data source failed to deliver a page.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Pages are 1-indexed; page 0 does not exist.
    #[error("Invalid page number: {0}")]
    InvalidPage(u32),

    /// Invalid client or session configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}
