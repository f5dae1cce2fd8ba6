//! Paginated, selectable artwork browsing.
//!
//! Fetches the Art Institute of Chicago artworks listing one page at a time
//! and keeps a row selection that survives page navigation, even though
//! only the current page's records are ever held in memory.

pub mod error;
pub mod model;
pub mod pagination;
pub mod selection;
pub mod session;
pub mod source;

mod client;
mod config;
mod page;

pub use client::*;
pub use config::SessionConfig;
pub use page::PageCache;
pub use pagination::DEFAULT_PAGE_SIZE;
pub use session::Session;
pub use session::SessionEvent;
pub use session::SessionView;
pub use source::PageSource;
