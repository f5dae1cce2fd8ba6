//! Typed models

mod listing;
mod record;

pub use listing::*;
pub use record::*;
