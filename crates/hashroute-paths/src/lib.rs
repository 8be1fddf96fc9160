//! Hashroute Path Table
//!
//! Route records keyed by identifier:
//! - `register` validates and normalizes, overwriting any record with the same id
//! - `unregister` is idempotent
//! - `lookup` returns a copy of the stored record

mod error;
mod record;
mod table;

pub use error::PathError;
pub use record::{RouteInput, RouteRecord};
pub use table::PathTable;

pub type Result<T> = std::result::Result<T, PathError>;

/// Returns the trimmed string when it has at least one non-whitespace character.
pub fn non_empty(value: &str) -> Option<&str> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
