//! Hashroute Navigation
//!
//! Turns a requested identifier into a published navigation:
//! 1. Registered route → publish it (following at most one redirect hop)
//! 2. `"home"` → forced home, bypassing the path table
//! 3. Anything else → the `"404"` route if registered, otherwise `not-found`
//!
//! The hash codec converts between identifiers and `#` fragment URLs.

mod backend;
mod codec;
mod error;
mod state;
mod store;

pub use backend::RouteBackend;
pub use codec::{clean_target, HashCodec, RootMode};
pub use error::NavigationError;
pub use state::{NavigationSnapshot, NavigationState};
pub use store::{RouteMessage, RouterStore, StoreListener, StoreMessage, HOME_ID, NOT_FOUND_ID};

pub type Result<T> = std::result::Result<T, NavigationError>;
