//! Hashroute Core
//!
//! Client-side router over `#` fragment URLs. The router owns the route table
//! and navigation state; the host only reports the location hash and applies
//! URL and title changes.

mod config;
mod error;
pub mod global;
mod handler;
mod host;
mod router;

pub use config::{RouteManifest, RouterOptions, RouterSettings};
pub use error::CoreError;
pub use handler::RouterHandler;
pub use host::{HistoryEntry, Host, MemoryHost};
pub use router::Router;

// Re-export core components
pub use hashroute_navigation::{
    clean_target, HashCodec, NavigationError, NavigationSnapshot, RootMode, RouteBackend,
    RouteMessage, RouterStore, StoreMessage, HOME_ID, NOT_FOUND_ID,
};
pub use hashroute_notify::{EventKind, NotifyError, NotifyHub, RouterEvent, Subscription};
pub use hashroute_paths::{PathError, PathTable, RouteInput, RouteRecord};

pub type Result<T> = std::result::Result<T, CoreError>;

pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging on stderr, filtered by `RUST_LOG` (default `info`).
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
