//! Navigation error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NavigationError {
    #[error("Route backend failed: {0}")]
    Backend(String),

    #[error("Invalid route: {0}")]
    Route(#[from] hashroute_paths::PathError),
}
