//! Path table error types

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PathError {
    #[error("Invalid route id: {0:?}")]
    InvalidId(String),
}
