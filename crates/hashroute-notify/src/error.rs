//! Notifier error types

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum NotifyError {
    #[error("Invalid subscriber id: {0:?}")]
    InvalidSubscriber(String),
}
