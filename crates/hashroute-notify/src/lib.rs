//! Hashroute Notifier
//!
//! Named event channel used to announce resolved navigations.
//! Delivery is synchronous, one subscriber per id, once per `emit`.

mod error;
mod event;
mod hub;

pub use error::NotifyError;
pub use event::{EventKind, RouterEvent};
pub use hub::{Handler, NotifyHub, Subscription};

pub type Result<T> = std::result::Result<T, NotifyError>;
