//! Navigation state
//!
//! `previous` always holds the value `current` had right before the last update.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationSnapshot {
    pub current: Option<String>,
    pub previous: Option<String>,
}

#[derive(Default)]
pub struct NavigationState {
    inner: Arc<RwLock<NavigationSnapshot>>,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Detached copy of the current state.
    pub fn snapshot(&self) -> NavigationSnapshot {
        self.inner.read().clone()
    }

    pub fn current(&self) -> Option<String> {
        self.inner.read().current.clone()
    }

    /// Shift `current` into `previous` and make `id` current.
    pub fn update(&self, id: impl Into<String>) {
        let id = id.into();
        let mut state = self.inner.write();
        tracing::debug!(from = ?state.current, to = %id, "Navigation state update");
        state.previous = state.current.take();
        state.current = Some(id);
    }
}

impl Clone for NavigationState {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}
