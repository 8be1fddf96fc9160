//! Path Table
//!
//! Shared mapping from route identifier to record. Clones share the same
//! underlying table.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use crate::non_empty;
use crate::record::{RouteInput, RouteRecord};

#[derive(Default)]
pub struct PathTable {
    records: Arc<RwLock<HashMap<String, RouteRecord>>>,
}

impl PathTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a route, replacing any record with the same id.
    ///
    /// Returns `false` when the id is empty or whitespace-only.
    pub fn register(&self, input: impl Into<RouteInput>) -> bool {
        let input = input.into();
        let record = match input.into_record() {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!("Rejected route registration: {}", e);
                return false;
            }
        };

        tracing::info!(
            route_id = %record.id,
            redirect = ?record.redirect,
            "Registered route"
        );

        self.records.write().insert(record.id.clone(), record);
        true
    }

    /// Remove a route. Absence is not an error.
    pub fn unregister(&self, id: &str) -> bool {
        if let Some(id) = non_empty(id) {
            if self.records.write().remove(id).is_some() {
                tracing::info!(route_id = %id, "Unregistered route");
            }
        }
        true
    }

    pub fn lookup(&self, id: &str) -> Option<RouteRecord> {
        self.records.read().get(id.trim()).cloned()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.records.read().contains_key(id.trim())
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    /// Registered identifiers, sorted.
    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.records.read().keys().cloned().collect();
        ids.sort();
        ids
    }
}

impl Clone for PathTable {
    fn clone(&self) -> Self {
        Self {
            records: Arc::clone(&self.records),
        }
    }
}
