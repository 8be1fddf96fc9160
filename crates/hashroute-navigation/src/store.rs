//! Router store
//!
//! Owns the path table and navigation state, resolves requested identifiers
//! and hands every publication to a single listener.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use hashroute_notify::EventKind;
use hashroute_paths::{non_empty, PathTable, RouteInput, RouteRecord};

use crate::backend::RouteBackend;
use crate::state::{NavigationSnapshot, NavigationState};

pub const HOME_ID: &str = "home";
pub const NOT_FOUND_ID: &str = "404";

/// Redirects followed per resolution. A redirect target's own redirect is ignored.
const REDIRECT_HOPS: usize = 1;

/// Route data carried with a publication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteMessage {
    pub id: String,
    pub title: Option<String>,
}

impl From<RouteRecord> for RouteMessage {
    fn from(record: RouteRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreMessage {
    pub event: EventKind,
    /// Identifier that became current
    pub path: String,
    /// Published route, `None` for a bare not-found
    pub route: Option<RouteMessage>,
}

pub type StoreListener = Arc<dyn Fn(&StoreMessage) + Send + Sync>;

#[derive(Default)]
pub struct RouterStore {
    paths: PathTable,
    state: NavigationState,
    listener: Arc<RwLock<Option<StoreListener>>>,
}

impl RouterStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn paths(&self) -> &PathTable {
        &self.paths
    }

    /// Install the publication listener. Only the first one is kept.
    pub fn set_listener<F>(&self, listener: F) -> bool
    where
        F: Fn(&StoreMessage) + Send + Sync + 'static,
    {
        let mut slot = self.listener.write();
        if slot.is_some() {
            tracing::debug!("Store listener already installed");
            return false;
        }
        *slot = Some(Arc::new(listener));
        true
    }

    pub fn register(&self, input: impl Into<RouteInput>) -> bool {
        self.paths.register(input)
    }

    pub fn unregister(&self, id: &str) -> bool {
        self.paths.unregister(id)
    }

    pub fn state(&self) -> NavigationSnapshot {
        self.state.snapshot()
    }

    /// Resolve `path` and publish the outcome.
    pub fn current(&self, path: &str) -> bool {
        match non_empty(path) {
            Some(path) => self.resolve(path, REDIRECT_HOPS),
            None => self.not_found(REDIRECT_HOPS),
        }
    }

    /// Resolve `path` through a backend, registering the route it returns.
    ///
    /// Backend failures and empty answers fall back to not-found handling.
    pub async fn current_with<B>(&self, path: &str, backend: &B) -> bool
    where
        B: RouteBackend,
    {
        let Some(path) = non_empty(path) else {
            return self.not_found(REDIRECT_HOPS);
        };

        match backend.fetch(path).await {
            Ok(Some(record)) => {
                let id = record.id.trim().to_string();
                if !self.paths.contains(&id) && !self.paths.register(record) {
                    return self.not_found(REDIRECT_HOPS);
                }
                self.resolve(&id, REDIRECT_HOPS)
            }
            Ok(None) => {
                tracing::debug!(route_id = %path, "Backend has no route");
                self.not_found(REDIRECT_HOPS)
            }
            Err(e) => {
                tracing::warn!(route_id = %path, "Route backend failed: {}", e);
                self.not_found(REDIRECT_HOPS)
            }
        }
    }

    fn resolve(&self, path: &str, hops: usize) -> bool {
        if path == HOME_ID {
            return self.force_home();
        }

        match self.paths.lookup(path) {
            Some(record) => self.publish_record(record, hops),
            None => self.not_found(hops),
        }
    }

    fn publish_record(&self, record: RouteRecord, hops: usize) -> bool {
        match record.redirect.as_deref() {
            Some(redirect) if hops > 0 => self.follow_redirect(&record.id, redirect, hops - 1),
            Some(redirect) => {
                tracing::debug!(route_id = %record.id, redirect = %redirect, "Redirect hop limit reached");
                self.publish(&record.id, EventKind::RouterUpdate)
            }
            None => self.publish(&record.id, EventKind::RouterUpdate),
        }
    }

    fn follow_redirect(&self, id: &str, redirect: &str, hops: usize) -> bool {
        if self.paths.contains(redirect) {
            tracing::debug!(route_id = %id, redirect = %redirect, "Following redirect");
            return self.resolve(redirect, hops);
        }
        if redirect == HOME_ID {
            return self.force_home();
        }

        tracing::debug!(route_id = %id, redirect = %redirect, "Redirect target not registered");
        self.publish(id, EventKind::RouterUpdate)
    }

    fn not_found(&self, hops: usize) -> bool {
        match self.paths.lookup(NOT_FOUND_ID) {
            Some(record) => self.publish_record(record, hops),
            None => {
                self.state.update(NOT_FOUND_ID);
                tracing::info!(route_id = %NOT_FOUND_ID, event = %EventKind::NotFound, "Resolved navigation");
                self.notify(StoreMessage {
                    event: EventKind::NotFound,
                    path: NOT_FOUND_ID.to_string(),
                    route: None,
                });
                true
            }
        }
    }

    fn force_home(&self) -> bool {
        self.state.update(HOME_ID);
        tracing::info!(route_id = %HOME_ID, event = %EventKind::RouterUpdate, "Resolved navigation");

        let title = self.paths.lookup(HOME_ID).and_then(|record| record.title);
        self.notify(StoreMessage {
            event: EventKind::RouterUpdate,
            path: HOME_ID.to_string(),
            route: Some(RouteMessage {
                id: "/".to_string(),
                title,
            }),
        });
        true
    }

    fn publish(&self, path: &str, event: EventKind) -> bool {
        self.state.update(path);
        tracing::info!(route_id = %path, event = %event, "Resolved navigation");

        self.notify(StoreMessage {
            event,
            path: path.to_string(),
            route: self.paths.lookup(path).map(RouteMessage::from),
        });
        true
    }

    fn notify(&self, message: StoreMessage) {
        let listener = self.listener.read().clone();
        match listener {
            Some(listener) => listener(&message),
            None => tracing::debug!(route_id = %message.path, "No store listener installed"),
        }
    }
}

impl Clone for RouterStore {
    fn clone(&self) -> Self {
        Self {
            paths: self.paths.clone(),
            state: self.state.clone(),
            listener: Arc::clone(&self.listener),
        }
    }
}
