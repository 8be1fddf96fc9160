//! Router facade
//!
//! Wires the store to the handler and exposes the public routing surface.
//! Clones are handles to the same router.

use std::sync::Arc;

use hashroute_navigation::{NavigationSnapshot, RouteBackend, RouterStore, HOME_ID};
use hashroute_notify::NotifyHub;
use hashroute_paths::{non_empty, PathTable, RouteInput};

use crate::config::{RouteManifest, RouterOptions, RouterSettings, DEFAULT_TITLE};
use crate::handler::RouterHandler;
use crate::host::Host;

pub const EVENT_CHANNEL: &str = "router";

struct RouterInner {
    store: RouterStore,
    handler: RouterHandler,
}

#[derive(Clone)]
pub struct Router {
    inner: Arc<RouterInner>,
}

impl Router {
    /// Create a router over `host`.
    ///
    /// The fallback title is the `title` option, else the host's current
    /// document title, else `"Home"`.
    pub fn new(options: RouterOptions, host: Arc<dyn Host>) -> Self {
        let mut settings = RouterSettings::default();
        let host_title = host.title();
        settings.title = non_empty(&host_title).unwrap_or(DEFAULT_TITLE).to_string();
        settings.apply(&options);

        let handler = RouterHandler::new(settings, host, NotifyHub::new(EVENT_CHANNEL));
        let store = RouterStore::new();

        let listener = handler.clone();
        store.set_listener(move |message| listener.sync(message));

        tracing::info!(
            crate_name = crate::NAME,
            version = crate::VERSION,
            "Router initialized"
        );

        Self {
            inner: Arc::new(RouterInner { store, handler }),
        }
    }

    /// Create a router and register every route of `manifest`.
    pub fn from_manifest(manifest: RouteManifest, host: Arc<dyn Host>) -> Self {
        let router = Self::new(manifest.settings, host);
        for route in manifest.routes {
            router.register(route);
        }
        router
    }

    /// Whether both handles refer to the same router.
    pub fn ptr_eq(a: &Router, b: &Router) -> bool {
        Arc::ptr_eq(&a.inner, &b.inner)
    }

    pub fn configure(&self, options: RouterOptions) {
        self.inner.handler.configure(&options);
    }

    pub fn settings(&self) -> RouterSettings {
        self.inner.handler.settings()
    }

    /// Register a route. A route with id `"home"` becomes the home target.
    pub fn register(&self, input: impl Into<RouteInput>) -> bool {
        let input = input.into();
        let is_home = input.raw_id().trim() == HOME_ID;

        if !self.inner.store.register(input) {
            return false;
        }
        if is_home {
            self.configure(RouterOptions::new().with_home(HOME_ID));
        }
        true
    }

    pub fn unregister(&self, id: &str) -> bool {
        if !self.inner.store.unregister(id) {
            return false;
        }
        if id.trim() == HOME_ID {
            self.configure(RouterOptions::new().with_home("/"));
        }
        true
    }

    /// Resolve `id` and publish the outcome. Blank ids are ignored.
    pub fn navigate(&self, id: &str) -> bool {
        match non_empty(id) {
            Some(id) => self.inner.store.current(id),
            None => false,
        }
    }

    /// Like `navigate`, asking `backend` for the route first.
    pub async fn navigate_with<B>(&self, id: &str, backend: &B) -> bool
    where
        B: RouteBackend,
    {
        match non_empty(id) {
            Some(id) => self.inner.store.current_with(id, backend).await,
            None => false,
        }
    }

    /// Resolve whatever the host's location hash points at.
    pub fn hash_change(&self) -> bool {
        let path = self.inner.handler.current_path();
        self.inner.store.current(&path)
    }

    /// Initial resolution once the page has loaded.
    pub fn load(&self) -> bool {
        self.hash_change()
    }

    pub fn state(&self) -> NavigationSnapshot {
        self.inner.store.state()
    }

    pub fn events(&self) -> &NotifyHub {
        self.inner.handler.events()
    }

    pub fn paths(&self) -> &PathTable {
        self.inner.store.paths()
    }
}

impl std::fmt::Debug for Router {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Router")
            .field("settings", &self.settings())
            .field("state", &self.state())
            .field("routes", &self.paths().len())
            .finish()
    }
}
