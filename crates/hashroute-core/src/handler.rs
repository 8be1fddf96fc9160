//! Router handler
//!
//! Listens to store publications and keeps the host in sync: pushes the
//! canonical hash URL, sets the document title and announces the target on
//! the event channel. A target equal to the last announced one is not
//! announced again.

use parking_lot::{Mutex, RwLock};
use std::sync::Arc;

use hashroute_navigation::{clean_target, HashCodec, RouteMessage, StoreMessage, HOME_ID, NOT_FOUND_ID};
use hashroute_notify::{EventKind, NotifyHub, RouterEvent};

use crate::config::{RouterOptions, RouterSettings};
use crate::host::Host;

pub const NOT_FOUND_TITLE: &str = "Error 404";

pub struct RouterHandler {
    settings: Arc<RwLock<RouterSettings>>,
    host: Arc<dyn Host>,
    events: NotifyHub,
    /// Last announced target
    last: Arc<Mutex<Option<String>>>,
}

impl RouterHandler {
    pub fn new(settings: RouterSettings, host: Arc<dyn Host>, events: NotifyHub) -> Self {
        Self {
            settings: Arc::new(RwLock::new(settings)),
            host,
            events,
            last: Arc::new(Mutex::new(None)),
        }
    }

    pub fn settings(&self) -> RouterSettings {
        self.settings.read().clone()
    }

    pub fn configure(&self, options: &RouterOptions) {
        let mut settings = self.settings.write();
        settings.apply(options);
        tracing::debug!(
            home = %settings.home,
            prefix = ?settings.prefix,
            root = %settings.root,
            "Router settings updated"
        );
    }

    pub fn events(&self) -> &NotifyHub {
        &self.events
    }

    /// Identifier in the host's location hash, `"home"` when there is none.
    pub fn current_path(&self) -> String {
        let hash = self.host.location_hash();
        let path = self.settings.read().codec().from_hash(&hash);
        tracing::debug!(hash = %hash, path = ?path, "Decoded location hash");
        path.unwrap_or_else(|| HOME_ID.to_string())
    }

    /// Store listener entry point.
    pub fn sync(&self, message: &StoreMessage) {
        match message.event {
            EventKind::NotFound => self.not_found(),
            EventKind::RouterUpdate => self.router_update(message.route.as_ref()),
        }
    }

    fn not_found(&self) {
        let codec = self.codec();
        self.host.push_state(&codec.to_hash(NOT_FOUND_ID));
        self.host.set_title(NOT_FOUND_TITLE);
        self.announce(EventKind::NotFound, NOT_FOUND_ID);
    }

    fn router_update(&self, route: Option<&RouteMessage>) {
        let settings = self.settings();
        let codec = settings.codec();
        let path = self.current_path();
        let hash_is_empty = self.host.location_hash().is_empty();

        let target = match route.map(|r| r.id.as_str()) {
            Some(id) if id != path => {
                self.host.push_state(&codec.to_hash(id));
                Some(id.to_string())
            }
            _ if path == HOME_ID && hash_is_empty => {
                self.host.push_state(&codec.to_hash(&settings.home));
                Some(settings.home.clone())
            }
            id => id.map(str::to_string),
        };

        let title = route
            .and_then(|r| r.title.as_deref())
            .unwrap_or(&settings.title);
        self.host.set_title(title);

        if let Some(target) = target {
            self.announce(EventKind::RouterUpdate, &target);
        }
    }

    fn announce(&self, event: EventKind, target: &str) {
        {
            let mut last = self.last.lock();
            if last.as_deref() == Some(target) {
                tracing::debug!(target = %target, "Skipped repeated router event");
                return;
            }
            *last = Some(target.to_string());
        }

        self.events.emit(&RouterEvent::new(event, clean_target(target)));
    }

    fn codec(&self) -> HashCodec {
        self.settings.read().codec()
    }
}

impl Clone for RouterHandler {
    fn clone(&self) -> Self {
        Self {
            settings: Arc::clone(&self.settings),
            host: Arc::clone(&self.host),
            events: self.events.clone(),
            last: Arc::clone(&self.last),
        }
    }
}
