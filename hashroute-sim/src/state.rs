//! Simulator state

use parking_lot::Mutex;
use std::sync::Arc;

use hashroute_core::{MemoryHost, RouteManifest, Router, RouterEvent, RouterOptions};

use crate::commands::{CommandOutput, ScriptCommand};

const SUBSCRIBER_ID: &str = "hashroute-sim";

pub struct AppState {
    router: Router,
    host: MemoryHost,
    events: Arc<Mutex<Vec<RouterEvent>>>,
}

impl AppState {
    pub fn new(manifest: Option<&str>, base: &str) -> hashroute_core::Result<Self> {
        let host = MemoryHost::new(base)?;
        let router = match manifest {
            Some(path) => Router::from_manifest(RouteManifest::load(path)?, Arc::new(host.clone())),
            None => Router::new(RouterOptions::new(), Arc::new(host.clone())),
        };

        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&events);
        router
            .events()
            .on(SUBSCRIBER_ID, move |event| sink.lock().push(event.clone()));

        tracing::info!(base = %base, routes = router.paths().len(), "Simulator ready");

        Ok(Self {
            router,
            host,
            events,
        })
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn host(&self) -> &MemoryHost {
        &self.host
    }

    /// Parse and run one script line, collecting the events it caused.
    pub fn execute_line(&self, line: &str) -> CommandOutput {
        let result = match ScriptCommand::parse(line) {
            Ok(command) => command.execute(self),
            Err(e) => crate::commands::CommandResult::err(e),
        };

        CommandOutput {
            command: line.trim().to_string(),
            result,
            events: std::mem::take(&mut *self.events.lock()),
        }
    }
}
