//! Host integration
//!
//! The router never touches a real browser. A `Host` reports the location
//! hash and applies history pushes and title changes; a DOM binding would
//! back it with `window.location`, `history.pushState` and `document.title`.

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use url::Url;

use crate::error::CoreError;
use crate::Result;

pub trait Host: Send + Sync {
    /// Current fragment without the leading `#`, empty when there is none.
    fn location_hash(&self) -> String;

    /// Push a history entry for `url`, resolved against the current location.
    fn push_state(&self, url: &str);

    fn title(&self) -> String;

    fn set_title(&self, title: &str);
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub url: String,
    pub title: String,
    pub pushed_at: DateTime<Utc>,
}

/// In-memory host for tests, tools and non-browser embedders.
pub struct MemoryHost {
    location: Arc<RwLock<Url>>,
    title: Arc<RwLock<String>>,
    history: Arc<RwLock<Vec<HistoryEntry>>>,
}

impl MemoryHost {
    pub fn new(base: &str) -> Result<Self> {
        let location = Url::parse(base).map_err(|e| CoreError::InvalidUrl(format!("{}: {}", base, e)))?;
        if location.cannot_be_a_base() {
            return Err(CoreError::Config(format!(
                "{} cannot anchor relative hash URLs",
                base
            )));
        }

        Ok(Self {
            location: Arc::new(RwLock::new(location)),
            title: Arc::new(RwLock::new(String::new())),
            history: Arc::new(RwLock::new(Vec::new())),
        })
    }

    pub fn with_title(self, title: impl Into<String>) -> Self {
        *self.title.write() = title.into();
        self
    }

    pub fn href(&self) -> String {
        self.location.read().to_string()
    }

    pub fn history(&self) -> Vec<HistoryEntry> {
        self.history.read().clone()
    }

    /// Replace the fragment as if the user edited the address bar.
    ///
    /// Does not notify the router; call `Router::hash_change` afterwards.
    pub fn set_hash(&self, raw: &str) {
        let fragment = raw.trim().trim_start_matches('#');
        let url = {
            let mut location = self.location.write();
            location.set_fragment(if fragment.is_empty() { None } else { Some(fragment) });
            location.to_string()
        };
        self.record(url);
    }

    fn record(&self, url: String) {
        let title = self.title.read().clone();
        self.history.write().push(HistoryEntry {
            url,
            title,
            pushed_at: Utc::now(),
        });
    }
}

impl Default for MemoryHost {
    fn default() -> Self {
        Self {
            location: Arc::new(RwLock::new(
                Url::parse("http://localhost/").expect("static base URL is valid"),
            )),
            title: Arc::new(RwLock::new(String::new())),
            history: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl Host for MemoryHost {
    fn location_hash(&self) -> String {
        self.location
            .read()
            .fragment()
            .unwrap_or_default()
            .to_string()
    }

    fn push_state(&self, url: &str) {
        let next = match self.location.read().join(url) {
            Ok(next) => next,
            Err(e) => {
                tracing::warn!(url = %url, "Ignored history push: {}", e);
                return;
            }
        };

        tracing::debug!(url = %next, "History push");
        let href = next.to_string();
        *self.location.write() = next;
        self.record(href);
    }

    fn title(&self) -> String {
        self.title.read().clone()
    }

    fn set_title(&self, title: &str) {
        *self.title.write() = title.to_string();
    }
}

impl Clone for MemoryHost {
    fn clone(&self) -> Self {
        Self {
            location: Arc::clone(&self.location),
            title: Arc::clone(&self.title),
            history: Arc::clone(&self.history),
        }
    }
}
