//! Router configuration

use serde::{Deserialize, Serialize};
use std::path::Path;

use hashroute_navigation::{HashCodec, RootMode};
use hashroute_paths::{non_empty, RouteInput};

use crate::Result;

pub const DEFAULT_TITLE: &str = "Home";

/// Partial settings update. Absent or blank fields keep their prior value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterOptions {
    /// Identifier or path the home route points at
    pub home: Option<String>,
    /// Segment prepended to ordinary route ids in URLs
    pub prefix: Option<String>,
    /// Fallback document title
    pub title: Option<String>,
    /// Emit `./`-relative URLs when served from a sub-path
    pub subpath: Option<bool>,
}

impl RouterOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_home(mut self, home: impl Into<String>) -> Self {
        self.home = Some(home.into());
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_subpath(mut self, subpath: bool) -> Self {
        self.subpath = Some(subpath);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouterSettings {
    pub home: String,
    pub prefix: Option<String>,
    pub title: String,
    pub root: RootMode,
}

impl RouterSettings {
    pub fn apply(&mut self, options: &RouterOptions) {
        if let Some(home) = options.home.as_deref().and_then(non_empty) {
            self.home = home.to_string();
        }
        if let Some(prefix) = options.prefix.as_deref().and_then(non_empty) {
            let prefix = prefix.trim_matches('/').trim();
            if !prefix.is_empty() {
                self.prefix = Some(prefix.to_string());
            }
        }
        if let Some(title) = options.title.as_deref().and_then(non_empty) {
            self.title = title.to_string();
        }
        match options.subpath {
            Some(true) => self.root = RootMode::Relative,
            Some(false) => self.root = RootMode::Absolute,
            None => {}
        }
    }

    pub fn codec(&self) -> HashCodec {
        HashCodec::new(self.root, self.home.clone(), self.prefix.clone())
    }
}

impl Default for RouterSettings {
    fn default() -> Self {
        Self {
            home: "/".to_string(),
            prefix: None,
            title: DEFAULT_TITLE.to_string(),
            root: RootMode::Absolute,
        }
    }
}

/// Settings plus routes, loadable from JSON.
///
/// ```json
/// { "settings": { "prefix": "app" }, "routes": ["home", { "id": "old", "redirect": "new" }] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteManifest {
    pub settings: RouterOptions,
    pub routes: Vec<RouteInput>,
}

impl RouteManifest {
    pub fn from_json(json: &str) -> Result<Self> {
        let manifest: Self = serde_json::from_str(json)?;
        for route in &manifest.routes {
            route.clone().into_record()?;
        }
        Ok(manifest)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let manifest = Self::from_json(&json)?;

        tracing::info!(
            path = %path.display(),
            routes = manifest.routes.len(),
            "Loaded route manifest"
        );

        Ok(manifest)
    }
}
