//! Hash codec
//!
//! Identifier → URL: `"404"` → `<root>#/404`, `"home"` → `<root>#<home-path>`,
//! anything else → `<root>#/<prefix>/<id>`, percent-encoded.
//! URL fragment → identifier: percent-decode, strip `!`, one leading `/`,
//! then the prefix segment.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};
use serde::{Deserialize, Serialize};

use crate::store::{HOME_ID, NOT_FOUND_ID};

/// Bytes escaped in a written fragment. `%` is included so ids survive decoding.
const FRAGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'`');

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RootMode {
    /// Served from the site root
    #[default]
    #[serde(rename = "/")]
    Absolute,
    /// Served from a sub-path, URLs stay relative
    #[serde(rename = "./")]
    Relative,
}

impl RootMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RootMode::Absolute => "/",
            RootMode::Relative => "./",
        }
    }
}

impl std::fmt::Display for RootMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashCodec {
    root: RootMode,
    home: String,
    prefix: Option<String>,
}

impl HashCodec {
    pub fn new(root: RootMode, home: impl Into<String>, prefix: Option<String>) -> Self {
        let prefix = prefix
            .map(|p| p.trim().trim_matches('/').to_string())
            .filter(|p| !p.is_empty());

        Self {
            root,
            home: home.into(),
            prefix,
        }
    }

    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    /// Decode a raw fragment (without `#`) into an identifier.
    pub fn from_hash(&self, raw: &str) -> Option<String> {
        let decoded = percent_decode_str(raw.trim()).decode_utf8_lossy();
        let raw = decoded.trim();
        let raw = raw.strip_prefix('!').unwrap_or(raw);

        let path = remove_first_slash(raw)?;
        let path = match self.prefix.as_deref() {
            Some(prefix) => strip_prefix_segment(&path, prefix),
            None => path.as_str(),
        };

        let path = path.trim();
        if path.is_empty() {
            None
        } else {
            Some(path.to_string())
        }
    }

    /// Encode an identifier as a hash URL relative to the configured root.
    ///
    /// `target` is a route identifier, never a fragment: a leading `!` or `/`
    /// is dropped but the prefix is not stripped, so a route named after the
    /// prefix keeps its own URL.
    pub fn to_hash(&self, target: &str) -> String {
        let target = target.trim();
        let target = target.strip_prefix('!').unwrap_or(target);
        let id = remove_first_slash(target).filter(|id| !id.is_empty());

        let path = match id.as_deref() {
            Some(NOT_FOUND_ID) => return format!("{}#/{}", self.root, NOT_FOUND_ID),
            None | Some(HOME_ID) => {
                let home = self.home_path();
                match &self.prefix {
                    Some(prefix) => format!("/{}{}", prefix, home),
                    None => home,
                }
            }
            Some(id) => match &self.prefix {
                Some(prefix) => format!("/{}/{}", prefix, id),
                None => format!("/{}", id),
            },
        };
        format!("{}#{}", self.root, utf8_percent_encode(&path, FRAGMENT))
    }

    /// Home setting with exactly one leading `/`.
    pub fn home_path(&self) -> String {
        match remove_first_slash(&self.home) {
            Some(home) if !home.is_empty() => format!("/{}", home),
            _ => "/".to_string(),
        }
    }
}

/// Event target form of an identifier: no leading slash, empty → `"home"`.
pub fn clean_target(target: &str) -> String {
    match remove_first_slash(target) {
        Some(path) if !path.is_empty() => path,
        _ => HOME_ID.to_string(),
    }
}

fn remove_first_slash(path: &str) -> Option<String> {
    let path = path.trim();
    if path.is_empty() {
        return None;
    }
    Some(path.strip_prefix('/').unwrap_or(path).trim().to_string())
}

fn strip_prefix_segment<'a>(path: &'a str, prefix: &str) -> &'a str {
    match path.strip_prefix(prefix) {
        Some("") => "",
        Some(rest) if rest.starts_with('/') => &rest[1..],
        _ => path,
    }
}
