//! Route record data structure
//!
//! A record is identified by its `id`. `title` names the document while the
//! route is current, `redirect` points at another identifier to resolve to.

use serde::{Deserialize, Serialize};

use crate::error::PathError;
use crate::{non_empty, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteRecord {
    /// Route identifier (non-empty, trimmed once normalized)
    pub id: String,
    /// Document title shown while this route is current
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Identifier to resolve to instead of this route
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
}

impl RouteRecord {
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        match non_empty(&id) {
            Some(trimmed) => Ok(Self {
                id: trimmed.to_string(),
                title: None,
                redirect: None,
            }),
            None => Err(PathError::InvalidId(id)),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_redirect(mut self, redirect: impl Into<String>) -> Self {
        self.redirect = Some(redirect.into());
        self
    }

    /// Produce the stored form: trimmed id, blank title/redirect dropped.
    pub fn normalized(&self) -> Result<Self> {
        let id = non_empty(&self.id).ok_or_else(|| PathError::InvalidId(self.id.clone()))?;

        Ok(Self {
            id: id.to_string(),
            title: self.title.as_deref().and_then(non_empty).map(str::to_string),
            redirect: self
                .redirect
                .as_deref()
                .and_then(non_empty)
                .map(str::to_string),
        })
    }
}

/// Anything accepted by `register`: a bare identifier or a full record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RouteInput {
    Id(String),
    Record(RouteRecord),
}

impl RouteInput {
    /// The identifier as given, before normalization.
    pub fn raw_id(&self) -> &str {
        match self {
            RouteInput::Id(id) => id,
            RouteInput::Record(record) => &record.id,
        }
    }

    pub fn into_record(self) -> Result<RouteRecord> {
        match self {
            RouteInput::Id(id) => RouteRecord::new(id),
            RouteInput::Record(record) => record.normalized(),
        }
    }
}

impl From<&str> for RouteInput {
    fn from(id: &str) -> Self {
        RouteInput::Id(id.to_string())
    }
}

impl From<String> for RouteInput {
    fn from(id: String) -> Self {
        RouteInput::Id(id)
    }
}

impl From<RouteRecord> for RouteInput {
    fn from(record: RouteRecord) -> Self {
        RouteInput::Record(record)
    }
}
