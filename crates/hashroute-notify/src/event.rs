//! Router events

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventKind {
    /// A route was resolved and is now current
    RouterUpdate,
    /// Nothing matched and no "404" route is registered
    NotFound,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::RouterUpdate => "router-update",
            EventKind::NotFound => "not-found",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for EventKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "router-update" => Ok(EventKind::RouterUpdate),
            "not-found" => Ok(EventKind::NotFound),
            _ => Err(format!("Unknown router event: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouterEvent {
    pub event: EventKind,
    /// Identifier the router settled on
    pub target: String,
}

impl RouterEvent {
    pub fn new(event: EventKind, target: impl Into<String>) -> Self {
        Self {
            event,
            target: target.into(),
        }
    }
}
