//! Notify hub
//!
//! Subscribers are kept in subscription order. Handlers run on the emitting
//! thread with no lock held, so they may call back into the router.

use parking_lot::RwLock;
use std::sync::Arc;

use crate::error::NotifyError;
use crate::event::RouterEvent;
use crate::Result;

pub type Handler = Arc<dyn Fn(&RouterEvent) + Send + Sync>;

#[derive(Clone)]
pub struct Subscription {
    pub id: String,
    pub handler: Handler,
}

impl Subscription {
    pub fn new<F>(id: impl Into<String>, handler: F) -> Result<Self>
    where
        F: Fn(&RouterEvent) + Send + Sync + 'static,
    {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(NotifyError::InvalidSubscriber(id));
        }

        Ok(Self {
            id: trimmed.to_string(),
            handler: Arc::new(handler),
        })
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

pub struct NotifyHub {
    channel: String,
    subscribers: Arc<RwLock<Vec<Subscription>>>,
}

impl NotifyHub {
    pub fn new(channel: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
            subscribers: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Add a subscriber, replacing the handler of an existing one with the same id.
    pub fn subscribe(&self, subscription: Subscription) -> bool {
        if subscription.id.trim().is_empty() {
            tracing::warn!(channel = %self.channel, "Rejected subscriber with empty id");
            return false;
        }

        let mut subscribers = self.subscribers.write();
        match subscribers.iter_mut().find(|s| s.id == subscription.id) {
            Some(existing) => {
                tracing::debug!(channel = %self.channel, subscriber = %subscription.id, "Replaced subscriber");
                existing.handler = subscription.handler;
            }
            None => {
                tracing::debug!(channel = %self.channel, subscriber = %subscription.id, "Added subscriber");
                subscribers.push(subscription);
            }
        }
        true
    }

    /// Convenience over `subscribe` for closures.
    pub fn on<F>(&self, id: impl Into<String>, handler: F) -> bool
    where
        F: Fn(&RouterEvent) + Send + Sync + 'static,
    {
        match Subscription::new(id, handler) {
            Ok(subscription) => self.subscribe(subscription),
            Err(e) => {
                tracing::warn!(channel = %self.channel, "{}", e);
                false
            }
        }
    }

    /// Remove a subscriber. Returns `true` when one was removed.
    pub fn unsubscribe(&self, id: &str) -> bool {
        let id = id.trim();
        let mut subscribers = self.subscribers.write();
        let before = subscribers.len();
        subscribers.retain(|s| s.id != id);
        before != subscribers.len()
    }

    pub fn is_subscribed(&self, id: &str) -> bool {
        self.subscribers.read().iter().any(|s| s.id == id.trim())
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.read().len()
    }

    /// Deliver an event to every subscriber. Returns how many were called.
    pub fn emit(&self, event: &RouterEvent) -> usize {
        let handlers: Vec<Handler> = self
            .subscribers
            .read()
            .iter()
            .map(|s| Arc::clone(&s.handler))
            .collect();

        tracing::debug!(
            channel = %self.channel,
            event = %event.event,
            target = %event.target,
            subscribers = handlers.len(),
            "Emitting router event"
        );

        for handler in &handlers {
            handler(event);
        }
        handlers.len()
    }
}

impl Clone for NotifyHub {
    fn clone(&self) -> Self {
        Self {
            channel: self.channel.clone(),
            subscribers: Arc::clone(&self.subscribers),
        }
    }
}

impl std::fmt::Debug for NotifyHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotifyHub")
            .field("channel", &self.channel)
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}
