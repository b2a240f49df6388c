//! Key-value store with change notifications
//!
//! [`ObservedStore`] wraps any [`KeyValueStore`] and, after each write,
//! remove or clear, publishes a [`StorageEvent`] to every subscriber. Events
//! are sent synchronously before the mutating call returns.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::mpsc::{self, Receiver, Sender};
use tracing::trace;

/// Minimal string key-value store
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
    fn clear(&mut self);
}

/// In-memory store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }

    fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Kind of store mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageEventKind {
    Set,
    Remove,
    Clear,
}

/// A store mutation, as published to subscribers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageEvent {
    #[serde(rename = "type")]
    pub kind: StorageEventKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// New value, `set` only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Value before the mutation, if the key existed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_value: Option<String>,
    /// Milliseconds since the Unix epoch
    pub timestamp: i64,
}

impl StorageEvent {
    fn now(kind: StorageEventKind) -> Self {
        Self {
            kind,
            key: None,
            value: None,
            old_value: None,
            timestamp: chrono::Utc::now().timestamp_millis(),
        }
    }
}

/// Store decorator that announces every mutation
#[derive(Debug)]
pub struct ObservedStore<S> {
    inner: S,
    subscribers: Vec<Sender<StorageEvent>>,
}

impl<S: KeyValueStore> ObservedStore<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            subscribers: Vec::new(),
        }
    }

    /// Register a listener. Dropping the receiver unsubscribes it.
    pub fn subscribe(&mut self) -> Receiver<StorageEvent> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn into_inner(self) -> S {
        self.inner
    }

    fn publish(&mut self, event: StorageEvent) {
        trace!(kind = ?event.kind, key = ?event.key, "publishing storage event");
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }
}

impl<S: KeyValueStore> KeyValueStore for ObservedStore<S> {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: &str) {
        let old_value = self.inner.get(key);
        self.inner.set(key, value);
        self.publish(StorageEvent {
            key: Some(key.to_string()),
            value: Some(value.to_string()),
            old_value,
            ..StorageEvent::now(StorageEventKind::Set)
        });
    }

    fn remove(&mut self, key: &str) {
        let old_value = self.inner.get(key);
        self.inner.remove(key);
        self.publish(StorageEvent {
            key: Some(key.to_string()),
            old_value,
            ..StorageEvent::now(StorageEventKind::Remove)
        });
    }

    fn clear(&mut self) {
        self.inner.clear();
        self.publish(StorageEvent::now(StorageEventKind::Clear));
    }
}
