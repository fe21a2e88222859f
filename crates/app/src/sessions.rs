//! Session storage capability.
//!
//! Browser sessions are identified by a UUID issued in a cookie by the HTTP
//! layer. Each session owns a set of named slots holding JSON values; the
//! basket lives in one of them, and the external identity subsystem is
//! represented solely by an optional user id in another.

use std::collections::HashMap;

use async_trait::async_trait;
use mockall::automock;
use serde_json::Value;
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Session slot holding the authenticated user's id, when present.
pub const USER_ID_KEY: &str = "user_id";

#[derive(Debug, Error)]
pub enum SessionStoreError {
    #[error("session storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

#[automock]
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Read a slot from the given session.
    async fn get(&self, session: Uuid, key: &str) -> Result<Option<Value>, SessionStoreError>;

    /// Write a slot into the given session.
    async fn set(&self, session: Uuid, key: &str, value: Value) -> Result<(), SessionStoreError>;

    /// Remove a slot from the given session.
    async fn remove(&self, session: Uuid, key: &str) -> Result<(), SessionStoreError>;
}

/// Process-local session store.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<Uuid, HashMap<String, Value>>>,
}

impl InMemorySessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get(&self, session: Uuid, key: &str) -> Result<Option<Value>, SessionStoreError> {
        let sessions = self.sessions.read().await;

        Ok(sessions
            .get(&session)
            .and_then(|slots| slots.get(key))
            .cloned())
    }

    async fn set(&self, session: Uuid, key: &str, value: Value) -> Result<(), SessionStoreError> {
        let mut sessions = self.sessions.write().await;

        sessions
            .entry(session)
            .or_default()
            .insert(key.to_string(), value);

        Ok(())
    }

    async fn remove(&self, session: Uuid, key: &str) -> Result<(), SessionStoreError> {
        let mut sessions = self.sessions.write().await;

        if let Some(slots) = sessions.get_mut(&session) {
            slots.remove(key);
        }

        Ok(())
    }
}
