//! Common test utilities and mock implementations

use crate::{
    domain::{Session, SessionStore},
    shared::error::AppResult,
};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use warp::http::HeaderMap;

/// Session name that makes [`MockSessionStore`] hand out a nil session
pub const NIL_SESSION: &str = "nilSession";

/// In-memory session store whose contents are set directly by tests
#[derive(Clone, Default)]
pub struct MockSessionStore {
    session: Option<Session>,
    current_session_name: String,
    saved: Arc<Mutex<Vec<Session>>>,
}

impl MockSessionStore {
    /// Create an empty mock store
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the session contents
    pub fn reset_session_data(&mut self, data: Option<BTreeMap<String, Value>>, session_name: &str) {
        self.current_session_name = session_name.to_string();
        self.session = Some(Session::from_values(session_name, data.unwrap_or_default()));
    }

    /// Sessions passed to `save`, oldest first
    pub async fn saved_sessions(&self) -> Vec<Session> {
        self.saved.lock().await.clone()
    }
}

#[async_trait]
impl SessionStore for MockSessionStore {
    async fn load(&self, _request: &HeaderMap, _name: &str) -> Option<Session> {
        if self.current_session_name == NIL_SESSION {
            return None;
        }
        self.session.clone()
    }

    async fn save(&self, _response: &mut HeaderMap, session: &Session) -> AppResult<()> {
        self.saved.lock().await.push(session.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_nil_session_name() {
        let mut store = MockSessionStore::new();
        store.reset_session_data(None, NIL_SESSION);
        assert!(store.load(&HeaderMap::new(), NIL_SESSION).await.is_none());
    }

    #[tokio::test]
    async fn test_save_is_recorded() {
        let store = MockSessionStore::new();
        store.save(&mut HeaderMap::new(), &Session::new("session")).await.unwrap();
        assert_eq!(store.saved_sessions().await.len(), 1);
    }
}
