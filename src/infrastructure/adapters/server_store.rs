//! Server-side session store (Redis-backed with memory fallback)
//!
//! The cookie only carries an opaque session id; payloads live under
//! `session:<name>:<id>` with the configured max age as TTL.

use crate::config::validation::ConfigValidator;
use crate::domain::{Session, SessionStore};
use crate::infrastructure::adapters::cookies::{read_cookie, set_cookie, CookieOptions};
use crate::shared::error::{AppError, AppResult};
use crate::shared::logging::LoggingUtils;
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use redis::{aio::ConnectionManager, AsyncCommands, Client};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};
use uuid::Uuid;
use warp::http::HeaderMap;

type Payload = BTreeMap<String, Value>;

/// Serialized payload as it would sit in Redis
#[derive(Debug, Clone)]
struct MemoryEntry {
    raw: String,
    expires_at: DateTime<Utc>,
}

#[derive(Clone)]
pub struct ServerSessionStore {
    redis: Option<ConnectionManager>,
    memory: Arc<RwLock<HashMap<String, MemoryEntry>>>,
    options: CookieOptions,
}

impl ServerSessionStore {
    /// Connect to Redis when a URL is given, otherwise keep sessions in memory
    pub async fn new(redis_url: Option<&str>, options: CookieOptions) -> Self {
        let redis = match redis_url {
            Some(url) => match Self::create_redis_manager(url).await {
                Ok(manager) => {
                    info!("Redis session store connection established");
                    Some(manager)
                }
                Err(e) => {
                    warn!("Failed to connect to Redis session store: {}. Using in-memory sessions only.", e);
                    None
                }
            },
            None => None,
        };

        Self {
            redis,
            memory: Arc::new(RwLock::new(HashMap::new())),
            options,
        }
    }

    /// Store without Redis
    pub fn in_memory(options: CookieOptions) -> Self {
        Self {
            redis: None,
            memory: Arc::new(RwLock::new(HashMap::new())),
            options,
        }
    }

    async fn create_redis_manager(redis_url: &str) -> AppResult<ConnectionManager> {
        let client = Client::open(redis_url)
            .map_err(|e| AppError::Storage(format!("Failed to create Redis client: {}", e)))?;

        ConnectionManager::new(client)
            .await
            .map_err(|e| AppError::Storage(format!("Failed to create Redis connection manager: {}", e)))
    }

    fn key(name: &str, id: &str) -> String {
        format!("session:{}:{}", name, id)
    }

    fn decode_payload(raw: &str) -> AppResult<Payload> {
        Ok(serde_json::from_str(raw)?)
    }

    async fn fetch_raw(&self, key: &str) -> AppResult<Option<String>> {
        if let Some(manager) = &self.redis {
            let mut conn = manager.clone();
            let raw: Option<String> = conn.get(key).await?;
            if raw.is_some() {
                return Ok(raw);
            }
        }

        let memory = self.memory.read().await;
        Ok(memory
            .get(key)
            .filter(|entry| entry.expires_at > Utc::now())
            .map(|entry| entry.raw.clone()))
    }

    async fn fetch(&self, key: &str) -> AppResult<Option<Payload>> {
        self.fetch_raw(key)
            .await?
            .map(|raw| Self::decode_payload(&raw))
            .transpose()
    }

    async fn store(&self, key: String, payload: Payload) -> AppResult<()> {
        let raw = serde_json::to_string(&payload)?;

        if let Some(manager) = &self.redis {
            let mut conn = manager.clone();
            match conn.set_ex::<_, _, ()>(&key, &raw, self.options.max_age_seconds).await {
                Ok(()) => return Ok(()),
                Err(e) => warn!("Redis session write failed: {}. Falling back to memory.", e),
            }
        }

        let now = Utc::now();
        let expires_at = i64::try_from(self.options.max_age_seconds)
            .ok()
            .and_then(Duration::try_seconds)
            .and_then(|ttl| now.checked_add_signed(ttl))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        let mut memory = self.memory.write().await;
        memory.retain(|_, entry| entry.expires_at > now);
        memory.insert(key, MemoryEntry { raw, expires_at });

        Ok(())
    }

    /// Number of live in-memory sessions
    pub async fn memory_entries(&self) -> usize {
        let now = Utc::now();
        self.memory.read().await.values().filter(|e| e.expires_at > now).count()
    }
}

#[async_trait]
impl SessionStore for ServerSessionStore {
    async fn load(&self, request: &HeaderMap, name: &str) -> Option<Session> {
        if !ConfigValidator::is_valid_session_name(name) {
            debug!(session_name = %name, "Invalid session name, returning empty session");
            return Some(Session::new(name));
        }

        // Unknown or malformed ids start over with an empty session
        let Some(id) = read_cookie(request, name).filter(|id| Uuid::parse_str(id).is_ok()) else {
            return Some(Session::new(name));
        };

        match self.fetch(&Self::key(name, &id)).await {
            Ok(Some(payload)) => {
                let mut session = Session::from_values(name, payload);
                session.id = Some(id);
                Some(session)
            }
            Ok(None) => Some(Session::new(name)),
            Err(e) => {
                LoggingUtils::log_session_tampered(name, &e.to_string());
                None
            }
        }
    }

    async fn save(&self, response: &mut HeaderMap, session: &Session) -> AppResult<()> {
        let id = session.id.clone().unwrap_or_else(|| Uuid::new_v4().to_string());
        self.store(Self::key(&session.name, &id), session.to_values()?).await?;

        set_cookie(response, &session.name, &id, &self.options)
    }
}
