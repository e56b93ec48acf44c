//! Cookie-backed session store
//!
//! The whole session travels in the cookie as `<issued_at>.<payload_hex>.<mac_hex>`,
//! where the MAC is a keyed BLAKE3 hash over the session name, issue time and
//! payload. Nothing is kept server side.

use crate::config::validation::ConfigValidator;
use crate::domain::{Session, SessionStore};
use crate::infrastructure::adapters::cookies::{read_cookie, set_cookie, CookieOptions};
use crate::shared::error::{AppError, AppResult};
use crate::shared::logging::LoggingUtils;
use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::debug;
use warp::http::HeaderMap;

const KEY_CONTEXT: &str = "dashboard-auth 2026-10 session cookie signing key";

/// Browsers drop cookies larger than this
const MAX_COOKIE_BYTES: usize = 4000;

/// How far ahead of this node another node's clock may run
const MAX_CLOCK_SKEW_SECONDS: i64 = 30;

/// Session store that signs the session into the cookie itself
pub struct CookieSessionStore {
    key: [u8; 32],
    options: CookieOptions,
}

impl CookieSessionStore {
    /// Create a store keyed from `secret`
    pub fn new(secret: &str, options: CookieOptions) -> Self {
        Self {
            key: blake3::derive_key(KEY_CONTEXT, secret.as_bytes()),
            options,
        }
    }

    fn mac(&self, name: &str, issued_at: i64, payload_hex: &str) -> blake3::Hash {
        let mut hasher = blake3::Hasher::new_keyed(&self.key);
        hasher.update(name.as_bytes());
        hasher.update(b"|");
        hasher.update(issued_at.to_string().as_bytes());
        hasher.update(b"|");
        hasher.update(payload_hex.as_bytes());
        hasher.finalize()
    }

    fn sign(&self, name: &str, issued_at: i64, payload_hex: &str) -> String {
        let mac = self.mac(name, issued_at, payload_hex);
        format!("{}.{}.{}", issued_at, payload_hex, mac.to_hex())
    }

    /// Serialize and sign `session`
    pub fn encode(&self, session: &Session) -> AppResult<String> {
        let payload = serde_json::to_vec(&session.to_values()?)?;
        Ok(self.sign(&session.name, Utc::now().timestamp(), &hex::encode(payload)))
    }

    /// Verify and deserialize a cookie value
    pub fn decode(&self, name: &str, raw: &str) -> Result<Session, String> {
        let mut parts = raw.splitn(3, '.');
        let (issued_at, payload_hex, mac_hex) = match (parts.next(), parts.next(), parts.next()) {
            (Some(ts), Some(payload), Some(mac)) => (ts, payload, mac),
            _ => return Err("malformed cookie value".to_string()),
        };

        let issued_at: i64 = issued_at.parse().map_err(|_| "invalid timestamp".to_string())?;
        let provided = blake3::Hash::from_hex(mac_hex).map_err(|_| "invalid signature encoding".to_string())?;

        // blake3::Hash equality is constant time
        if self.mac(name, issued_at, payload_hex) != provided {
            return Err("signature mismatch".to_string());
        }

        let age = Utc::now().timestamp().saturating_sub(issued_at);
        let max_age = i64::try_from(self.options.max_age_seconds).unwrap_or(i64::MAX);
        if age < -MAX_CLOCK_SKEW_SECONDS || age > max_age {
            return Err(format!("cookie outside max age ({}s)", age));
        }

        let payload = hex::decode(payload_hex).map_err(|e| format!("payload encoding: {}", e))?;
        let values: BTreeMap<String, Value> =
            serde_json::from_slice(&payload).map_err(|e| format!("payload json: {}", e))?;

        Ok(Session::from_values(name, values))
    }
}

#[async_trait]
impl SessionStore for CookieSessionStore {
    async fn load(&self, request: &HeaderMap, name: &str) -> Option<Session> {
        if !ConfigValidator::is_valid_session_name(name) {
            debug!(session_name = %name, "Invalid session name, returning empty session");
            return Some(Session::new(name));
        }

        let Some(raw) = read_cookie(request, name) else {
            return Some(Session::new(name));
        };

        match self.decode(name, &raw) {
            Ok(session) => Some(session),
            Err(details) => {
                LoggingUtils::log_session_tampered(name, &details);
                None
            }
        }
    }

    async fn save(&self, response: &mut HeaderMap, session: &Session) -> AppResult<()> {
        let value = self.encode(session)?;
        if value.len() > MAX_COOKIE_BYTES {
            return Err(AppError::Session(format!(
                "Session {} is {} bytes, too large for a cookie",
                session.name,
                value.len()
            )));
        }

        set_cookie(response, &session.name, &value, &self.options)
    }
}
