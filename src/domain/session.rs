//! Session domain models
//!
//! A session is a named bag of per-client state. The OAuth2 token lives in a
//! dedicated field; everything else stays in `values`.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use tracing::warn;

/// Key the token is stored under in serialized session payloads
pub const TOKEN_KEY: &str = "token";

/// OAuth2 access credential kept in the session
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// Bearer credential presented to the platform API
    pub access_token: String,

    #[serde(default)]
    pub token_type: String,

    #[serde(default)]
    pub refresh_token: String,

    /// `None` means the token never expires
    #[serde(default)]
    pub expiry: Option<DateTime<Utc>>,
}

impl Token {
    /// Create a bearer token without expiry
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            token_type: "bearer".to_string(),
            refresh_token: String::new(),
            expiry: None,
        }
    }

    pub fn with_expiry(mut self, expiry: DateTime<Utc>) -> Self {
        self.expiry = Some(expiry);
        self
    }

    /// Whether the token counts as expired at `now`.
    ///
    /// A token is treated as expired `delta` before its expiry instant so that
    /// it does not lapse while a request is in flight.
    pub fn is_expired_at(&self, now: DateTime<Utc>, delta: Duration) -> bool {
        match self.expiry {
            Some(expiry) => expiry.checked_sub_signed(delta).map_or(true, |edge| edge < now),
            None => false,
        }
    }

    /// Non-empty access token that has not expired
    pub fn is_valid_at(&self, now: DateTime<Utc>, delta: Duration) -> bool {
        !self.access_token.is_empty() && !self.is_expired_at(now, delta)
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Token")
            .field("access_token", &"<redacted>")
            .field("token_type", &self.token_type)
            .field("refresh_token", &"<redacted>")
            .field("expiry", &self.expiry)
            .finish()
    }
}

/// Per-request session state
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    /// Session (cookie) name
    pub name: String,

    /// Server-side session id, if the backend uses one
    pub id: Option<String>,

    /// Token stored under [`TOKEN_KEY`]
    pub token: Option<Token>,

    /// Remaining session keys
    pub values: BTreeMap<String, Value>,

    /// Not yet persisted by any store
    pub is_new: bool,
}

impl Session {
    /// Create a fresh, empty session
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: None,
            token: None,
            values: BTreeMap::new(),
            is_new: true,
        }
    }

    /// No token and no other values
    pub fn is_empty(&self) -> bool {
        self.token.is_none() && self.values.is_empty()
    }

    /// Rebuild a session from a stored key/value payload.
    ///
    /// A `token` entry that does not decode into [`Token`] is dropped, so the
    /// session loads without a token.
    pub fn from_values(name: impl Into<String>, mut values: BTreeMap<String, Value>) -> Self {
        let name = name.into();
        let token = values.remove(TOKEN_KEY).and_then(|raw| {
            serde_json::from_value::<Token>(raw)
                .map_err(|e| warn!(session_name = %name, error = %e, "Dropping malformed session token"))
                .ok()
        });

        Self {
            name,
            id: None,
            token,
            values,
            is_new: false,
        }
    }

    /// Flatten the session into a key/value payload for storage
    pub fn to_values(&self) -> Result<BTreeMap<String, Value>, serde_json::Error> {
        let mut values = self.values.clone();
        if let Some(token) = &self.token {
            values.insert(TOKEN_KEY.to_string(), serde_json::to_value(token)?);
        }
        Ok(values)
    }
}
