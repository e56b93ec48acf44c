//! Token validity policies
//!
//! The rule deciding whether a session token is still usable is pluggable.
//! Every policy is fail-closed: anything it cannot positively confirm is invalid.

use crate::config::app_config::JwtConfig;
use crate::domain::session::Token;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Validity predicate applied to session tokens
pub trait TokenPolicy: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    fn is_valid(&self, token: &Token) -> bool;
}

/// Non-empty access token that is not (about to be) expired
#[derive(Debug, Clone)]
pub struct ExpiryPolicy {
    expiry_delta: Duration,
}

impl ExpiryPolicy {
    /// Deltas beyond what `Duration` can hold saturate, rejecting every expiring token.
    pub fn new(expiry_delta_seconds: u64) -> Self {
        let expiry_delta = i64::try_from(expiry_delta_seconds)
            .ok()
            .and_then(Duration::try_seconds)
            .unwrap_or(Duration::MAX);

        Self { expiry_delta }
    }

    pub fn is_valid_at(&self, token: &Token, now: DateTime<Utc>) -> bool {
        token.is_valid_at(now, self.expiry_delta)
    }
}

impl Default for ExpiryPolicy {
    fn default() -> Self {
        Self::new(10)
    }
}

impl TokenPolicy for ExpiryPolicy {
    fn name(&self) -> &'static str {
        "expiry"
    }

    fn is_valid(&self, token: &Token) -> bool {
        self.is_valid_at(token, Utc::now())
    }
}

/// Claims read from a JWT access token
#[derive(Debug, Serialize, Deserialize)]
pub struct AccessTokenClaims {
    /// Subject (user ID)
    pub sub: String,

    /// Expiration time
    pub exp: usize,

    /// Not before
    #[serde(default)]
    pub nbf: Option<usize>,

    /// Granted scopes
    #[serde(default)]
    pub scope: Vec<String>,
}

/// Access token must be an HS256 JWT with matching issuer and audience
#[derive(Clone)]
pub struct JwtPolicy {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtPolicy {
    pub fn new(config: &JwtConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[&config.audience]);
        validation.set_issuer(&[&config.issuer]);
        validation.validate_nbf = true;
        validation.leeway = 0;

        Self {
            decoding_key: DecodingKey::from_secret(config.secret_key.as_bytes()),
            validation,
        }
    }
}

impl TokenPolicy for JwtPolicy {
    fn name(&self) -> &'static str {
        "jwt"
    }

    fn is_valid(&self, token: &Token) -> bool {
        match decode::<AccessTokenClaims>(&token.access_token, &self.decoding_key, &self.validation) {
            Ok(data) => {
                debug!(subject = %data.claims.sub, "JWT access token accepted");
                true
            }
            Err(e) => {
                debug!(error = %e, "JWT access token rejected");
                false
            }
        }
    }
}

/// Every inner policy must accept the token
#[derive(Clone, Default)]
pub struct AllOf {
    policies: Vec<Arc<dyn TokenPolicy>>,
}

impl AllOf {
    pub fn new(policies: Vec<Arc<dyn TokenPolicy>>) -> Self {
        Self { policies }
    }

    pub fn with(mut self, policy: Arc<dyn TokenPolicy>) -> Self {
        self.policies.push(policy);
        self
    }
}

impl TokenPolicy for AllOf {
    fn name(&self) -> &'static str {
        "all_of"
    }

    fn is_valid(&self, token: &Token) -> bool {
        // An empty conjunction confirms nothing
        !self.policies.is_empty() && self.policies.iter().all(|p| p.is_valid(token))
    }
}
