//! Use cases - Application-specific business logic orchestration

use crate::application::settings::Settings;
use crate::application::token_validator::get_valid_token;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use warp::http::HeaderMap;

/// Whether the caller holds a usable token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthStatus {
    Authenticated,
    Unauthorized,
}

impl fmt::Display for AuthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthStatus::Authenticated => write!(f, "authenticated"),
            AuthStatus::Unauthorized => write!(f, "unauthorized"),
        }
    }
}

/// Result of an auth status check
#[derive(Debug)]
pub struct AuthStatusOutcome {
    pub status: AuthStatus,
    /// Headers the session store asked to set on the reply
    pub response_headers: HeaderMap,
}

/// Use case for answering "is this caller signed in?"
pub struct AuthStatusUseCase {
    settings: Arc<Settings>,
}

impl AuthStatusUseCase {
    pub fn new(settings: Arc<Settings>) -> Self {
        Self { settings }
    }

    pub async fn execute(&self, request: &HeaderMap) -> AuthStatusOutcome {
        let mut response_headers = HeaderMap::new();
        let status = match get_valid_token(request, &mut response_headers, &self.settings).await {
            Some(_) => AuthStatus::Authenticated,
            None => AuthStatus::Unauthorized,
        };

        AuthStatusOutcome { status, response_headers }
    }
}
