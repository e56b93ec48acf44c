//! Settings handed to the token validator

use crate::config::app_config::{AppConfig, TokenConfig, TokenPolicyKind};
use crate::config::validation::ConfigValidator;
use crate::domain::{AllOf, ExpiryPolicy, JwtPolicy, SessionStore, TokenPolicy};
use crate::infrastructure::adapters::build_session_store;
use crate::shared::error::{AppError, AppResult};
use std::sync::Arc;

/// Session store, session name and validity rule used to find a caller's token
#[derive(Clone)]
pub struct Settings {
    pub sessions: Arc<dyn SessionStore>,
    pub session_name: String,
    pub policy: Arc<dyn TokenPolicy>,
}

impl Settings {
    pub fn new(
        sessions: Arc<dyn SessionStore>,
        session_name: impl Into<String>,
        policy: Arc<dyn TokenPolicy>,
    ) -> Self {
        Self {
            sessions,
            session_name: session_name.into(),
            policy,
        }
    }

    /// Wire the configured store and policy.
    ///
    /// Refuses configurations whose signing secrets are placeholders.
    pub async fn from_config(config: &AppConfig) -> AppResult<Self> {
        ConfigValidator::validate_config(config)?;
        let policy = build_policy(&config.token)?;
        let sessions = build_session_store(&config.session).await;

        Ok(Self::new(sessions, config.session.name.clone(), policy))
    }
}

/// Build the validity rule selected by configuration.
///
/// The JWT rule is always paired with the expiry rule.
pub fn build_policy(config: &TokenConfig) -> AppResult<Arc<dyn TokenPolicy>> {
    let expiry: Arc<dyn TokenPolicy> = Arc::new(ExpiryPolicy::new(config.expiry_delta_seconds));

    match config.policy {
        TokenPolicyKind::Expiry => Ok(expiry),
        TokenPolicyKind::Jwt => {
            let jwt = config.jwt.as_ref().ok_or_else(|| {
                AppError::Config("Token policy 'jwt' requires a [token.jwt] section".to_string())
            })?;
            Ok(Arc::new(AllOf::new(vec![expiry, Arc::new(JwtPolicy::new(jwt))])))
        }
    }
}
