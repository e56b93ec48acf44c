//! Infrastructure adapters module
//!
//! This module contains the concrete session store backends.

pub mod cookie_store;
pub mod cookies;
pub mod server_store;

pub use cookie_store::CookieSessionStore;
pub use cookies::CookieOptions;
pub use server_store::ServerSessionStore;

use crate::config::app_config::{SessionBackend, SessionConfig};
use crate::domain::SessionStore;
use std::sync::Arc;
use tracing::info;

/// Build the session store selected by configuration
pub async fn build_session_store(config: &SessionConfig) -> Arc<dyn SessionStore> {
    let options = CookieOptions::from_session_config(config);

    match config.backend {
        SessionBackend::Cookie => {
            info!("Using signed cookie session store");
            Arc::new(CookieSessionStore::new(&config.secret_key, options))
        }
        SessionBackend::Server => {
            info!("Using server-side session store");
            Arc::new(ServerSessionStore::new(config.redis_url.as_deref(), options).await)
        }
    }
}
