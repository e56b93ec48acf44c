//! HTTP server implementation
//!
//! TLS termination is expected to happen at the reverse proxy in front of the
//! dashboard; this server speaks plain HTTP.

use crate::{
    application::{settings::Settings, use_cases::AuthStatusUseCase},
    config::AppConfig,
    infrastructure::http::routes::RouteBuilder,
    shared::error::{AppError, AppResult},
};
use std::sync::Arc;
use tracing::{info, instrument};
use warp::{Filter, Reply};

/// HTTP server exposing the auth status endpoint
pub struct HttpServer {
    config: AppConfig,
    auth_status_use_case: Arc<AuthStatusUseCase>,
}

impl HttpServer {
    /// Create a new HTTP server instance
    pub async fn new(config: AppConfig) -> AppResult<Self> {
        let settings = Arc::new(Settings::from_config(&config).await?);
        info!(
            session_name = %settings.session_name,
            policy = settings.policy.name(),
            "Token validation configured"
        );

        Ok(Self::with_settings(config, settings))
    }

    /// Create a server around already-wired settings
    pub fn with_settings(config: AppConfig, settings: Arc<Settings>) -> Self {
        Self {
            config,
            auth_status_use_case: Arc::new(AuthStatusUseCase::new(settings)),
        }
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Run the HTTP server
    #[instrument(skip(self))]
    pub async fn run(self) -> AppResult<()> {
        let addr: std::net::SocketAddr = self.config.server_address().parse()
            .map_err(|e| AppError::Config(format!("Invalid server address: {}", e)))?;

        info!("Starting HTTP server on {}", addr);

        warp::serve(self.routes())
            .run(addr)
            .await;

        Ok(())
    }

    /// Create the application routes
    pub fn routes(self) -> impl Filter<Extract = (impl Reply,), Error = std::convert::Infallible> + Clone {
        RouteBuilder::build_routes(self.config, self.auth_status_use_case)
    }
}
