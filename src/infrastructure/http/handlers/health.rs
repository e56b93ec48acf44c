//! Health check handler module

use crate::config::AppConfig;
use warp::Reply;

/// Handle health check requests
pub async fn handle_health_request(config: AppConfig) -> Result<impl Reply, warp::Rejection> {
    let response = serde_json::json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "session_backend": config.session.backend,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    Ok(warp::reply::json(&response))
}
