//! Session store contract

use crate::domain::session::Session;
use crate::shared::error::AppResult;
use async_trait::async_trait;
use warp::http::HeaderMap;

/// A named session backend.
///
/// `load` is fail-soft: an unknown, empty or invalid name yields an empty
/// session, and `None` is reserved for a session the backend refuses to hand
/// out (tampered, unreadable, backend unavailable). It never errors and never
/// touches the request.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Load the session called `name` carried by `request`.
    async fn load(&self, request: &HeaderMap, name: &str) -> Option<Session>;

    /// Persist `session` and add the headers that carry it to `response`.
    async fn save(&self, response: &mut HeaderMap, session: &Session) -> AppResult<()>;
}
