//! Valid token lookup
//!
//! Every way of not having a usable token (no session name, nil session, no
//! token in the session, token rejected by policy) ends in `None`. The reason
//! is only logged.

use crate::application::settings::Settings;
use crate::domain::Token;
use crate::shared::logging::LoggingUtils;
use tracing::debug;
use warp::http::HeaderMap;

/// Return the caller's session token if it passes the configured policy.
///
/// `response` is where a store would put refreshed session headers; the
/// lookup itself never writes to it.
pub async fn get_valid_token(
    request: &HeaderMap,
    _response: &mut HeaderMap,
    settings: &Settings,
) -> Option<Token> {
    let name = settings.session_name.as_str();
    if name.is_empty() {
        LoggingUtils::log_token_rejected(name, "no session name configured");
        return None;
    }

    let Some(session) = settings.sessions.load(request, name).await else {
        LoggingUtils::log_token_rejected(name, "nil session");
        return None;
    };

    let Some(token) = session.token else {
        LoggingUtils::log_token_rejected(name, "session has no token");
        return None;
    };

    if !settings.policy.is_valid(&token) {
        LoggingUtils::log_token_rejected(name, settings.policy.name());
        return None;
    }

    debug!(
        session_name = %name,
        token = %LoggingUtils::fingerprint(&token.access_token),
        "Valid token found in session"
    );
    Some(token)
}
