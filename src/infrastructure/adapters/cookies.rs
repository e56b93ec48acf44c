//! Cookie header helpers shared by the session stores

use crate::config::app_config::SessionConfig;
use crate::config::validation::ConfigValidator;
use crate::shared::error::{AppError, AppResult};
use cookie::{time::Duration, Cookie, SameSite};
use headers::HeaderMapExt;
use warp::http::header::SET_COOKIE;
use warp::http::{HeaderMap, HeaderValue};

/// Attributes written with every session cookie
#[derive(Debug, Clone)]
pub struct CookieOptions {
    pub max_age_seconds: u64,
    pub secure: bool,
}

impl CookieOptions {
    pub fn from_session_config(config: &SessionConfig) -> Self {
        Self {
            max_age_seconds: config.max_age_seconds,
            secure: config.secure_cookies,
        }
    }
}

impl Default for CookieOptions {
    fn default() -> Self {
        Self {
            max_age_seconds: 3600 * 8,
            secure: true,
        }
    }
}

/// First value of cookie `name` across all `Cookie` headers
pub fn read_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    let cookies = headers.typed_get::<headers::Cookie>()?;
    cookies.get(name).map(|value| value.trim_matches('"').to_string())
}

/// Append a `Set-Cookie` header for `name`
pub fn set_cookie(response: &mut HeaderMap, name: &str, value: &str, options: &CookieOptions) -> AppResult<()> {
    if !ConfigValidator::is_valid_session_name(name) {
        return Err(AppError::Session(format!("Invalid cookie name: {:?}", name)));
    }

    let max_age = i64::try_from(options.max_age_seconds).unwrap_or(i64::MAX);
    let cookie = Cookie::build((name, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(Duration::seconds(max_age))
        .secure(options.secure)
        .build();

    let header = HeaderValue::from_str(&cookie.to_string())
        .map_err(|e| AppError::Session(format!("Invalid cookie for {}: {}", name, e)))?;
    response.append(SET_COOKIE, header);

    Ok(())
}
