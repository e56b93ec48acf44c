//! HTTP responses module
//!
//! This module contains HTTP response formatting and rejection handling.

use crate::application::use_cases::{AuthStatus, AuthStatusOutcome};
use crate::shared::error::AppError;
use std::convert::Infallible;
use warp::http::header::CACHE_CONTROL;
use warp::http::{HeaderValue, StatusCode};
use warp::reply::Response;
use warp::{Rejection, Reply};

/// Response formatter for HTTP responses
pub struct ResponseFormatter;

impl ResponseFormatter {
    /// `200 {"status":"authenticated"}` or `401 {"status":"unauthorized"}`.
    ///
    /// Headers set by the session store are carried over; the reply is never cached.
    pub fn auth_status(outcome: AuthStatusOutcome) -> Response {
        let code = match outcome.status {
            AuthStatus::Authenticated => StatusCode::OK,
            AuthStatus::Unauthorized => StatusCode::UNAUTHORIZED,
        };

        let body = warp::reply::json(&serde_json::json!({ "status": outcome.status }));
        let mut response = warp::reply::with_status(body, code).into_response();
        response.headers_mut().extend(outcome.response_headers);
        response.headers_mut().insert(CACHE_CONTROL, HeaderValue::from_static("no-store"));
        response
    }

    /// Format an application error
    pub fn from_app_error(error: &AppError) -> Response {
        warp::reply::with_status(warp::reply::json(&error.to_json()), error.http_status_code()).into_response()
    }

    fn error_body(code: StatusCode, message: &str) -> Response {
        let body = serde_json::json!({
            "error": {
                "code": code.as_u16(),
                "message": message
            }
        });
        warp::reply::with_status(warp::reply::json(&body), code).into_response()
    }
}

/// Turn rejections into JSON error replies
pub async fn handle_rejection(rejection: Rejection) -> Result<Response, Infallible> {
    if rejection.is_not_found() {
        return Ok(ResponseFormatter::error_body(StatusCode::NOT_FOUND, "Not found"));
    }

    if let Some(error) = rejection.find::<AppError>() {
        tracing::error!(error = %error, "Request failed");
        return Ok(ResponseFormatter::from_app_error(error));
    }

    if rejection.find::<warp::reject::MethodNotAllowed>().is_some() {
        return Ok(ResponseFormatter::error_body(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed"));
    }

    tracing::warn!("Unhandled rejection: {:?}", rejection);
    Ok(ResponseFormatter::error_body(StatusCode::INTERNAL_SERVER_ERROR, "Internal error"))
}
