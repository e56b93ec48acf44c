//! Integration tests for the HTTP surface
//!
//! Exercises `/v2/authstatus` end to end with a real signed-cookie store.

use crate::{
    application::Settings,
    config::AppConfig,
    domain::{ExpiryPolicy, Session, SessionStore, Token},
    infrastructure::{
        adapters::{cookies::CookieOptions, CookieSessionStore},
        http::HttpServer,
    },
    shared::error::AppError,
    tests::{config, TestResult},
};
use chrono::{Duration, Utc};
use serde_json::Value;
use std::sync::Arc;
use warp::http::{header::SET_COOKIE, HeaderMap, StatusCode};

const SESSION_NAME: &str = "session";

fn cookie_store() -> CookieSessionStore {
    let test_config = config::test_config();
    CookieSessionStore::new(
        &test_config.session.secret_key,
        CookieOptions::from_session_config(&test_config.session),
    )
}

fn server() -> HttpServer {
    let settings = Settings::new(
        Arc::new(cookie_store()),
        SESSION_NAME,
        Arc::new(ExpiryPolicy::default()),
    );
    HttpServer::with_settings(config::test_config(), Arc::new(settings))
}

/// Build a `name=value` cookie pair the way a browser would send it back
async fn session_cookie(token: Token) -> TestResult<String> {
    let mut session = Session::new(SESSION_NAME);
    session.token = Some(token);

    let mut response = HeaderMap::new();
    cookie_store().save(&mut response, &session).await?;

    let set_cookie = response.get(SET_COOKIE).ok_or("store set no cookie")?.to_str()?;
    let pair = set_cookie.split(';').next().ok_or("empty Set-Cookie")?;
    Ok(pair.to_string())
}

#[tokio::test]
async fn test_auth_status_authenticated() -> TestResult<()> {
    config::init();
    let cookie = session_cookie(Token::new("sample").with_expiry(Utc::now() + Duration::hours(10))).await?;

    let res = warp::test::request()
        .method("GET")
        .path("/v2/authstatus")
        .header("cookie", cookie)
        .reply(&server().routes())
        .await;

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = serde_json::from_slice(res.body())?;
    assert_eq!(body["status"], "authenticated");
    assert_eq!(res.headers()["cache-control"], "no-store");
    Ok(())
}

#[tokio::test]
async fn test_auth_status_without_cookie() -> TestResult<()> {
    let res = warp::test::request()
        .method("GET")
        .path("/v2/authstatus")
        .reply(&server().routes())
        .await;

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    let body: Value = serde_json::from_slice(res.body())?;
    assert_eq!(body["status"], "unauthorized");
    Ok(())
}

#[tokio::test]
async fn test_auth_status_expired_token() -> TestResult<()> {
    let cookie = session_cookie(Token::new("sample").with_expiry(Utc::now() - Duration::minutes(5))).await?;

    let res = warp::test::request()
        .method("GET")
        .path("/v2/authstatus")
        .header("cookie", cookie)
        .reply(&server().routes())
        .await;

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn test_auth_status_tampered_cookie() -> TestResult<()> {
    let cookie = session_cookie(Token::new("sample")).await?;
    // Flip the last hex digit of the signature
    let mut tampered = cookie.clone();
    let last = tampered.pop().ok_or("empty cookie")?;
    tampered.push(if last == '0' { '1' } else { '0' });

    let res = warp::test::request()
        .method("GET")
        .path("/v2/authstatus")
        .header("cookie", tampered)
        .reply(&server().routes())
        .await;

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn test_auth_status_cookie_from_other_key() -> TestResult<()> {
    let foreign = CookieSessionStore::new(
        "some-other-deployment-secret-of-32-chars",
        CookieOptions::default(),
    );
    let mut session = Session::new(SESSION_NAME);
    session.token = Some(Token::new("sample"));
    let mut response = HeaderMap::new();
    foreign.save(&mut response, &session).await?;
    let pair = response[SET_COOKIE].to_str()?.split(';').next().ok_or("empty Set-Cookie")?.to_string();

    let res = warp::test::request()
        .method("GET")
        .path("/v2/authstatus")
        .header("cookie", pair)
        .reply(&server().routes())
        .await;

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn test_health_endpoint() -> TestResult<()> {
    let res = warp::test::request()
        .method("GET")
        .path("/health")
        .reply(&server().routes())
        .await;

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = serde_json::from_slice(res.body())?;
    assert_eq!(body["status"], "healthy");
    Ok(())
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let res = warp::test::request()
        .method("GET")
        .path("/v2/nothing-here")
        .reply(&server().routes())
        .await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_auth_status_rejects_post() {
    let res = warp::test::request()
        .method("POST")
        .path("/v2/authstatus")
        .reply(&server().routes())
        .await;

    assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_server_refuses_placeholder_secret() {
    let result = HttpServer::new(AppConfig::default()).await;
    assert!(matches!(result, Err(AppError::Validation(_))));
}

#[tokio::test]
async fn test_server_from_config_authenticates_own_cookie() -> TestResult<()> {
    let server = HttpServer::new(config::test_config()).await?;
    let cookie = session_cookie(Token::new("sample")).await?;

    let res = warp::test::request()
        .method("GET")
        .path("/v2/authstatus")
        .header("cookie", cookie)
        .reply(&server.routes())
        .await;

    assert_eq!(res.status(), StatusCode::OK);
    Ok(())
}
