//! Unit tests for the valid token lookup
//!
//! Drives `get_valid_token` through the mock session store with the same
//! scenario table the dashboard has always been tested against.

use crate::{
    application::{get_valid_token, Settings},
    domain::ExpiryPolicy,
    tests::{
        common::{MockSessionStore, NIL_SESSION},
        config, fixtures,
    },
};
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;
use warp::http::HeaderMap;

struct TokenTestData {
    test_name: &'static str,
    session_name: &'static str,
    session_data: Option<BTreeMap<String, Value>>,
    return_value_none: bool,
}

fn get_valid_token_tests() -> Vec<TokenTestData> {
    vec![
        TokenTestData {
            test_name: "Basic Valid Token Check",
            session_name: "session",
            session_data: Some(fixtures::valid_token_data()),
            return_value_none: false,
        },
        TokenTestData {
            test_name: "Basic Invalid Token Check",
            session_name: "session",
            session_data: Some(fixtures::invalid_token_data()),
            return_value_none: true,
        },
        TokenTestData {
            test_name: "No Session Data Check",
            session_name: "",
            session_data: None,
            return_value_none: true,
        },
        TokenTestData {
            test_name: "Nil Session Check",
            session_name: NIL_SESSION,
            session_data: None,
            return_value_none: true,
        },
        TokenTestData {
            test_name: "Expired Token Check",
            session_name: "session",
            session_data: Some(fixtures::expired_token_data()),
            return_value_none: true,
        },
        TokenTestData {
            test_name: "Malformed Token Check",
            session_name: "session",
            session_data: Some(fixtures::malformed_token_data()),
            return_value_none: true,
        },
        TokenTestData {
            test_name: "Empty Session Check",
            session_name: "session",
            session_data: None,
            return_value_none: true,
        },
    ]
}

fn settings_for(store: MockSessionStore, session_name: &str) -> Settings {
    Settings::new(Arc::new(store), session_name, Arc::new(ExpiryPolicy::default()))
}

#[tokio::test]
async fn test_get_valid_token() {
    config::init();
    let request = HeaderMap::new();

    for test in get_valid_token_tests() {
        let mut store = MockSessionStore::new();
        store.reset_session_data(test.session_data, test.session_name);
        let settings = settings_for(store, test.session_name);

        let mut response = HeaderMap::new();
        let value = get_valid_token(&request, &mut response, &settings).await;

        assert_eq!(
            value.is_none(),
            test.return_value_none,
            "Test {} did not meet expected value. Expected none: {}. Actual none: {}",
            test.test_name,
            test.return_value_none,
            value.is_none()
        );
    }
}

#[tokio::test]
async fn test_valid_token_is_the_stored_one() {
    let mut store = MockSessionStore::new();
    store.reset_session_data(Some(fixtures::valid_token_data()), "session");
    let settings = settings_for(store, "session");

    let token = get_valid_token(&HeaderMap::new(), &mut HeaderMap::new(), &settings)
        .await
        .expect("valid token");
    assert_eq!(token.access_token, "sample");
    assert!(token.expiry.is_some());
}

#[tokio::test]
async fn test_get_valid_token_is_idempotent() {
    for data in [fixtures::valid_token_data(), fixtures::invalid_token_data()] {
        let mut store = MockSessionStore::new();
        store.reset_session_data(Some(data), "session");
        let settings = settings_for(store, "session");
        let request = HeaderMap::new();

        let first = get_valid_token(&request, &mut HeaderMap::new(), &settings).await;
        let second = get_valid_token(&request, &mut HeaderMap::new(), &settings).await;
        assert_eq!(first, second);
    }
}

#[tokio::test]
async fn test_lookup_never_saves_session() {
    let mut store = MockSessionStore::new();
    store.reset_session_data(Some(fixtures::valid_token_data()), "session");
    let settings = settings_for(store.clone(), "session");

    let _ = get_valid_token(&HeaderMap::new(), &mut HeaderMap::new(), &settings).await;
    assert!(store.saved_sessions().await.is_empty());
}
