//! Integration tests for the authentication gate in front of `/oauth/token`.

mod helpers;

use axum::body::Body;
use http::header::{AUTHORIZATION, WWW_AUTHENTICATE};
use http::{HeaderValue, Request, StatusCode};

use helpers::{CLIENT_SECRET, TestApp, date};
use zonegate_auth::encode_basic_credentials;

#[tokio::test]
async fn test_valid_credentials_authenticate() {
    let app = TestApp::new();
    let auth = encode_basic_credentials("app", CLIENT_SECRET);

    let response = app.token(Some(&auth), None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["client_id"], "app");
    assert_eq!(response.body["data"]["zone_id"], "uaa");
    assert!(response.headers.contains_key("x-request-id"));
}

#[tokio::test]
async fn test_zone_header_selects_zone() {
    let app = TestApp::new();
    let auth = encode_basic_credentials("app", CLIENT_SECRET);

    let response = app.token(Some(&auth), Some("acme")).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["zone_id"], "acme");
}

#[tokio::test]
async fn test_missing_credentials_are_challenged() {
    let app = TestApp::new();

    let response = app.token(None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "UNAUTHORIZED");
    assert!(response.headers.contains_key(WWW_AUTHENTICATE));
}

#[tokio::test]
async fn test_other_scheme_is_not_an_attempt() {
    let app = TestApp::new();

    let response = app.token(Some("Bearer abc.def.ghi"), None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_malformed_basic_token() {
    let app = TestApp::new();

    let response = app.token(Some("Basic %%%"), None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "MALFORMED_CREDENTIALS");
    assert_eq!(
        response.body["message"],
        "Failed to decode basic authentication token"
    );
}

#[tokio::test]
async fn test_non_ascii_basic_token_is_malformed() {
    let app = TestApp::new();
    let request = Request::builder()
        .method("POST")
        .uri("/oauth/token")
        .header(
            AUTHORIZATION,
            HeaderValue::from_bytes(b"Basic \xff\xfe").expect("opaque header value"),
        )
        .body(Body::empty())
        .expect("Failed to build request");

    let response = app.send(request).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "MALFORMED_CREDENTIALS");
    assert!(response.headers.contains_key(WWW_AUTHENTICATE));
}

#[tokio::test]
async fn test_wrong_secret_is_bad_credentials() {
    let app = TestApp::new();
    let auth = encode_basic_credentials("app", "not-the-secret");

    let response = app.token(Some(&auth), None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "BAD_CREDENTIALS");
    assert!(response.headers.contains_key(WWW_AUTHENTICATE));
}

#[tokio::test]
async fn test_unknown_client_is_bad_credentials() {
    let app = TestApp::new();
    let auth = encode_basic_credentials("ghost", CLIENT_SECRET);

    let response = app.token(Some(&auth), None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "BAD_CREDENTIALS");
}

#[tokio::test]
async fn test_locked_out_client_is_rejected_before_authentication() {
    let app = TestApp::new();
    app.seed_failures("app", 5);

    // Even the correct secret is refused while locked.
    let auth = encode_basic_credentials("app", CLIENT_SECRET);
    let response = app.token(Some(&auth), None).await;

    assert_eq!(response.status, StatusCode::LOCKED);
    assert_eq!(response.body["error"], "ACCOUNT_LOCKED");
    assert_eq!(
        response.body["message"],
        "Client app has 5 failed authentications within the last checking period."
    );
    assert_eq!(response.body["details"]["failure_count"], 5);
    assert!(!response.headers.contains_key(WWW_AUTHENTICATE));
}

#[tokio::test]
async fn test_failures_below_threshold_do_not_lock() {
    let app = TestApp::new();
    app.seed_failures("app", 4);

    let auth = encode_basic_credentials("app", CLIENT_SECRET);
    let response = app.token(Some(&auth), None).await;

    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_secret_within_expiry_window_authenticates() {
    let app = TestApp::at(date(2016, 6, 30));
    let auth = encode_basic_credentials("app", CLIENT_SECRET);

    let response = app.token(Some(&auth), Some("acme")).await;

    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_expired_secret_is_rejected() {
    let app = TestApp::at(date(2016, 7, 2));
    let auth = encode_basic_credentials("app", CLIENT_SECRET);

    let response = app.token(Some(&auth), Some("acme")).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "CREDENTIAL_EXPIRED");
    assert_eq!(
        response.body["message"],
        "Your current secret has expired. Please reset your secret."
    );
}

#[tokio::test]
async fn test_default_zone_never_expires_secrets() {
    let app = TestApp::at(date(2030, 1, 1));
    let auth = encode_basic_credentials("app", CLIENT_SECRET);

    let response = app.token(Some(&auth), None).await;

    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_unknown_zone_is_not_found() {
    let app = TestApp::new();
    let auth = encode_basic_credentials("app", CLIENT_SECRET);

    let response = app.token(Some(&auth), Some("nowhere")).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_health_is_open() {
    let app = TestApp::new();

    let response = app.request("GET", "/healthz", None, &[]).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "ok");
    assert_eq!(response.body["data"]["zones"], 3);
}
