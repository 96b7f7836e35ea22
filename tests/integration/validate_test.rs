//! Integration tests for zone-aware credential validation.

mod helpers;

use http::StatusCode;
use serde_json::json;

use helpers::TestApp;

async fn validate_secret(
    app: &TestApp,
    zone: &str,
    body: serde_json::Value,
) -> helpers::TestResponse {
    app.request(
        "POST",
        &format!("/zones/{zone}/client-secret/validate"),
        Some(body),
        &[],
    )
    .await
}

#[tokio::test]
async fn test_compliant_secret_is_valid() {
    let app = TestApp::new();

    let response = validate_secret(&app, "acme", json!({ "secret": "Secr3t!pass" })).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["valid"], true);
}

#[tokio::test]
async fn test_every_violation_is_reported() {
    let app = TestApp::new();

    let response = validate_secret(&app, "acme", json!({ "secret": "abc" })).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "INVALID_SECRET");

    let messages: Vec<&str> = response.body["details"]["messages"]
        .as_array()
        .expect("messages array")
        .iter()
        .filter_map(|m| m.as_str())
        .collect();
    assert_eq!(
        messages,
        vec![
            "Client secret must be at least 8 characters in length.",
            "Client secret must contain at least 1 uppercase characters.",
            "Client secret must contain at least 1 digit characters.",
            "Client secret must contain at least 1 special characters.",
        ]
    );
    assert_eq!(response.body["message"], messages.join(","));
}

#[tokio::test]
async fn test_too_long_secret() {
    let app = TestApp::new();

    let response = validate_secret(
        &app,
        "acme",
        json!({ "secret": "Aa1!aaaaaaaaaaaaaaaaaaaaaaaa" }),
    )
    .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body["message"],
        "Client secret must be no more than 20 characters in length."
    );
}

#[tokio::test]
async fn test_null_secret_is_a_violation() {
    let app = TestApp::new();

    let explicit_null = validate_secret(&app, "acme", json!({ "secret": null })).await;
    assert_eq!(explicit_null.status, StatusCode::BAD_REQUEST);
    assert_eq!(explicit_null.body["message"], "Client secret cannot be null");

    let omitted = validate_secret(&app, "acme", json!({})).await;
    assert_eq!(omitted.status, StatusCode::BAD_REQUEST);
    assert_eq!(omitted.body["message"], "Client secret cannot be null");
}

#[tokio::test]
async fn test_unconfigured_zone_uses_global_default() {
    let app = TestApp::new();

    // The default zone has no override; the global default accepts anything
    // up to 255 characters.
    let response = validate_secret(&app, "uaa", json!({ "secret": "x" })).await;
    assert_eq!(response.status, StatusCode::OK);

    let empty = validate_secret(&app, "uaa", json!({ "secret": "" })).await;
    assert_eq!(empty.status, StatusCode::OK);

    let too_long = validate_secret(&app, "uaa", json!({ "secret": "a".repeat(256) })).await;
    assert_eq!(too_long.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_configured_permissive_zone_accepts_anything() {
    let app = TestApp::new();

    let response = validate_secret(&app, "lenient", json!({ "secret": "" })).await;

    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_password_validation_uses_password_policy() {
    let app = TestApp::new();

    // `acme` only overrides the client secret policy.
    let response = app
        .request(
            "POST",
            "/zones/acme/password/validate",
            Some(json!({ "secret": "abc" })),
            &[],
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let null = app
        .request(
            "POST",
            "/zones/acme/password/validate",
            Some(json!({ "secret": null })),
            &[],
        )
        .await;
    assert_eq!(null.status, StatusCode::BAD_REQUEST);
    assert_eq!(null.body["message"], "Password cannot be null");
}

#[tokio::test]
async fn test_unknown_zone_is_not_found() {
    let app = TestApp::new();

    let response = validate_secret(&app, "nowhere", json!({ "secret": "x" })).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
