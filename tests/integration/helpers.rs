//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use chrono::{DateTime, TimeZone, Utc};
use http::{HeaderMap, Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use zonegate_api::{AppState, MemoryCollaborators};
use zonegate_auth::SecretHasher;
use zonegate_core::config::{AppConfig, ClientEntry};
use zonegate_core::traits::clock::FixedClock;
use zonegate_core::types::id::{PrincipalId, ZoneId};

/// Secret every seeded client is registered with.
pub const CLIENT_SECRET: &str = "appclientsecret";

/// Zones used by the tests: `acme` enforces complexity and six-month secret
/// expiry; `lenient` is configured but requires nothing.
const TEST_CONFIG: &str = r#"
[[zones]]
id = "acme"
subdomain = "acme"

[zones.config.client_secret_policy]
min_length = 8
max_length = 20
require_upper_case_character = 1
require_lower_case_character = 1
require_digit = 1
require_special_character = 1
expire_secret_in_months = 6

[[zones]]
id = "lenient"
subdomain = "lenient"

[zones.config.client_secret_policy]
min_length = 0
max_length = 255
require_upper_case_character = 0
require_lower_case_character = 0
require_digit = 0
require_special_character = 0
expire_secret_in_months = 0
"#;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// In-memory collaborators behind the router
    pub collaborators: MemoryCollaborators,
    /// The instant the app's clock is frozen at
    pub now: DateTime<Utc>,
}

/// Response captured from the router
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

/// Midnight UTC on the given date.
pub fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .expect("valid date")
}

impl TestApp {
    /// App with `app` registered in the default zone and in `acme`, both
    /// secrets last changed on 2016-01-01, and the clock at `now`.
    pub fn at(now: DateTime<Utc>) -> Self {
        let mut config = AppConfig::from_toml(TEST_CONFIG).expect("Failed to parse test config");

        let hash = SecretHasher::new()
            .hash_secret(CLIENT_SECRET)
            .expect("Failed to hash secret");

        for zone in [ZoneId::DEFAULT, "acme"] {
            config.clients.push(ClientEntry {
                client_id: PrincipalId::new("app"),
                zone_id: ZoneId::new(zone),
                secret_hash: hash.clone(),
                last_modified: date(2016, 1, 1),
            });
        }

        let (state, collaborators) = AppState::in_memory(config, Arc::new(FixedClock(now)));

        Self {
            router: zonegate_api::router::build_router(state),
            collaborators,
            now,
        }
    }

    /// App with the clock shortly after the seeded secrets were set.
    pub fn new() -> Self {
        Self::at(date(2016, 2, 1))
    }

    /// Record `count` recent failed authentications for `principal`.
    pub fn seed_failures(&self, principal: &str, count: usize) {
        let principal = PrincipalId::new(principal);
        for minutes in 1..=count {
            let at = self.now - chrono::Duration::minutes(minutes as i64);
            self.collaborators.lockout.record_failure_at(&principal, at);
        }
    }

    /// Make a request against the router
    pub async fn request(
        &self,
        method: &str,
        uri: &str,
        body: Option<Value>,
        headers: &[(&str, &str)],
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);

        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }

        let body = match body {
            Some(json) => {
                builder = builder.header("content-type", "application/json");
                Body::from(serde_json::to_vec(&json).expect("Failed to encode body"))
            }
            None => Body::empty(),
        };

        let request = builder.body(body).expect("Failed to build request");

        self.send(request).await
    }

    /// Send a prebuilt request through the router
    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to execute request");

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");

        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        TestResponse {
            status,
            headers,
            body,
        }
    }

    /// POST /oauth/token with the given `Authorization` value and zone
    pub async fn token(&self, authorization: Option<&str>, zone: Option<&str>) -> TestResponse {
        let mut headers = Vec::new();
        if let Some(value) = authorization {
            headers.push(("authorization", value));
        }
        if let Some(value) = zone {
            headers.push(("x-identity-zone-id", value));
        }
        self.request("POST", "/oauth/token", None, &headers).await
    }
}
