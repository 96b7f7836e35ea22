//! Maps domain errors to HTTP responses.

use axum::Json;
use axum::http::header::WWW_AUTHENTICATE;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use serde_json::json;

use zonegate_auth::{GateError, InvalidSecretError};
use zonegate_core::error::{AppError, ErrorKind};

/// Challenge sent with every 401.
pub const BASIC_CHALLENGE: &str = "Basic realm=\"zonegate\"";

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
    /// Optional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Every error a handler or middleware can return.
#[derive(Debug)]
pub enum ApiError {
    /// Configuration, lookup, or collaborator failure.
    App(AppError),
    /// The authentication gate rejected the attempt.
    Gate(GateError),
    /// A candidate credential violated the zone's policy.
    InvalidSecret(InvalidSecretError),
    /// A protected route was reached without Basic credentials.
    MissingCredentials,
}

impl From<AppError> for ApiError {
    fn from(e: AppError) -> Self {
        Self::App(e)
    }
}

impl From<GateError> for ApiError {
    fn from(e: GateError) -> Self {
        Self::Gate(e)
    }
}

impl From<InvalidSecretError> for ApiError {
    fn from(e: InvalidSecretError) -> Self {
        Self::InvalidSecret(e)
    }
}

impl ApiError {
    fn parts(&self) -> (StatusCode, &'static str, String, Option<serde_json::Value>) {
        match self {
            Self::App(e) => {
                let (status, code) = match e.kind {
                    ErrorKind::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND"),
                    ErrorKind::ExternalService | ErrorKind::ServiceUnavailable => {
                        (StatusCode::SERVICE_UNAVAILABLE, "SERVICE_UNAVAILABLE")
                    }
                    ErrorKind::Internal | ErrorKind::Configuration => {
                        tracing::error!(error = %e, "Internal server error");
                        (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
                    }
                };
                (status, code, e.message.clone(), None)
            }
            Self::Gate(e) => match e {
                GateError::MalformedCredentials(_) => (
                    StatusCode::UNAUTHORIZED,
                    "MALFORMED_CREDENTIALS",
                    e.to_string(),
                    None,
                ),
                GateError::BadCredentials { .. } => (
                    StatusCode::UNAUTHORIZED,
                    "BAD_CREDENTIALS",
                    e.to_string(),
                    None,
                ),
                GateError::LockedOut { failure_count, .. } => (
                    StatusCode::LOCKED,
                    "ACCOUNT_LOCKED",
                    e.to_string(),
                    Some(json!({ "failure_count": failure_count })),
                ),
                GateError::CredentialExpired { expired_at, .. } => (
                    StatusCode::UNAUTHORIZED,
                    "CREDENTIAL_EXPIRED",
                    e.to_string(),
                    Some(json!({ "expired_at": expired_at })),
                ),
                GateError::LockoutUnavailable(_)
                | GateError::PrincipalLookup(_)
                | GateError::AuthenticatorUnavailable(_) => {
                    tracing::error!(error = %e, "Authentication collaborator failed");
                    (
                        StatusCode::SERVICE_UNAVAILABLE,
                        "SERVICE_UNAVAILABLE",
                        "Authentication is temporarily unavailable".to_string(),
                        None,
                    )
                }
            },
            Self::InvalidSecret(e) => (
                StatusCode::from_u16(e.status()).unwrap_or(StatusCode::BAD_REQUEST),
                "INVALID_SECRET",
                e.to_string(),
                Some(json!({ "messages": e.messages() })),
            ),
            Self::MissingCredentials => (
                StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED",
                "Full authentication is required to access this resource".to_string(),
                None,
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message, details) = self.parts();

        let body = ApiErrorResponse {
            error: error_code.to_string(),
            message,
            details,
        };

        let mut response = (status, Json(body)).into_response();
        if status == StatusCode::UNAUTHORIZED {
            response
                .headers_mut()
                .insert(WWW_AUTHENTICATE, HeaderValue::from_static(BASIC_CHALLENGE));
        }
        response
    }
}
