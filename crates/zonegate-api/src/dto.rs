//! Request and response DTOs.

use serde::{Deserialize, Serialize};

use zonegate_core::types::id::{PrincipalId, ZoneId};

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Body of the credential validation endpoints.
///
/// `secret` may be omitted or `null`; that is reported as a violation, not a
/// malformed request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ValidateCredentialRequest {
    #[serde(default)]
    pub secret: Option<String>,
}

/// A candidate credential satisfied the zone's policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResponse {
    pub valid: bool,
}

/// The client the gate authenticated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub client_id: PrincipalId,
    pub zone_id: ZoneId,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub zones: usize,
}
