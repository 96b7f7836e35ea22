//! Zone-scoped credential validation handlers.

use axum::Json;
use axum::extract::{Path, State};

use zonegate_auth::ClientSecretValidator;
use zonegate_core::error::AppError;
use zonegate_core::types::zone::ZoneContext;

use crate::dto::{ApiResponse, ValidateCredentialRequest, ValidationResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /zones/{zone_id}/client-secret/validate
pub async fn validate_client_secret(
    State(state): State<AppState>,
    Path(zone_id): Path<String>,
    Json(req): Json<ValidateCredentialRequest>,
) -> Result<Json<ApiResponse<ValidationResponse>>, ApiError> {
    let zone = lookup_zone(&state, &zone_id)?;
    validate(state.secret_validator.as_ref(), &zone, req)
}

/// POST /zones/{zone_id}/password/validate
pub async fn validate_password(
    State(state): State<AppState>,
    Path(zone_id): Path<String>,
    Json(req): Json<ValidateCredentialRequest>,
) -> Result<Json<ApiResponse<ValidationResponse>>, ApiError> {
    let zone = lookup_zone(&state, &zone_id)?;
    validate(state.password_validator.as_ref(), &zone, req)
}

fn lookup_zone(state: &AppState, zone_id: &str) -> Result<ZoneContext, AppError> {
    state
        .zones
        .context(zone_id)
        .ok_or_else(|| AppError::not_found(format!("Identity zone '{zone_id}' not found")))
}

fn validate(
    validator: &dyn ClientSecretValidator,
    zone: &ZoneContext,
    req: ValidateCredentialRequest,
) -> Result<Json<ApiResponse<ValidationResponse>>, ApiError> {
    validator.validate(zone, req.secret.as_deref())?;
    Ok(Json(ApiResponse::ok(ValidationResponse { valid: true })))
}
