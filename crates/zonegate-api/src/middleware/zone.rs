//! Identity zone resolution.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use zonegate_core::error::AppError;
use zonegate_core::types::id::ZoneId;

use crate::error::ApiError;
use crate::state::AppState;

/// Header naming the zone a request targets. Absent means the default zone.
pub const ZONE_HEADER: &str = "x-identity-zone-id";

/// Resolves the request's zone once and stores it as a `ZoneContext`
/// extension for everything downstream.
pub async fn resolve_zone(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let zone_id = request
        .headers()
        .get(ZONE_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(ZoneId::DEFAULT)
        .to_string();

    let zone = state
        .zones
        .context(&zone_id)
        .ok_or_else(|| AppError::not_found(format!("Identity zone '{zone_id}' not found")))?;

    request.extensions_mut().insert(zone);
    Ok(next.run(request).await)
}
