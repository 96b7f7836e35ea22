//! Token endpoint guarded by the authentication gate.

use axum::Json;

use crate::dto::{ApiResponse, TokenResponse};
use crate::error::ApiError;
use crate::extractors::GatedClient;

/// POST /oauth/token
///
/// Only reports which client the gate authenticated; issuing tokens is left
/// to whatever sits behind this service.
pub async fn token(client: GatedClient) -> Result<Json<ApiResponse<TokenResponse>>, ApiError> {
    tracing::info!(
        client_id = %client.client_id,
        zone = %client.zone_id,
        "Client authenticated"
    );

    let GatedClient(client) = client;
    Ok(Json(ApiResponse::ok(TokenResponse {
        client_id: client.client_id,
        zone_id: client.zone_id,
    })))
}
