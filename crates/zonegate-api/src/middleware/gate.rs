//! Runs the authentication gate in front of protected routes.

use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;

use zonegate_auth::GateOutcome;
use zonegate_core::error::AppError;
use zonegate_core::types::zone::ZoneContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Evaluates the `Authorization` header through the gate.
///
/// A request without Basic credentials continues untouched. An authenticated
/// request continues with an `AuthenticatedClient` extension. Rejections end
/// the request here.
pub async fn authenticate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let zone = request
        .extensions()
        .get::<ZoneContext>()
        .cloned()
        .ok_or_else(|| AppError::internal("Zone context missing from request"))?;

    let authorization = request
        .headers()
        .get(AUTHORIZATION)
        .map(|v| v.as_bytes().to_vec());

    match state.gate.evaluate(&zone, authorization.as_deref()).await? {
        GateOutcome::PassThrough => {}
        GateOutcome::Authenticated(client) => {
            request.extensions_mut().insert(client);
        }
    }

    Ok(next.run(request).await)
}
