//! `GatedClient` extractor: the client the gate middleware authenticated.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use zonegate_auth::AuthenticatedClient;

use crate::error::ApiError;

/// Authenticated client available in handlers behind the gate.
///
/// Rejects with 401 when the gate passed the request through because no
/// Basic credentials were presented.
#[derive(Debug, Clone)]
pub struct GatedClient(pub AuthenticatedClient);

impl std::ops::Deref for GatedClient {
    type Target = AuthenticatedClient;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S: Send + Sync> FromRequestParts<S> for GatedClient {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedClient>()
            .cloned()
            .map(GatedClient)
            .ok_or(ApiError::MissingCredentials)
    }
}
