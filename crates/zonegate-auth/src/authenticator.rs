//! The delegated authenticator the gate forwards to once its own checks pass.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use zonegate_core::error::AppError;
use zonegate_core::traits::client_store::ClientDetailsStore;
use zonegate_core::types::id::{PrincipalId, ZoneId};
use zonegate_core::types::zone::ZoneContext;

use crate::basic::BasicCredentials;
use crate::secret::SecretHasher;

/// A principal that passed delegated authentication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedClient {
    /// The authenticated client id.
    pub client_id: PrincipalId,
    /// The zone it authenticated in.
    pub zone_id: ZoneId,
}

/// Delegated authentication failure.
#[derive(Debug, Error)]
pub enum AuthenticationError {
    /// Unknown principal or wrong secret.
    #[error("Bad credentials")]
    BadCredentials,

    /// The authenticator could not reach a decision.
    #[error(transparent)]
    Unavailable(#[from] AppError),
}

/// Standard authenticate-or-fail contract.
#[async_trait]
pub trait Authenticator: Send + Sync + 'static {
    /// Authenticate the decoded credentials within `zone`.
    async fn authenticate(
        &self,
        zone: &ZoneContext,
        credentials: &BasicCredentials,
    ) -> Result<AuthenticatedClient, AuthenticationError>;
}

/// Verifies the presented secret against the client's stored Argon2id hash.
#[derive(Clone)]
pub struct SecretAuthenticator {
    clients: Arc<dyn ClientDetailsStore>,
    hasher: SecretHasher,
}

impl SecretAuthenticator {
    /// Create an authenticator reading hashes from `clients`.
    pub fn new(clients: Arc<dyn ClientDetailsStore>) -> Self {
        Self {
            clients,
            hasher: SecretHasher::new(),
        }
    }
}

#[async_trait]
impl Authenticator for SecretAuthenticator {
    async fn authenticate(
        &self,
        zone: &ZoneContext,
        credentials: &BasicCredentials,
    ) -> Result<AuthenticatedClient, AuthenticationError> {
        let client = self
            .clients
            .load_by_principal_id(zone.id(), &credentials.principal_id)
            .await?
            .ok_or(AuthenticationError::BadCredentials)?;

        if !self
            .hasher
            .verify_secret(&credentials.secret, &client.secret_hash)?
        {
            return Err(AuthenticationError::BadCredentials);
        }

        Ok(AuthenticatedClient {
            client_id: client.client_id,
            zone_id: client.zone_id,
        })
    }
}
