//! Principal / secret-metadata store contract.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::result::AppResult;
use crate::types::id::{PrincipalId, ZoneId};

/// Stored metadata about a client's secret.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientDetails {
    /// Client identifier.
    pub client_id: PrincipalId,
    /// Zone the client is registered in.
    pub zone_id: ZoneId,
    /// Argon2id PHC string of the client secret.
    pub secret_hash: String,
    /// When the secret was last changed.
    pub last_modified: DateTime<Utc>,
}

/// Read-only lookup of client records.
#[async_trait]
pub trait ClientDetailsStore: Send + Sync + 'static {
    /// Load a client by id within a zone. `Ok(None)` when no such client exists.
    async fn load_by_principal_id(
        &self,
        zone_id: &ZoneId,
        principal_id: &PrincipalId,
    ) -> AppResult<Option<ClientDetails>>;
}
