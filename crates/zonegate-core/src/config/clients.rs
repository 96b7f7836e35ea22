//! Seed client records for the bundled in-memory client store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::traits::client_store::ClientDetails;
use crate::types::id::{PrincipalId, ZoneId};

/// One client registration as written in configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientEntry {
    /// Client identifier.
    pub client_id: PrincipalId,
    /// Zone the client belongs to.
    #[serde(default = "ZoneId::default_zone")]
    pub zone_id: ZoneId,
    /// Argon2id PHC string of the secret.
    pub secret_hash: String,
    /// RFC 3339 timestamp of the last secret change.
    pub last_modified: DateTime<Utc>,
}

impl From<ClientEntry> for ClientDetails {
    fn from(entry: ClientEntry) -> Self {
        Self {
            client_id: entry.client_id,
            zone_id: entry.zone_id,
            secret_hash: entry.secret_hash,
            last_modified: entry.last_modified,
        }
    }
}
