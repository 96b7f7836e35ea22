//! Identity zone (tenant) model and the request-scoped zone context.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::id::ZoneId;
use super::policy::{ClientSecretPolicy, PasswordPolicy};

/// Per-zone configuration: at most one policy override per credential kind.
///
/// A policy left at its default carries the unconfigured sentinel and defers
/// to the process-wide default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneConfig {
    /// Client secret policy override.
    #[serde(default)]
    pub client_secret_policy: ClientSecretPolicy,
    /// Password policy override.
    #[serde(default)]
    pub password_policy: PasswordPolicy,
}

/// An isolated configuration domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityZone {
    /// Zone identifier.
    pub id: ZoneId,
    /// Subdomain the zone is served under (empty for the default zone).
    #[serde(default)]
    pub subdomain: String,
    /// Zone configuration.
    #[serde(default)]
    pub config: ZoneConfig,
}

impl IdentityZone {
    /// Create a zone with the given id, subdomain and configuration.
    pub fn new(id: ZoneId, subdomain: impl Into<String>, config: ZoneConfig) -> Self {
        Self {
            id,
            subdomain: subdomain.into(),
            config,
        }
    }

    /// The default zone, with no policy overrides.
    pub fn default_zone() -> Self {
        Self::new(ZoneId::default_zone(), "", ZoneConfig::default())
    }
}

/// The zone a request is being handled in.
///
/// Set once at the request boundary and passed explicitly to the resolver
/// and the gate. It is never mutated while the request is in flight.
#[derive(Debug, Clone)]
pub struct ZoneContext {
    zone: Arc<IdentityZone>,
}

impl ZoneContext {
    /// Wrap a zone for the duration of one request.
    pub fn new(zone: Arc<IdentityZone>) -> Self {
        Self { zone }
    }

    /// The zone.
    pub fn zone(&self) -> &IdentityZone {
        &self.zone
    }

    /// The zone id.
    pub fn id(&self) -> &ZoneId {
        &self.zone.id
    }

    /// The zone configuration.
    pub fn config(&self) -> &ZoneConfig {
        &self.zone.config
    }
}

impl From<IdentityZone> for ZoneContext {
    fn from(zone: IdentityZone) -> Self {
        Self::new(Arc::new(zone))
    }
}
