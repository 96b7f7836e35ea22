//! Registry of identity zones known to this process.

use std::collections::HashMap;
use std::sync::Arc;

use zonegate_core::types::id::ZoneId;
use zonegate_core::types::zone::{IdentityZone, ZoneContext};

/// Zones keyed by id. The default zone is always present.
#[derive(Debug, Clone)]
pub struct ZoneRegistry {
    zones: HashMap<ZoneId, Arc<IdentityZone>>,
}

impl ZoneRegistry {
    /// Build a registry from configured zones, adding the default zone when
    /// it is missing.
    pub fn new(zones: impl IntoIterator<Item = IdentityZone>) -> Self {
        let mut zones: HashMap<_, _> = zones
            .into_iter()
            .map(|zone| (zone.id.clone(), Arc::new(zone)))
            .collect();

        zones
            .entry(ZoneId::default_zone())
            .or_insert_with(|| Arc::new(IdentityZone::default_zone()));

        Self { zones }
    }

    /// A request-scoped context for `zone_id`, if the zone exists.
    pub fn context(&self, zone_id: &str) -> Option<ZoneContext> {
        self.zones.get(zone_id).cloned().map(ZoneContext::new)
    }

    /// Number of registered zones.
    pub fn len(&self) -> usize {
        self.zones.len()
    }

    /// Never true; the default zone is always registered.
    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}

impl Default for ZoneRegistry {
    fn default() -> Self {
        Self::new([])
    }
}
