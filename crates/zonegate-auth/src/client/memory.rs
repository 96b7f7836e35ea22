//! In-memory client store for single-node deployments and tests.

use async_trait::async_trait;
use dashmap::DashMap;

use zonegate_core::result::AppResult;
use zonegate_core::traits::client_store::{ClientDetails, ClientDetailsStore};
use zonegate_core::types::id::{PrincipalId, ZoneId};

/// Client records keyed by zone and client id.
#[derive(Debug, Default)]
pub struct MemoryClientStore {
    clients: DashMap<(ZoneId, PrincipalId), ClientDetails>,
}

impl MemoryClientStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding `clients`.
    pub fn with_clients(clients: impl IntoIterator<Item = ClientDetails>) -> Self {
        let store = Self::new();
        for client in clients {
            store.insert(client);
        }
        store
    }

    /// Adds or replaces a client record.
    pub fn insert(&self, client: ClientDetails) {
        tracing::debug!(
            client_id = %client.client_id,
            zone = %client.zone_id,
            "Registered client"
        );
        self.clients
            .insert((client.zone_id.clone(), client.client_id.clone()), client);
    }

    /// Number of registered clients.
    pub fn len(&self) -> usize {
        self.clients.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }
}

#[async_trait]
impl ClientDetailsStore for MemoryClientStore {
    async fn load_by_principal_id(
        &self,
        zone_id: &ZoneId,
        principal_id: &PrincipalId,
    ) -> AppResult<Option<ClientDetails>> {
        Ok(self
            .clients
            .get(&(zone_id.clone(), principal_id.clone()))
            .map(|entry| entry.value().clone()))
    }
}
