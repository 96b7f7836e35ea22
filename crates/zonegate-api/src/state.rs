//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use zonegate_auth::{
    AuthenticationGate, ClientSecretValidator, MemoryClientStore, MemoryLockoutPolicy,
    SecretAuthenticator, TracingEntryPoint, ZoneClientSecretPolicyValidator,
    ZonePasswordPolicyValidator,
};
use zonegate_core::config::AppConfig;
use zonegate_core::traits::client_store::ClientDetails;
use zonegate_core::traits::clock::Clock;

use crate::zones::ZoneRegistry;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Known identity zones
    pub zones: Arc<ZoneRegistry>,
    /// Lockout / expiration gate in front of delegated authentication
    pub gate: Arc<AuthenticationGate>,
    /// Zone-aware client secret validator
    pub secret_validator: Arc<dyn ClientSecretValidator>,
    /// Zone-aware password validator
    pub password_validator: Arc<dyn ClientSecretValidator>,
}

/// Handles to the in-memory collaborators behind an [`AppState`].
#[derive(Clone)]
pub struct MemoryCollaborators {
    /// Client records seeded from configuration
    pub clients: Arc<MemoryClientStore>,
    /// Failure-window lockout tracking
    pub lockout: Arc<MemoryLockoutPolicy>,
}

impl AppState {
    /// Wire the gate and validators over in-memory collaborators seeded from
    /// `config`.
    pub fn in_memory(config: AppConfig, clock: Arc<dyn Clock>) -> (Self, MemoryCollaborators) {
        let clients = Arc::new(MemoryClientStore::with_clients(
            config.clients.iter().cloned().map(ClientDetails::from),
        ));
        let lockout = Arc::new(MemoryLockoutPolicy::with_clock(
            config.lockout.clone(),
            Arc::clone(&clock),
        ));
        let authenticator = Arc::new(SecretAuthenticator::new(clients.clone()));

        let gate = AuthenticationGate::new(
            lockout.clone(),
            clients.clone(),
            authenticator,
            Arc::new(TracingEntryPoint),
            config.policy.client_secret,
        )
        .with_clock(clock);

        tracing::info!(
            zones = config.identity_zones().len(),
            clients = clients.len(),
            "Authentication gate initialized"
        );

        let state = Self {
            zones: Arc::new(ZoneRegistry::new(config.identity_zones())),
            gate: Arc::new(gate),
            secret_validator: Arc::new(ZoneClientSecretPolicyValidator::new(
                config.policy.client_secret,
            )),
            password_validator: Arc::new(ZonePasswordPolicyValidator::new(
                config.policy.password,
            )),
            config: Arc::new(config),
        };

        (state, MemoryCollaborators { clients, lockout })
    }
}
