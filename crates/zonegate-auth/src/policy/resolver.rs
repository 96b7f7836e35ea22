//! Chooses the effective policy for a zone.

use zonegate_core::types::policy::{ClientSecretPolicy, CredentialPolicy, PasswordPolicy};
use zonegate_core::types::zone::{ZoneConfig, ZoneContext};

/// A policy shape that a zone can override.
pub trait ZoneScopedPolicy: CredentialPolicy {
    /// The zone's override for this policy kind.
    fn from_zone(config: &ZoneConfig) -> &Self;
}

impl ZoneScopedPolicy for ClientSecretPolicy {
    fn from_zone(config: &ZoneConfig) -> &Self {
        &config.client_secret_policy
    }
}

impl ZoneScopedPolicy for PasswordPolicy {
    fn from_zone(config: &ZoneConfig) -> &Self {
        &config.password_policy
    }
}

/// Return `tenant_policy` if it has been configured (its `min_length` is not
/// the sentinel), otherwise `global_default`.
///
/// A configured tenant policy replaces the default wholesale, fields left at
/// zero included. Fields are never merged.
pub fn resolve<'a, P: CredentialPolicy>(tenant_policy: &'a P, global_default: &'a P) -> &'a P {
    if tenant_policy.is_configured() {
        tenant_policy
    } else {
        global_default
    }
}

/// Resolves zone overrides against a process-wide default.
#[derive(Debug, Clone)]
pub struct TenantPolicyResolver<P> {
    global_default: P,
}

impl<P: ZoneScopedPolicy> TenantPolicyResolver<P> {
    /// Create a resolver around the process-wide default.
    pub fn new(global_default: P) -> Self {
        Self { global_default }
    }

    /// The process-wide default.
    pub fn global_default(&self) -> &P {
        &self.global_default
    }

    /// The policy in force for the request's zone.
    pub fn resolve<'a>(&'a self, zone: &'a ZoneContext) -> &'a P {
        let tenant_policy = P::from_zone(zone.config());
        tracing::trace!(
            zone = %zone.id(),
            kind = ?P::KIND,
            zone_override = tenant_policy.is_configured(),
            "Resolved credential policy"
        );
        resolve(tenant_policy, &self.global_default)
    }
}
