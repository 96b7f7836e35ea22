//! Zone-aware credential validation used by administrative flows.

use zonegate_core::types::policy::{ClientSecretPolicy, PasswordPolicy};
use zonegate_core::types::zone::ZoneContext;

use super::resolver::{TenantPolicyResolver, ZoneScopedPolicy};
use super::validator::{InvalidSecretError, PolicyValidator};

/// Checks a candidate credential against the policy in force for a zone.
pub trait ClientSecretValidator: Send + Sync {
    /// `Ok(())` for a compliant candidate; otherwise every violation.
    fn validate(&self, zone: &ZoneContext, candidate: Option<&str>)
    -> Result<(), InvalidSecretError>;
}

/// Resolves the zone's policy and evaluates the candidate against it.
#[derive(Debug, Clone)]
pub struct ZonePolicyValidator<P> {
    resolver: TenantPolicyResolver<P>,
}

/// Validator for client secrets.
pub type ZoneClientSecretPolicyValidator = ZonePolicyValidator<ClientSecretPolicy>;

/// Validator for end-user passwords.
pub type ZonePasswordPolicyValidator = ZonePolicyValidator<PasswordPolicy>;

impl<P: ZoneScopedPolicy> ZonePolicyValidator<P> {
    /// Create a validator around the process-wide default policy.
    pub fn new(global_default: P) -> Self {
        Self {
            resolver: TenantPolicyResolver::new(global_default),
        }
    }

    /// The underlying resolver.
    pub fn resolver(&self) -> &TenantPolicyResolver<P> {
        &self.resolver
    }
}

impl<P: ZoneScopedPolicy> ClientSecretValidator for ZonePolicyValidator<P> {
    fn validate(
        &self,
        zone: &ZoneContext,
        candidate: Option<&str>,
    ) -> Result<(), InvalidSecretError> {
        let validator = PolicyValidator::compile(self.resolver.resolve(zone));

        let Some(candidate) = candidate else {
            return Err(InvalidSecretError::new(validator.null_message()));
        };

        let result = validator.validate(Some(candidate));
        if !result.is_valid() {
            tracing::debug!(
                zone = %zone.id(),
                violations = result.messages().len(),
                "Credential rejected by policy"
            );
        }
        result.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zonegate_core::types::id::ZoneId;
    use zonegate_core::types::policy::ComplexityRules;
    use zonegate_core::types::zone::{IdentityZone, ZoneConfig};

    fn zone(policy: ClientSecretPolicy) -> ZoneContext {
        let config = ZoneConfig {
            client_secret_policy: policy,
            ..ZoneConfig::default()
        };
        IdentityZone::new(ZoneId::new("acme"), "acme", config).into()
    }

    #[test]
    fn test_null_secret_rejected_regardless_of_policy() {
        let validator = ZoneClientSecretPolicyValidator::new(ClientSecretPolicy::global_default());
        let err = validator
            .validate(&zone(ClientSecretPolicy::default()), None)
            .unwrap_err();
        assert_eq!(err.messages(), ["Client secret cannot be null"]);
    }

    #[test]
    fn test_uses_global_default_when_zone_unconfigured() {
        let global = ClientSecretPolicy::new(ComplexityRules::new(0, 255, 0, 0, 1, 0), 0);
        let validator = ZoneClientSecretPolicyValidator::new(global);
        let ctx = zone(ClientSecretPolicy::default());

        assert!(validator.validate(&ctx, Some("nodigits")).is_err());
        assert!(validator.validate(&ctx, Some("digit1")).is_ok());
    }

    #[test]
    fn test_zone_override_wins() {
        let global = ClientSecretPolicy::new(ComplexityRules::new(0, 255, 0, 0, 1, 0), 0);
        let tenant = ClientSecretPolicy::new(ComplexityRules::new(0, 255, 0, 0, 0, 0), 0);
        let validator = ZoneClientSecretPolicyValidator::new(global);

        assert!(validator.validate(&zone(tenant), Some("nodigits")).is_ok());
    }

    #[test]
    fn test_all_violations_aggregated() {
        let tenant = ClientSecretPolicy::new(ComplexityRules::new(6, 255, 2, 0, 1, 1), 0);
        let validator = ZoneClientSecretPolicyValidator::new(ClientSecretPolicy::global_default());
        let err = validator.validate(&zone(tenant), Some("abc")).unwrap_err();
        assert_eq!(err.messages().len(), 4);
    }

    #[test]
    fn test_password_validator_reads_password_override() {
        let config = ZoneConfig {
            password_policy: PasswordPolicy::new(ComplexityRules::new(10, 255, 0, 0, 0, 0), 0),
            ..ZoneConfig::default()
        };
        let ctx: ZoneContext = IdentityZone::new(ZoneId::new("acme"), "acme", config).into();
        let validator = ZonePasswordPolicyValidator::new(PasswordPolicy::global_default());

        let err = validator.validate(&ctx, Some("short")).unwrap_err();
        assert_eq!(
            err.messages(),
            ["Password must be at least 10 characters in length."]
        );
    }
}
