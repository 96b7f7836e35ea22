//! Credential policy evaluation.

pub mod resolver;
pub mod rule;
pub mod validator;
pub mod zone_validator;

pub use resolver::{TenantPolicyResolver, ZoneScopedPolicy, resolve};
pub use rule::{CharacterClass, PolicyRule};
pub use validator::{InvalidSecretError, PolicyValidator, ValidationResult};
pub use zone_validator::{
    ClientSecretValidator, ZoneClientSecretPolicyValidator, ZonePasswordPolicyValidator,
    ZonePolicyValidator,
};
