//! Core type definitions used across the zonegate workspace.

pub mod id;
pub mod policy;
pub mod zone;

pub use id::{PrincipalId, ZoneId};
pub use policy::{
    ClientSecretPolicy, ComplexityRules, CredentialPolicy, PasswordPolicy, PolicyKind,
    UNCONFIGURED,
};
pub use zone::{IdentityZone, ZoneConfig, ZoneContext};
