//! # zonegate-auth
//!
//! Credential policy evaluation and the authentication gate.
//!
//! ## Modules
//!
//! - `policy`: rule compilation, validation, and per-zone policy resolution
//! - `basic`: `Authorization: Basic` header decoding
//! - `secret`: Argon2id secret hashing and verification
//! - `authenticator`: the delegated authenticator the gate forwards to
//! - `entry_point`: "authentication failed" notification hook
//! - `gate`: the ordered extraction / lockout / expiration / delegation sequence
//! - `lockout`, `client`: in-memory collaborators for single-node deployments

pub mod authenticator;
pub mod basic;
pub mod client;
pub mod entry_point;
pub mod gate;
pub mod lockout;
pub mod policy;
pub mod secret;

pub use authenticator::{AuthenticatedClient, AuthenticationError, Authenticator, SecretAuthenticator};
pub use basic::{BasicAuthError, BasicCredentials, encode_basic_credentials, extract_basic_credentials};
pub use client::MemoryClientStore;
pub use entry_point::{AuthenticationEntryPoint, TracingEntryPoint};
pub use gate::{AuthenticationGate, GateError, GateOutcome, GateState, RejectionKind};
pub use lockout::MemoryLockoutPolicy;
pub use policy::{
    ClientSecretValidator, InvalidSecretError, PolicyRule, PolicyValidator,
    TenantPolicyResolver, ValidationResult, ZoneClientSecretPolicyValidator,
    ZonePasswordPolicyValidator,
};
pub use secret::SecretHasher;
