//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section.

pub mod app;
pub mod clients;
pub mod lockout;
pub mod logging;
pub mod policy;

use serde::{Deserialize, Serialize};

pub use self::app::ServerConfig;
pub use self::clients::ClientEntry;
pub use self::lockout::LockoutConfig;
pub use self::logging::LoggingConfig;
pub use self::policy::PolicyConfig;

use crate::error::AppError;
use crate::types::zone::IdentityZone;

/// Root application configuration.
///
/// Top-level deserialization target for the merged TOML configuration
/// (default.toml + environment overlay + `ZONEGATE__*` variables).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Global default credential policies.
    #[serde(default)]
    pub policy: PolicyConfig,
    /// Lockout thresholds.
    #[serde(default)]
    pub lockout: LockoutConfig,
    /// Identity zones and their policy overrides.
    #[serde(default)]
    pub zones: Vec<IdentityZone>,
    /// Seed client registrations.
    #[serde(default)]
    pub clients: Vec<ClientEntry>,
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges `config/default.toml` with `config/{env}.toml` and environment
    /// variables prefixed with `ZONEGATE`.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("ZONEGATE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let config: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        tracing::debug!(
            env,
            zones = config.zones.len(),
            clients = config.clients.len(),
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Parse configuration from a TOML string, without file or environment
    /// overlays.
    pub fn from_toml(source: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Configured zones, with the default zone added when absent.
    pub fn identity_zones(&self) -> Vec<IdentityZone> {
        let mut zones = self.zones.clone();
        if !zones.iter().any(|z| z.id.is_default()) {
            zones.insert(0, IdentityZone::default_zone());
        }
        zones
    }
}
