//! Lockout thresholds for the bundled in-memory lockout collaborator.

use serde::{Deserialize, Serialize};

/// Lockout configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LockoutConfig {
    /// Failures within the window after which a principal is locked out.
    #[serde(default = "default_lockout_after")]
    pub lockout_after_failures: u32,
    /// Window over which failures are counted, in seconds.
    #[serde(default = "default_count_within")]
    pub count_failures_within_seconds: u64,
    /// How long a lockout lasts, in seconds.
    #[serde(default = "default_lockout_period")]
    pub lockout_period_seconds: u64,
}

impl Default for LockoutConfig {
    fn default() -> Self {
        Self {
            lockout_after_failures: default_lockout_after(),
            count_failures_within_seconds: default_count_within(),
            lockout_period_seconds: default_lockout_period(),
        }
    }
}

fn default_lockout_after() -> u32 {
    5
}

fn default_count_within() -> u64 {
    3600
}

fn default_lockout_period() -> u64 {
    300
}
