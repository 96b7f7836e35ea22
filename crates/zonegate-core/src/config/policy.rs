//! Process-wide default credential policies.

use serde::{Deserialize, Serialize};

use crate::types::policy::{ClientSecretPolicy, PasswordPolicy};

/// Global default policies, used by every zone that has not configured its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// Default client secret policy.
    #[serde(default = "ClientSecretPolicy::global_default")]
    pub client_secret: ClientSecretPolicy,
    /// Default password policy.
    #[serde(default = "PasswordPolicy::global_default")]
    pub password: PasswordPolicy,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            client_secret: ClientSecretPolicy::global_default(),
            password: PasswordPolicy::global_default(),
        }
    }
}
