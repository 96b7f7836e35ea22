//! Credential policy types.
//!
//! Both policy shapes embed the same [`ComplexityRules`] and add their own
//! expiration field. A field value of [`UNCONFIGURED`] means the operator
//! never set it; a policy whose `min_length` is unconfigured defers to the
//! global default as a whole.

use serde::{Deserialize, Serialize};

/// Sentinel for "not configured, use the default".
pub const UNCONFIGURED: i32 = -1;

/// Default upper bound on credential length for the global policies.
pub const DEFAULT_MAX_LENGTH: i32 = 255;

fn unconfigured() -> i32 {
    UNCONFIGURED
}

/// Length bounds and required character-class counts shared by every
/// credential policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComplexityRules {
    /// Minimum number of characters.
    #[serde(default = "unconfigured")]
    pub min_length: i32,
    /// Maximum number of characters.
    #[serde(default = "unconfigured")]
    pub max_length: i32,
    /// Minimum number of uppercase characters.
    #[serde(default = "unconfigured")]
    pub require_upper_case_character: i32,
    /// Minimum number of lowercase characters.
    #[serde(default = "unconfigured")]
    pub require_lower_case_character: i32,
    /// Minimum number of digits.
    #[serde(default = "unconfigured")]
    pub require_digit: i32,
    /// Minimum number of special characters.
    #[serde(default = "unconfigured")]
    pub require_special_character: i32,
}

impl ComplexityRules {
    /// Create a fully populated rule set.
    pub const fn new(
        min_length: i32,
        max_length: i32,
        require_upper_case_character: i32,
        require_lower_case_character: i32,
        require_digit: i32,
        require_special_character: i32,
    ) -> Self {
        Self {
            min_length,
            max_length,
            require_upper_case_character,
            require_lower_case_character,
            require_digit,
            require_special_character,
        }
    }

    /// A rule set where every field carries the unconfigured sentinel.
    pub const fn unconfigured() -> Self {
        Self::new(
            UNCONFIGURED,
            UNCONFIGURED,
            UNCONFIGURED,
            UNCONFIGURED,
            UNCONFIGURED,
            UNCONFIGURED,
        )
    }

    /// Whether the operator has set this rule set (`min_length` sentinel cleared).
    pub fn is_configured(&self) -> bool {
        self.min_length != UNCONFIGURED
    }

    /// Whether every field is present and non-negative.
    pub fn all_present_and_positive(&self) -> bool {
        self.min_length >= 0
            && self.max_length >= 0
            && self.require_upper_case_character >= 0
            && self.require_lower_case_character >= 0
            && self.require_digit >= 0
            && self.require_special_character >= 0
    }
}

impl Default for ComplexityRules {
    fn default() -> Self {
        Self::unconfigured()
    }
}

/// Which kind of credential a policy governs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyKind {
    /// End-user password.
    Password,
    /// OAuth client secret.
    ClientSecret,
}

impl PolicyKind {
    /// Capitalized noun used at the start of violation messages.
    pub fn subject(&self) -> &'static str {
        match self {
            Self::Password => "Password",
            Self::ClientSecret => "Client secret",
        }
    }
}

/// Seam between the two concrete policy shapes and the code that evaluates
/// them (resolver, validator, gate).
pub trait CredentialPolicy: Clone + Send + Sync + 'static {
    /// The credential kind this policy governs.
    const KIND: PolicyKind;

    /// The shared complexity fields.
    fn complexity(&self) -> &ComplexityRules;

    /// Months after which the credential expires; `<= 0` disables expiry.
    fn expire_in_months(&self) -> i32;

    /// Whether the policy was explicitly configured.
    fn is_configured(&self) -> bool {
        self.complexity().is_configured()
    }

    /// Every field present and non-negative, expiration included.
    fn is_fully_specified(&self) -> bool {
        self.complexity().all_present_and_positive() && self.expire_in_months() >= 0
    }
}

/// Policy for end-user passwords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PasswordPolicy {
    /// Shared complexity rules.
    #[serde(flatten)]
    pub complexity: ComplexityRules,
    /// Months after which a password expires.
    #[serde(default = "unconfigured")]
    pub expire_password_in_months: i32,
}

impl PasswordPolicy {
    /// Create a fully populated password policy.
    pub const fn new(complexity: ComplexityRules, expire_password_in_months: i32) -> Self {
        Self {
            complexity,
            expire_password_in_months,
        }
    }

    /// The permissive process-wide default: 0..=255 characters, no class
    /// requirements, no expiration.
    pub const fn global_default() -> Self {
        Self::new(ComplexityRules::new(0, DEFAULT_MAX_LENGTH, 0, 0, 0, 0), 0)
    }
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self::new(ComplexityRules::unconfigured(), UNCONFIGURED)
    }
}

impl CredentialPolicy for PasswordPolicy {
    const KIND: PolicyKind = PolicyKind::Password;

    fn complexity(&self) -> &ComplexityRules {
        &self.complexity
    }

    fn expire_in_months(&self) -> i32 {
        self.expire_password_in_months
    }
}

/// Policy for OAuth client secrets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClientSecretPolicy {
    /// Shared complexity rules.
    #[serde(flatten)]
    pub complexity: ComplexityRules,
    /// Months after which a secret expires.
    #[serde(default = "unconfigured")]
    pub expire_secret_in_months: i32,
}

impl ClientSecretPolicy {
    /// Create a fully populated client secret policy.
    pub const fn new(complexity: ComplexityRules, expire_secret_in_months: i32) -> Self {
        Self {
            complexity,
            expire_secret_in_months,
        }
    }

    /// The permissive process-wide default: 0..=255 characters, no class
    /// requirements, no expiration.
    pub const fn global_default() -> Self {
        Self::new(ComplexityRules::new(0, DEFAULT_MAX_LENGTH, 0, 0, 0, 0), 0)
    }
}

impl Default for ClientSecretPolicy {
    fn default() -> Self {
        Self::new(ComplexityRules::unconfigured(), UNCONFIGURED)
    }
}

impl CredentialPolicy for ClientSecretPolicy {
    const KIND: PolicyKind = PolicyKind::ClientSecret;

    fn complexity(&self) -> &ComplexityRules {
        &self.complexity
    }

    fn expire_in_months(&self) -> i32 {
        self.expire_secret_in_months
    }
}
