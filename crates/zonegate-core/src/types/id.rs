//! Newtype wrappers around `String` for the identifiers this core handles.
//!
//! Zone ids and principal ids are operator-chosen strings (`"uaa"`,
//! `"app"`), not generated UUIDs. Distinct types prevent passing a client id
//! where a zone id is expected.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Macro to define a newtype ID wrapper around `String`.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create an identifier from any string-like value.
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Borrow the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(
    /// Identifier of an identity zone (tenant).
    ZoneId
);

define_id!(
    /// Identifier of an authenticating principal (client id or username).
    PrincipalId
);

impl ZoneId {
    /// The id of the default zone that always exists.
    pub const DEFAULT: &'static str = "uaa";

    /// The default zone id.
    pub fn default_zone() -> Self {
        Self::new(Self::DEFAULT)
    }

    /// Whether this is the default zone.
    pub fn is_default(&self) -> bool {
        self.0 == Self::DEFAULT
    }
}
