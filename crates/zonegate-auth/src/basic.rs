//! `Authorization: Basic` credential extraction.

use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;

use zonegate_core::types::id::PrincipalId;

/// Scheme prefix the gate reacts to. Matching is case-sensitive.
pub const BASIC_PREFIX: &str = "Basic ";

/// Principal and secret decoded from a Basic header.
#[derive(Clone, PartialEq, Eq)]
pub struct BasicCredentials {
    /// Everything before the first colon.
    pub principal_id: PrincipalId,
    /// Everything after the first colon (may itself contain colons).
    pub secret: String,
}

impl fmt::Debug for BasicCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicCredentials")
            .field("principal_id", &self.principal_id)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// A Basic header was present but could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BasicAuthError {
    /// Token is not valid base64.
    #[error("Failed to decode basic authentication token")]
    InvalidEncoding,

    /// Decoded bytes are not UTF-8.
    #[error("Failed to decode basic authentication token")]
    InvalidUtf8,

    /// Decoded token has no `:` delimiter.
    #[error("Invalid basic authentication token")]
    MissingDelimiter,
}

/// Extract Basic credentials from an `Authorization` header value.
///
/// Takes the raw header bytes, since a header value is not guaranteed to be
/// visible ASCII. Returns `Ok(None)` when the header is absent or uses another
/// scheme; the request is then not an attempt this gate handles.
pub fn extract_basic_credentials(
    header: Option<&[u8]>,
) -> Result<Option<BasicCredentials>, BasicAuthError> {
    let Some(encoded) = header.and_then(|h| h.strip_prefix(BASIC_PREFIX.as_bytes())) else {
        return Ok(None);
    };

    let decoded = BASE64
        .decode(encoded.trim_ascii())
        .map_err(|_| BasicAuthError::InvalidEncoding)?;

    let decoded = String::from_utf8(decoded).map_err(|_| BasicAuthError::InvalidUtf8)?;

    let (principal, secret) = decoded
        .split_once(':')
        .ok_or(BasicAuthError::MissingDelimiter)?;

    Ok(Some(BasicCredentials {
        principal_id: PrincipalId::new(principal),
        secret: secret.to_string(),
    }))
}

/// Build a full `Authorization` header value for `principal:secret`.
pub fn encode_basic_credentials(principal_id: &str, secret: &str) -> String {
    format!(
        "{BASIC_PREFIX}{}",
        BASE64.encode(format!("{principal_id}:{secret}"))
    )
}
