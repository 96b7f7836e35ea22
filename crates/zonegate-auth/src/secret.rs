//! Argon2id client secret hashing and verification.

use argon2::{
    Argon2,
    password_hash::{
        PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};

use zonegate_core::error::AppError;

/// Hashes and verifies client secrets with Argon2id.
#[derive(Debug, Clone, Default)]
pub struct SecretHasher;

impl SecretHasher {
    /// Creates a new secret hasher.
    pub fn new() -> Self {
        Self
    }

    /// Hashes a plaintext secret with a random salt, returning a PHC string.
    pub fn hash_secret(&self, secret: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);

        let hash = Argon2::default()
            .hash_password(secret.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("Secret hashing failed: {e}")))?;

        Ok(hash.to_string())
    }

    /// Verifies a plaintext secret against a stored PHC string.
    ///
    /// Returns `Ok(false)` on mismatch; `Err` only for a malformed hash or
    /// an internal failure.
    pub fn verify_secret(&self, secret: &str, hash: &str) -> Result<bool, AppError> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| AppError::internal(format!("Invalid secret hash format: {e}")))?;

        match Argon2::default().verify_password(secret.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AppError::internal(format!(
                "Secret verification failed: {e}"
            ))),
        }
    }
}
