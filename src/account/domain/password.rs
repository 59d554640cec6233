//! Password digests.

use super::AccountDomainError;
use sha2::{Digest, Sha256};
use std::fmt;

/// Lowercase hex SHA-256 digest of an account password.
///
/// The plaintext never leaves [`PasswordDigest::from_plaintext`]. `Debug`
/// output is redacted so digests do not end up in logs.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PasswordDigest(String);

impl PasswordDigest {
    /// Hashes a plaintext password.
    ///
    /// # Errors
    ///
    /// Returns [`AccountDomainError::EmptyPassword`] for an empty password.
    pub fn from_plaintext(plaintext: &str) -> Result<Self, AccountDomainError> {
        if plaintext.is_empty() {
            return Err(AccountDomainError::EmptyPassword);
        }
        let hex = Sha256::digest(plaintext.as_bytes())
            .iter()
            .map(|byte| format!("{byte:02x}"))
            .collect();
        Ok(Self(hex))
    }

    /// Wraps a digest loaded from storage.
    #[must_use]
    pub fn from_stored(hex: impl Into<String>) -> Self {
        Self(hex.into())
    }

    /// Returns the hex digest.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PasswordDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordDigest(<redacted>)")
    }
}
