//! The raw refresh secret and its adaptive digest.

use crate::error::AuthError;
use argon2::password_hash::{rand_core::OsRng, PasswordHash, SaltString};
use argon2::{Argon2, PasswordHasher, PasswordVerifier};
use rand::RngCore as _;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Raw single-use refresh secret. Known only to the issuing call's caller;
/// the service retains only its salted digest. Zeroized on drop and never
/// printed.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct RefreshSecret([u8; 16]);

impl RefreshSecret {
    /// Secret length in bytes.
    pub const LEN: usize = 16;

    /// Generate a fresh secret from the OS entropy source.
    ///
    /// # Errors
    ///
    /// Failure of the randomness source is an internal fault.
    pub fn generate() -> Result<Self, AuthError> {
        let mut bytes = [0u8; Self::LEN];
        rand::rngs::OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| AuthError::internal(format!("entropy source failed: {}", e)))?;
        Ok(RefreshSecret(bytes))
    }

    /// Raw bytes. Transport encoding is the caller's choice; comparisons
    /// here happen only on raw bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl std::fmt::Debug for RefreshSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("RefreshSecret(..)")
    }
}

/// Compute the salted, intentionally slow digest stored as the secret's
/// verifier.
///
/// # Errors
///
/// Digest failure is an internal fault.
pub fn hash_secret(secret: &RefreshSecret) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(secret.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::hash(e.to_string()))
}

/// Constant-time, algorithm-matched comparison of a presented secret
/// against a stored digest. A clean mismatch is `Ok(false)`; an
/// unparseable or otherwise broken digest is an internal fault.
pub fn verify_secret(presented: &[u8], digest: &str) -> Result<bool, AuthError> {
    let parsed = PasswordHash::new(digest)
        .map_err(|e| AuthError::hash(format!("invalid stored digest: {}", e)))?;

    match Argon2::default().verify_password(presented, &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(AuthError::hash(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_length_and_uniqueness() {
        let a = RefreshSecret::generate().unwrap();
        let b = RefreshSecret::generate().unwrap();

        assert_eq!(a.as_bytes().len(), RefreshSecret::LEN);
        assert_ne!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn test_digest_verifies_own_secret() {
        let secret = RefreshSecret::generate().unwrap();
        let digest = hash_secret(&secret).unwrap();

        assert!(verify_secret(secret.as_bytes(), &digest).unwrap());
    }

    #[test]
    fn test_digest_rejects_other_secret() {
        let secret = RefreshSecret::generate().unwrap();
        let other = RefreshSecret::generate().unwrap();
        let digest = hash_secret(&secret).unwrap();

        assert!(!verify_secret(other.as_bytes(), &digest).unwrap());
    }

    #[test]
    fn test_digest_is_salted() {
        let secret = RefreshSecret::generate().unwrap();
        let d1 = hash_secret(&secret).unwrap();
        let d2 = hash_secret(&secret).unwrap();

        assert_ne!(d1, d2);
        assert_ne!(d1.as_bytes(), secret.as_bytes());
    }

    #[test]
    fn test_broken_digest_is_fault_not_mismatch() {
        let secret = RefreshSecret::generate().unwrap();
        let err = verify_secret(secret.as_bytes(), "not-a-phc-string").unwrap_err();
        assert!(!err.is_unauthorized());
    }

    #[test]
    fn test_debug_does_not_leak() {
        let secret = RefreshSecret::generate().unwrap();
        assert_eq!(format!("{:?}", secret), "RefreshSecret(..)");
    }
}
