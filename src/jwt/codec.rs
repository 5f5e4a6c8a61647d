//! Strict encode / decode-and-verify for the access credential.

use crate::error::AuthError;
use crate::jwt::claims::SessionClaims;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use tracing::debug;

/// Fixed MAC algorithm for all access credentials.
const SIGNING_ALGORITHM: Algorithm = Algorithm::HS512;

/// Encodes and verifies access credentials with a single symmetric key,
/// fixed for the process lifetime.
pub struct JwtCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtCodec {
    /// Create a codec over the given symmetric signing key.
    #[must_use]
    pub fn new(signing_key: &[u8]) -> Self {
        JwtCodec {
            encoding_key: EncodingKey::from_secret(signing_key),
            decoding_key: DecodingKey::from_secret(signing_key),
        }
    }

    /// Serialize and sign claims into the compact wire form.
    ///
    /// # Errors
    ///
    /// Signing failure is an internal fault.
    pub fn encode(&self, claims: &SessionClaims) -> Result<String, AuthError> {
        encode(&Header::new(SIGNING_ALGORITHM), claims, &self.encoding_key)
            .map_err(|e| AuthError::JwtEncoding(e.to_string()))
    }

    /// Verify signature and structure, returning the claims.
    ///
    /// The credential's own expiry is deliberately not validated: rotation
    /// must succeed for an expired access credential. Every failure mode —
    /// bad signature, malformed token, missing or ill-typed claim —
    /// collapses to the same Unauthorized; the precise cause stays in the
    /// internal log.
    pub fn verify(&self, token: &str) -> Result<SessionClaims, AuthError> {
        let mut validation = Validation::new(SIGNING_ALGORITHM);
        validation.validate_exp = false;

        decode::<SessionClaims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| {
                debug!(error = %e, "access credential failed verification");
                AuthError::unauthorized("access credential rejected")
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use uuid::Uuid;

    const KEY: &[u8] = b"test-signing-key-for-codec-tests";

    fn test_claims() -> SessionClaims {
        SessionClaims::new(
            Uuid::new_v4(),
            "10.0.0.7",
            Uuid::new_v4(),
            Duration::from_secs(900),
        )
    }

    #[test]
    fn test_round_trip() {
        let codec = JwtCodec::new(KEY);
        let claims = test_claims();

        let token = codec.encode(&claims).unwrap();
        let decoded = codec.verify(&token).unwrap();

        assert_eq!(claims, decoded);
    }

    #[test]
    fn test_expired_credential_still_verifies() {
        let codec = JwtCodec::new(KEY);
        let mut claims = test_claims();
        claims.exp = chrono::Utc::now().timestamp() - 3600;

        let token = codec.encode(&claims).unwrap();
        assert!(codec.verify(&token).is_ok());
    }

    #[test]
    fn test_tampered_token_rejected() {
        let codec = JwtCodec::new(KEY);
        let token = codec.encode(&test_claims()).unwrap();

        let mut tampered = token;
        tampered.pop();
        let err = codec.verify(&tampered).unwrap_err();
        assert!(err.is_unauthorized());
    }

    #[test]
    fn test_wrong_key_rejected() {
        let codec = JwtCodec::new(KEY);
        let other = JwtCodec::new(b"another-key-entirely-not-the-one");

        let token = codec.encode(&test_claims()).unwrap();
        let err = other.verify(&token).unwrap_err();
        assert!(err.is_unauthorized());
    }

    #[test]
    fn test_garbage_rejected() {
        let codec = JwtCodec::new(KEY);
        assert!(codec.verify("not.a.jwt").unwrap_err().is_unauthorized());
        assert!(codec.verify("").unwrap_err().is_unauthorized());
    }

    #[test]
    fn test_missing_claim_rejected() {
        let codec = JwtCodec::new(KEY);

        // Well-signed token lacking refresh_token_id.
        let partial = serde_json::json!({
            "sub": Uuid::new_v4(),
            "sub_ip": "10.0.0.7",
            "exp": chrono::Utc::now().timestamp() + 900,
        });
        let token = encode(
            &Header::new(SIGNING_ALGORITHM),
            &partial,
            &EncodingKey::from_secret(KEY),
        )
        .unwrap();

        assert!(codec.verify(&token).unwrap_err().is_unauthorized());
    }

    #[test]
    fn test_malformed_claim_rejected() {
        let codec = JwtCodec::new(KEY);

        // refresh_token_id is not a well-formed identifier.
        let malformed = serde_json::json!({
            "sub": Uuid::new_v4(),
            "sub_ip": "10.0.0.7",
            "exp": chrono::Utc::now().timestamp() + 900,
            "refresh_token_id": "not-a-uuid",
        });
        let token = encode(
            &Header::new(SIGNING_ALGORITHM),
            &malformed,
            &EncodingKey::from_secret(KEY),
        )
        .unwrap();

        assert!(codec.verify(&token).unwrap_err().is_unauthorized());
    }
}
