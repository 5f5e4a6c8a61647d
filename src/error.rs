//! Error taxonomy for the session token service.
//!
//! Exactly one variant is externally distinguishable: [`AuthError::Unauthorized`].
//! Every other variant is an internal fault that a boundary layer must map
//! to an opaque generic failure. Messages carried by `Unauthorized` are
//! internal detail for logs and must never reach a caller.

use thiserror::Error;

/// Errors produced by session issuance and rotation.
#[derive(Error, Debug)]
pub enum AuthError {
    /// The credential/session is invalid. Covers bad signature, missing or
    /// malformed claims, unknown refresh record, expired record, and secret
    /// mismatch — all collapsed to one kind so callers get no discriminating
    /// oracle between them.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Adaptive digest computation or verification failed.
    #[error("hash error: {0}")]
    Hash(String),

    /// Access credential signing or serialization failed.
    #[error("JWT encoding error: {0}")]
    JwtEncoding(String),

    /// Refresh record storage fault.
    #[error("storage error: {0}")]
    Storage(String),

    /// Alert delivery fault.
    #[error("notify error: {0}")]
    Notify(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Unexpected internal failure.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Unauthorized with an internal-only reason.
    pub fn unauthorized(reason: impl Into<String>) -> Self {
        Self::Unauthorized(reason.into())
    }

    /// Hashing fault.
    pub fn hash(msg: impl Into<String>) -> Self {
        Self::Hash(msg.into())
    }

    /// Storage fault.
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Notification fault.
    pub fn notify(msg: impl Into<String>) -> Self {
        Self::Notify(msg.into())
    }

    /// Configuration fault.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Generic internal fault.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Whether this is the externally visible Unauthorized kind.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized(_))
    }
}

impl From<redis::RedisError> for AuthError {
    fn from(err: redis::RedisError) -> Self {
        AuthError::Storage(err.to_string())
    }
}
