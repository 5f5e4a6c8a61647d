//! Session Token Service library.
//!
//! Issues paired session credentials — a short-lived signed access token
//! and a long-lived, single-use refresh secret — and rotates them,
//! consuming the old refresh record and alerting on client-network
//! anomalies.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod jwt;
pub mod metrics;
pub mod notify;
pub mod refresh;
pub mod session;
pub mod storage;

// Re-exports for convenience
pub use config::Config;
pub use error::AuthError;
pub use session::SessionTokenService;
