//! Refresh secret generation, digesting, and record model.

pub mod record;
pub mod secret;

pub use record::RefreshRecord;
pub use secret::{hash_secret, verify_secret, RefreshSecret};
