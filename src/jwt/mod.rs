//! Signed access credential encoding and verification.

pub mod claims;
pub mod codec;

pub use claims::SessionClaims;
pub use codec::JwtCodec;
