//! Hash algorithms exposed by the crate.
//!
//! Currently includes SHA-256 with a pure-Rust implementation.

pub mod sha256;

/// Re-export of the SHA-256 convenience functions.
pub use sha256::core::{sha256, sha256_hex};

/// Re-export of the hashing error type.
pub use sha256::Sha256Error;
