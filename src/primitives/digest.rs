//! 256-bit message digest primitive
//!
//! This module defines the fixed-size digest type (`Digest256`) produced
//! by the SHA-256 hashing core.
//!
//! It is designed as a **simple, explicit value type**, not as an integer
//! arithmetic type. Its primary use cases include:
//! - carrying hash outputs between components
//! - stable hexadecimal rendering for display and comparison
//! - byte-level access for protocol code
//!
//! The internal representation is big-endian, which aligns naturally with
//! the h0..h7 word order of the hash state it is built from and with
//! human-readable hexadecimal formatting.

use std::fmt::{Display, Formatter, Result};

/// Fixed-size 256-bit message digest.
///
/// The value is stored as 32 bytes in **big-endian** order.
///
/// This type intentionally exposes only minimal functionality, favoring
/// clarity and correctness over completeness.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Digest256(pub(crate) [u8; 32]);

impl Digest256 {
    /// Borrows the digest as raw big-endian bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Returns the digest as a big-endian byte array.
    pub fn to_bytes(self) -> [u8; 32] {
        self.0
    }
}

/// Builds a `Digest256` from the 8 final state words h0..h7.
///
/// Each word is serialized most-significant byte first, words in order,
/// matching the digest layout required by the standard.
impl From<[u32; 8]> for Digest256 {
    fn from(value: [u32; 8]) -> Self {
        let mut out = [0u8; 32];

        for (i, v) in value.into_iter().enumerate() {
            out[i * 4..i * 4 + 4].copy_from_slice(&v.to_be_bytes());
        }

        Digest256(out)
    }
}

impl From<[u8; 32]> for Digest256 {
    fn from(value: [u8; 32]) -> Self {
        Digest256(value)
    }
}

impl Display for Digest256 {
    /// Formats the digest as 64 contiguous lowercase hexadecimal
    /// characters, most-significant byte first.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for byte in self.0.iter() {
            write!(f, "{:02x}", byte)?;
        }

        Ok(())
    }
}
