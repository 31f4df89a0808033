//! Primitive types
//!
//! This module defines the low-level value types produced by the hashing
//! core.
//!
//! Primitives are simple, fixed-size, dependency-free building blocks that
//! provide well-defined semantics and predictable behavior. They are
//! intentionally minimal and do not attempt to replicate full standard
//! library abstractions or general-purpose big-integer libraries.
//!
//! Current primitives include:
//! - `Digest256`: a fixed-size 256-bit message digest

mod digest;

/// Fixed-size digest primitive.
///
/// This type is re-exported as the primary digest value used across the
/// crate.
pub use digest::Digest256;
