//! From-scratch SHA-256 hashing core for ledger tooling
//!
//! This crate provides the cryptographic hash primitive consumed by the
//! surrounding ledger and supply-chain demos: a complete, self-contained
//! SHA-256 implementation covering message padding, block parsing,
//! message-schedule expansion, and the 64-round compression function.
//!
//! The focus is on **clarity, predictability, and auditability**, rather
//! than on providing a large or high-level cryptographic API. The hashing
//! core is explicit in its semantics, allocation-free, and conforms
//! bit-for-bit to FIPS 180-4.
//!
//! # Module overview
//!
//! - `hash`
//!   The SHA-256 hash function and its building blocks: preprocessing
//!   (padding and block iteration), the message schedule, the compression
//!   rounds, and the one-shot hashing entry points.
//!
//! - `primitives`
//!   Fixed-size, low-level value types such as [`primitives::Digest256`],
//!   the 256-bit digest produced by the hash. These types provide
//!   explicit, predictable semantics and stable big-endian rendering.
//!
//! # Scope
//!
//! The implementation targets bit-exact conformance to the standard
//! algorithm and nothing more. It is **not** hardened against timing
//! side channels, offers no incremental/streaming interface (the whole
//! message must be available upfront), and provides no HMAC or other
//! higher-level constructions.
//!
//! # Design goals
//!
//! - No heap allocations in the hashing core
//! - Minimal and explicit APIs
//! - Stable, well-defined semantics
//! - Wrapping modulo-2^32 arithmetic throughout, never overflow errors
//!
//! This crate is not intended to replace full-featured, externally audited
//! cryptographic libraries, but to serve as a small, controlled hashing
//! foundation for the demos built on top of it.

pub mod hash;
pub mod primitives;
