//! SHA-256 core hashing functions
//!
//! This module implements the core logic of the SHA-256 cryptographic hash
//! function as defined in FIPS 180-4.
//!
//! It provides:
//! - the compression function operating on 512-bit blocks
//! - a complete SHA-256 hashing function for arbitrary-length input
//! - a convenience wrapper rendering the digest as hexadecimal
//!
//! The implementation is intentionally minimal, explicit, and designed
//! for use as a low-level primitive by the ledger demos built on top.

use super::H256_INIT;
use super::Sha256Error;
use super::computations::{all_rounds, message_schedule};
use super::padding::{BLOCK_LEN, message_blocks};
use crate::primitives::Digest256;

/// Compresses a single 512-bit message block.
///
/// This function performs the SHA-256 compression step on a single
/// 64-byte block, updating the running hash state in place.
///
/// # Parameters
/// - `block`: A 512-bit (64-byte) message block
/// - `state`: The current hash state (8 × 32-bit words)
///
/// # Notes
/// - The message schedule is fully expanded here and consumed by
///   `all_rounds`.
/// - Input words are interpreted as big-endian, as required by SHA-256.
pub fn compress(block: &[u8; BLOCK_LEN], state: &mut [u32; 8]) {
    let w = message_schedule(block);

    all_rounds(state, &w);
}

/// Computes the SHA-256 digest of the given input.
///
/// This function pads the input message, processes it in 512-bit blocks,
/// and returns the final 256-bit digest.
///
/// # Parameters
/// - `input`: Arbitrary-length input message
///
/// # Returns
/// - The final SHA-256 digest as a [`Digest256`]
///
/// # Errors
/// - [`Sha256Error::MessageTooLong`] if the input's bit length cannot be
///   encoded in the trailing 64-bit length field. The check happens
///   before any block is processed.
///
/// # Notes
/// - The implementation follows the standard Merkle–Damgård construction.
/// - Blocks are processed strictly in order: each block's output state is
///   the next block's input state.
/// - No heap allocations are performed.
pub fn sha256(input: &[u8]) -> Result<Digest256, Sha256Error> {
    let mut state = H256_INIT;

    for block in message_blocks(input)? {
        compress(&block, &mut state);
    }

    Ok(Digest256::from(state))
}

/// Computes the SHA-256 digest of the given input and renders it as a
/// 64-character lowercase hexadecimal string.
///
/// # Errors
/// - [`Sha256Error::MessageTooLong`], as for [`sha256`].
pub fn sha256_hex(input: &[u8]) -> Result<String, Sha256Error> {
    Ok(sha256(input)?.to_string())
}
