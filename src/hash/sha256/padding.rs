//! Message preprocessing: padding and 512-bit block iteration.
//!
//! SHA-256 consumes its input as a sequence of 512-bit blocks. The raw
//! message is followed by a single `1` bit, then enough `0` bits to bring
//! the length to 448 mod 512, then the original bit length as a 64-bit
//! big-endian integer, so the padded stream is an exact multiple of
//! 512 bits.
//!
//! Padding operates directly on byte buffers; no textual bit string is
//! ever materialized. Blocks are derived by index from the message, so
//! the iterator holds no partially padded state and the length check can
//! run before any padding work.

use super::Sha256Error;

/// Size of one SHA-256 message block in bytes (512 bits).
pub const BLOCK_LEN: usize = 64;

/// Returns the message length in bits, as encoded in the trailing 64-bit
/// length field.
///
/// # Errors
/// Fails with [`Sha256Error::MessageTooLong`] when `8 * len` does not fit
/// an unsigned 64-bit integer.
pub fn message_bit_len(len: usize) -> Result<u64, Sha256Error> {
    let bits = (len as u128) << 3;

    if bits > u64::MAX as u128 {
        return Err(Sha256Error::MessageTooLong(len));
    }

    Ok(bits as u64)
}

/// Builds the padded block sequence for `msg`.
///
/// # Errors
/// Fails with [`Sha256Error::MessageTooLong`] when the bit length of
/// `msg` cannot be encoded in the 64-bit length field. The check runs
/// before any block is produced.
pub fn message_blocks(msg: &[u8]) -> Result<Blocks<'_>, Sha256Error> {
    let bit_len = message_bit_len(msg.len())?;

    Ok(Blocks {
        msg,
        bit_len,
        next: 0,
    })
}

/// Iterator over the padded 512-bit blocks of a message.
///
/// Yields every full 64-byte block of the message in order, then one or
/// two tail blocks carrying the `0x80` marker bit, the zero fill, and the
/// trailing bit length. The total count is known up front:
/// `ceil((8 * msg.len() + 65) / 512)`.
pub struct Blocks<'a> {
    msg: &'a [u8],
    bit_len: u64,
    next: usize,
}

impl Blocks<'_> {
    /// Number of blocks taken from the message unchanged.
    fn full_blocks(&self) -> usize {
        self.msg.len() / BLOCK_LEN
    }

    /// Total number of padded blocks.
    fn total_blocks(&self) -> usize {
        let rem = self.msg.len() % BLOCK_LEN;

        // The marker byte and the 8-byte length field must fit after the
        // remainder, otherwise the padding spills into a second block.
        let tail = if rem > 55 { 2 } else { 1 };

        self.full_blocks() + tail
    }

    /// Builds the padded block at `index`.
    fn block_at(&self, index: usize) -> [u8; BLOCK_LEN] {
        let mut block = [0u8; BLOCK_LEN];

        if index < self.full_blocks() {
            let start = index * BLOCK_LEN;
            block.copy_from_slice(&self.msg[start..start + BLOCK_LEN]);

            return block;
        }

        if index == self.full_blocks() {
            // First tail block: the message remainder followed by the
            // appended 1 bit (0x80, since the message is byte-aligned).
            let rem = self.msg.len() % BLOCK_LEN;

            block[..rem].copy_from_slice(&self.msg[self.msg.len() - rem..]);
            block[rem] = 0x80;
        }

        if index + 1 == self.total_blocks() {
            block[56..].copy_from_slice(&self.bit_len.to_be_bytes());
        }

        block
    }
}

impl Iterator for Blocks<'_> {
    type Item = [u8; BLOCK_LEN];

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.total_blocks() {
            return None;
        }

        let block = self.block_at(self.next);
        self.next += 1;

        Some(block)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.total_blocks() - self.next;

        (left, Some(left))
    }
}

impl ExactSizeIterator for Blocks<'_> {}
