//! The 1024-byte memory block.
//!
//! Blocks are the alphabet of the memory-hard computation: the matrix is
//! an array of them, the compressor maps two of them to a third, and the
//! tag is derived from their XOR. Internally a block is 128 native 64-bit
//! words; the byte view is fixed little-endian, so conversions go through
//! the explicit accessors here rather than through casts.

use zeroize::Zeroize;

/// Size of a block in bytes.
pub(crate) const BLOCK_BYTES: usize = 1024;

/// Number of 64-bit words in a block.
pub(crate) const WORDS_IN_BLOCK: usize = 128;

/// A 1024-byte memory block (128 x 64-bit words).
#[derive(Clone, Debug)]
pub struct Block(pub(crate) [u64; WORDS_IN_BLOCK]);

impl Block {
    /// The all-zero block.
    pub const ZERO: Self = Self([0u64; WORDS_IN_BLOCK]);

    /// `a ^ b` as a fresh block.
    pub(crate) fn xor(a: &Block, b: &Block) -> Block {
        let mut out = [0u64; WORDS_IN_BLOCK];
        for ((o, x), y) in out.iter_mut().zip(a.0.iter()).zip(b.0.iter()) {
            *o = x ^ y;
        }
        Block(out)
    }

    /// `self ^= other`.
    pub(crate) fn xor_with(&mut self, other: &Block) {
        self.0
            .iter_mut()
            .zip(other.0.iter())
            .for_each(|(a, b)| *a ^= b);
    }

    /// Word-indexed read.
    pub(crate) fn word(&self, index: usize) -> u64 {
        self.0[index]
    }

    /// Decode a block from 1024 little-endian bytes.
    pub(crate) fn from_bytes(bytes: &[u8]) -> Block {
        debug_assert_eq!(bytes.len(), BLOCK_BYTES);
        let mut words = [0u64; WORDS_IN_BLOCK];
        for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(8)) {
            let mut raw = [0u8; 8];
            raw.copy_from_slice(chunk);
            *word = u64::from_le_bytes(raw);
        }
        Block(words)
    }

    /// Encode the block as 1024 little-endian bytes.
    pub(crate) fn to_bytes(&self) -> [u8; BLOCK_BYTES] {
        let mut out = [0u8; BLOCK_BYTES];
        for (chunk, word) in out.chunks_exact_mut(8).zip(self.0.iter()) {
            chunk.copy_from_slice(&word.to_le_bytes());
        }
        out
    }
}

impl Zeroize for Block {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}
