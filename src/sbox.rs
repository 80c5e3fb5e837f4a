//! The 8 KiB S-box used by the data-dependent S-box variant.
//!
//! The table is derived from the first matrix block after each pass and
//! consumed by every compression of the following pass, so the lookups
//! depend on matrix contents in a way that is expensive to shortcut in
//! hardware. During pass 0 no table exists yet and the compressor runs
//! without the mixing step.

use crate::block::Block;
use crate::compress::compress;
use zeroize::Zeroize;

/// Number of 64-bit words in the table.
const SBOX_WORDS: usize = 1024;

/// Index mask for one half of the table.
const SBOX_MASK: u64 = (SBOX_WORDS as u64 / 2) - 1;

/// Iterations of the lookup-multiply accumulator per compression.
const MIX_ROUNDS: usize = 96;

/// Words extracted from each chained compression while generating.
const WORDS_PER_STEP: usize = 64;

pub(crate) struct Sbox(Box<[u64; SBOX_WORDS]>);

impl Sbox {
    /// Derive the table from `seed` (the first block of the matrix) by
    /// chaining `G(t, t)` and collecting the leading words of each link.
    pub(crate) fn generate(seed: &Block) -> Self {
        let mut table = Box::new([0u64; SBOX_WORDS]);
        let mut link = seed.clone();
        for chunk in table.chunks_exact_mut(WORDS_PER_STEP) {
            link = compress(&link, &link, None);
            chunk.copy_from_slice(&link.0[..WORDS_PER_STEP]);
        }
        link.zeroize();
        Sbox(table)
    }

    /// Run the 96-round accumulator: each round fetches one word from
    /// either half of the table using the halves of the running state as
    /// indices, multiplies those halves, and folds the fetched words in.
    pub(crate) fn mix(&self, seed: u64) -> u64 {
        let mut x = seed;
        for _ in 0..MIX_ROUNDS {
            let hi = x >> 32;
            let lo = x & 0xFFFF_FFFF;
            let y = self.0[(hi & SBOX_MASK) as usize];
            let z = self.0[SBOX_WORDS / 2 + (lo & SBOX_MASK) as usize];
            x = hi.wrapping_mul(lo).wrapping_add(y) ^ z;
        }
        x
    }
}

impl Drop for Sbox {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}
