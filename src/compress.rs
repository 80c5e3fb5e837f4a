//! The compression function `G`.
//!
//! `G(prev, ref)` XORs its inputs into `R`, runs the permutation `P` over
//! the eight 128-byte rows and then the eight 16-byte-wide columns of a
//! copy of `R`, and XORs `R` back in. `P` is one round of the BLAKE2b
//! quarter-function with the lower-half multiplication mixed into each
//! addition. The S-box variant threads an extra 96-round lookup-multiply
//! accumulator through the middle of the permutation.

use crate::block::{Block, WORDS_IN_BLOCK};
use crate::sbox::Sbox;

/// `a + b + 2 * lo32(a) * lo32(b)`, all wrapping.
#[inline(always)]
fn mix(x: u64, y: u64) -> u64 {
    let m = 0xFFFF_FFFFu64;
    let xy = (x & m).wrapping_mul(y & m);
    x.wrapping_add(y).wrapping_add(xy.wrapping_add(xy))
}

/// The doubled-width BLAKE2b mixing step.
#[inline(always)]
fn gb(mut a: u64, mut b: u64, mut c: u64, mut d: u64) -> (u64, u64, u64, u64) {
    a = mix(a, b);
    d = (d ^ a).rotate_right(32);
    c = mix(c, d);
    b = (b ^ c).rotate_right(24);
    a = mix(a, b);
    d = (d ^ a).rotate_right(16);
    c = mix(c, d);
    b = (b ^ c).rotate_right(63);
    (a, b, c, d)
}

/// Permutation `P`: `gb` over the four columns, then the four diagonals,
/// of the sixteen words viewed as a 4x4 matrix of word pairs.
fn permute(v: &mut [u64; 16]) {
    const COLUMNS: [[usize; 4]; 4] = [[0, 4, 8, 12], [1, 5, 9, 13], [2, 6, 10, 14], [3, 7, 11, 15]];
    const DIAGONALS: [[usize; 4]; 4] =
        [[0, 5, 10, 15], [1, 6, 11, 12], [2, 7, 8, 13], [3, 4, 9, 14]];

    for &[a, b, c, d] in COLUMNS.iter().chain(DIAGONALS.iter()) {
        let (na, nb, nc, nd) = gb(v[a], v[b], v[c], v[d]);
        v[a] = na;
        v[b] = nb;
        v[c] = nc;
        v[d] = nd;
    }
}

/// Compute `G(prev, reference)`, consulting `sbox` when the S-box variant
/// is running.
pub(crate) fn compress(prev: &Block, reference: &Block, sbox: Option<&Sbox>) -> Block {
    let r = Block::xor(prev, reference);
    let mut z = r.clone();

    // Rows: eight groups of sixteen consecutive words.
    for row in 0..8 {
        let base = 16 * row;
        let mut v = [0u64; 16];
        v.copy_from_slice(&z.0[base..base + 16]);
        permute(&mut v);
        z.0[base..base + 16].copy_from_slice(&v);
    }

    // The S-box accumulator runs between the row and column passes and is
    // folded into the output after the final XOR.
    let acc = sbox.map(|s| s.mix(r.0[0] ^ r.0[WORDS_IN_BLOCK - 1]));

    // Columns: eight groups of word pairs with stride sixteen.
    for col in 0..8 {
        let mut v = [0u64; 16];
        for k in 0..8 {
            v[2 * k] = z.0[2 * col + 16 * k];
            v[2 * k + 1] = z.0[2 * col + 16 * k + 1];
        }
        permute(&mut v);
        for k in 0..8 {
            z.0[2 * col + 16 * k] = v[2 * k];
            z.0[2 * col + 16 * k + 1] = v[2 * k + 1];
        }
    }

    z.xor_with(&r);

    if let Some(x) = acc {
        z.0[0] = z.0[0].wrapping_add(x);
        z.0[WORDS_IN_BLOCK - 1] = z.0[WORDS_IN_BLOCK - 1].wrapping_add(x);
    }
    z
}
