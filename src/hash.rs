//! Adapter over the external hash oracle.
//!
//! The core consumes the oracle through two operations: `H`, a fixed
//! 64-byte digest over arbitrary input, and `H'`, a variable-length
//! extension built by chaining `H`. BLAKE2b-512 is the concrete oracle;
//! everything algorithm-specific about it stays behind this module.

use blake2::{Blake2b512, Digest};

/// Output size of the fixed oracle `H`.
pub(crate) const DIGEST_LENGTH: usize = 64;

/// Bytes emitted per chaining step of `H'` for long outputs.
const CHAIN_BYTES: usize = 32;

/// `H`: hash the concatenation of `parts` to 64 bytes.
pub(crate) fn blake2b(parts: &[&[u8]]) -> [u8; DIGEST_LENGTH] {
    let mut state = Blake2b512::new();
    for part in parts {
        state.update(part);
    }
    let mut out = [0u8; DIGEST_LENGTH];
    out.copy_from_slice(&state.finalize());
    out
}

/// `H'`: derive `out_len` bytes from `input`.
///
/// The requested length is absorbed first, so different lengths never
/// share a prefix. Short outputs truncate a single `H` call; longer ones
/// chain `H`, emitting 32 bytes per intermediate digest and the whole
/// (or truncated) final digest.
pub(crate) fn blake2b_long(out_len: usize, input: &[u8]) -> Vec<u8> {
    let mut state = Blake2b512::new();
    state.update((out_len as u32).to_le_bytes());
    state.update(input);
    let mut chunk = state.finalize();

    let mut out = Vec::with_capacity(out_len);
    if out_len <= DIGEST_LENGTH {
        out.extend_from_slice(&chunk[..out_len]);
        return out;
    }

    let mut remaining = out_len;
    while remaining > DIGEST_LENGTH {
        out.extend_from_slice(&chunk[..CHAIN_BYTES]);
        remaining -= CHAIN_BYTES;
        chunk = Blake2b512::digest(&chunk);
    }
    out.extend_from_slice(&chunk[..remaining]);
    out
}
