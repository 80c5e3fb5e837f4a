//! Initialization and finalization.
//!
//! The pre-hash binds every input and parameter into a 64-byte digest
//! `H0`; `H0` seeds the first two blocks of each lane, and after the fill
//! the last column of the matrix is folded into the output tag.

use zeroize::Zeroize;

use crate::block::{Block, BLOCK_BYTES};
use crate::hash::{blake2b, blake2b_long, DIGEST_LENGTH};
use crate::memory::Memory;
use crate::params::Params;
use crate::variant::Variant;

/// Algorithm version absorbed by the pre-hash.
pub(crate) const VERSION: u32 = 0x10;

/// Compute `H0` over the parameters and inputs.
///
/// Layout: `le32(lanes) le32(tag_len) le32(m_cost) le32(t_cost)
/// le32(version) le32(variant)` followed by each of password, salt,
/// secret and associated data prefixed with its `le32` length. The parts
/// are streamed straight into the oracle; no concatenated copy of the
/// password is ever made.
pub(crate) fn initial_hash(
    variant: Variant,
    pwd: &[u8],
    salt: &[u8],
    secret: &[u8],
    ad: &[u8],
    params: &Params,
) -> [u8; DIGEST_LENGTH] {
    blake2b(&[
        &params.lanes.to_le_bytes(),
        &(params.tag_len as u32).to_le_bytes(),
        &params.mem_cost.to_le_bytes(),
        &params.time_cost.to_le_bytes(),
        &VERSION.to_le_bytes(),
        &variant.tag().to_le_bytes(),
        &(pwd.len() as u32).to_le_bytes(),
        pwd,
        &(salt.len() as u32).to_le_bytes(),
        salt,
        &(secret.len() as u32).to_le_bytes(),
        secret,
        &(ad.len() as u32).to_le_bytes(),
        ad,
    ])
}

/// Seed blocks 0 and 1 of every lane with `H'(H0 || le32(slot) ||
/// le32(lane), 1024)`.
pub(crate) fn seed_first_blocks(memory: &mut Memory, h0: &[u8; DIGEST_LENGTH]) {
    let lanes = memory.layout().lanes;
    let mut seed = [0u8; DIGEST_LENGTH + 8];
    seed[..DIGEST_LENGTH].copy_from_slice(h0);

    for lane in 0..lanes {
        for slot in 0..2u32 {
            seed[DIGEST_LENGTH..DIGEST_LENGTH + 4].copy_from_slice(&slot.to_le_bytes());
            seed[DIGEST_LENGTH + 4..].copy_from_slice(&lane.to_le_bytes());

            let mut bytes = blake2b_long(BLOCK_BYTES, &seed);
            let index = memory.layout().index(lane, slot);
            *memory.block_mut(index) = Block::from_bytes(&bytes);
            bytes.zeroize();
        }
    }
    seed.zeroize();
}

/// XOR the last block of every lane and extend the result to the tag.
pub(crate) fn finalize(memory: &Memory, tag_len: usize) -> Vec<u8> {
    let layout = memory.layout();
    let last = layout.lane_length - 1;

    let mut folded = memory.block(layout.index(0, last)).clone();
    for lane in 1..layout.lanes {
        folded.xor_with(memory.block(layout.index(lane, last)));
    }

    let mut bytes = folded.to_bytes();
    let tag = blake2b_long(tag_len, &bytes);
    bytes.zeroize();
    folded.zeroize();
    tag
}
