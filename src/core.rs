//! The hashing driver.
//!
//! Entry points validate every input before any allocation happens, bind
//! the inputs with the pre-hash, then hand the matrix to the scheduler
//! and fold it into the tag.

use zeroize::Zeroize;

use crate::boundary;
use crate::error::Error;
use crate::hash::DIGEST_LENGTH;
use crate::memory::{self, BlockAllocator, Layout, Memory, SystemAllocator};
use crate::params::{Params, ThreadMode};
use crate::variant::Variant;

const MIN_TAG_LENGTH: usize = 4;
const MIN_SALT_LENGTH: usize = 8;
/// Lengths travel as 32-bit words in the pre-hash.
const MAX_LENGTH: usize = u32::MAX as usize;
const MAX_LANES: u32 = 255;

/// Hash `pwd` with `salt` under the given variant and parameters.
///
/// # Example
///
/// ```rust,ignore
/// use quern::{hash, Params, Variant};
///
/// let params = Params { mem_cost: 65536, ..Params::default() };
/// let tag = hash(Variant::Argon2id, b"password", b"somesalt_16bytes", &params)?;
/// ```
pub fn hash(
    variant: Variant,
    pwd: &[u8],
    salt: &[u8],
    params: &Params,
) -> Result<Vec<u8>, Error> {
    hash_with_allocator(variant, pwd, salt, &[], &[], params, &SystemAllocator)
}

/// [`hash`] with an additional secret key and associated data bound into
/// the pre-hash.
pub fn hash_keyed(
    variant: Variant,
    pwd: &[u8],
    salt: &[u8],
    secret: &[u8],
    ad: &[u8],
    params: &Params,
) -> Result<Vec<u8>, Error> {
    hash_with_allocator(variant, pwd, salt, secret, ad, params, &SystemAllocator)
}

/// [`hash_keyed`] with the matrix drawn from a caller-supplied allocator.
pub fn hash_with_allocator<A: BlockAllocator>(
    variant: Variant,
    pwd: &[u8],
    salt: &[u8],
    secret: &[u8],
    ad: &[u8],
    params: &Params,
    allocator: &A,
) -> Result<Vec<u8>, Error> {
    check_inputs(pwd, salt, secret, ad, params)?;
    let h0 = boundary::initial_hash(variant, pwd, salt, secret, ad, params);
    complete(variant, h0, params, allocator)
}

/// [`hash_keyed`] for callers that want their password and secret wiped:
/// both buffers are overwritten with zeros as soon as the pre-hash has
/// absorbed them, before any memory-filling work starts.
pub fn hash_wiping(
    variant: Variant,
    pwd: &mut [u8],
    salt: &[u8],
    secret: &mut [u8],
    ad: &[u8],
    params: &Params,
) -> Result<Vec<u8>, Error> {
    check_inputs(pwd, salt, secret, ad, params)?;
    let h0 = boundary::initial_hash(variant, pwd, salt, secret, ad, params);
    pwd.zeroize();
    secret.zeroize();
    complete(variant, h0, params, &SystemAllocator)
}

/// Single-lane convenience entry: Argon2d, sequential, one lane.
///
/// The lane pin is deliberate; callers that want parallelism use [`hash`]
/// with explicit [`Params`].
pub fn hash_simple(
    pwd: &[u8],
    salt: &[u8],
    time_cost: u32,
    mem_cost: u32,
    tag_len: usize,
) -> Result<Vec<u8>, Error> {
    let params = Params {
        mem_cost,
        time_cost,
        lanes: 1,
        tag_len,
        thread_mode: ThreadMode::Sequential,
        clear_memory: false,
    };
    hash(Variant::Argon2d, pwd, salt, &params)
}

/// Validate every bound before touching memory. Each violation maps to
/// its own [`Error`] variant.
fn check_inputs(
    pwd: &[u8],
    salt: &[u8],
    secret: &[u8],
    ad: &[u8],
    params: &Params,
) -> Result<(), Error> {
    if params.tag_len < MIN_TAG_LENGTH {
        return Err(Error::OutputTooShort);
    }
    if params.tag_len > MAX_LENGTH {
        return Err(Error::OutputTooLong);
    }
    if pwd.len() > MAX_LENGTH {
        return Err(Error::PwdTooLong);
    }
    if salt.len() < MIN_SALT_LENGTH {
        return Err(Error::SaltTooShort);
    }
    if salt.len() > MAX_LENGTH {
        return Err(Error::SaltTooLong);
    }
    if secret.len() > MAX_LENGTH {
        return Err(Error::SecretTooLong);
    }
    if ad.len() > MAX_LENGTH {
        return Err(Error::AdTooLong);
    }
    if params.time_cost < 1 {
        return Err(Error::TimeTooSmall);
    }
    if params.lanes < 1 {
        return Err(Error::LanesTooFew);
    }
    if params.lanes > MAX_LANES {
        return Err(Error::LanesTooMany);
    }
    if params.mem_cost < 8 * params.lanes {
        return Err(Error::MemoryTooLittle);
    }
    Ok(())
}

/// Allocate, seed, fill and finalize.
fn complete<A: BlockAllocator>(
    variant: Variant,
    mut h0: [u8; DIGEST_LENGTH],
    params: &Params,
    allocator: &A,
) -> Result<Vec<u8>, Error> {
    let layout = Layout::new(params.mem_cost, params.lanes);
    let mut memory = Memory::allocate(layout, allocator)?;

    boundary::seed_first_blocks(&mut memory, &h0);
    h0.zeroize();

    memory::fill(&mut memory, variant, params.time_cost, params.thread_mode);

    let tag = boundary::finalize(&memory, params.tag_len);
    if params.clear_memory {
        memory.wipe();
    }
    Ok(tag)
}
