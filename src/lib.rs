//! Memory-hard password hashing for Nebula
//!
//! This crate implements the early Argon2 family (algorithm version
//! 0x10): a deterministic, memory-hard function mapping a password, a
//! salt and optional secret/associated data to a fixed-length tag, with
//! tunable memory cost, time cost and parallelism. Five variants share
//! one engine and differ only in how reference blocks are addressed:
//! data-dependent (`Argon2d`), data-independent (`Argon2i`), the two
//! hybrids (`Argon2di`, `Argon2id`) and the S-box variant (`Argon2ds`).
//!
//! The focus is on **clarity, predictability, and auditability**: the
//! memory matrix, the compression function and the addressing rules are
//! each confined to one module with explicit semantics, and the
//! underlying BLAKE2b oracle sits behind a single adapter seam.
//!
//! # Module overview
//!
//! - `block`
//!   The 1024-byte matrix block: little-endian word view, XOR, byte
//!   conversion.
//!
//! - `compress`
//!   The compression function `G` and its permutation, including the
//!   S-box accumulator of `Argon2ds`.
//!
//! - `sbox`
//!   The 8 KiB lookup table derived from the matrix between passes of
//!   the S-box variant.
//!
//! - `reference`
//!   Reference-block selection: the skewed distribution, the per-pass
//!   windows, and the data-independent address streams.
//!
//! - `memory`
//!   The block matrix, the allocator seam, and the fill schedule with
//!   its slice barrier (sequential or pooled execution).
//!
//! - `boundary`
//!   Pre-hashing of all inputs, lane seeding, and finalization into the
//!   output tag.
//!
//! - `core`
//!   Input validation and the public entry points.
//!
//! # Example
//!
//! ```rust,ignore
//! use quern::{hash, Params, Variant};
//!
//! let params = Params::default();
//! let tag = hash(Variant::Argon2id, b"password", b"somesalt_somesalt", &params).unwrap();
//! assert_eq!(tag.len(), 32);
//! ```

mod block;
mod boundary;
mod compress;
mod core;
mod error;
mod hash;
mod memory;
mod params;
mod reference;
mod sbox;
mod variant;

pub use crate::block::Block;
pub use crate::core::{hash, hash_keyed, hash_simple, hash_wiping, hash_with_allocator};
pub use crate::error::Error;
pub use crate::memory::{BlockAllocator, SystemAllocator};
pub use crate::params::{Params, ThreadMode};
pub use crate::variant::Variant;
