//! The five algorithmic variants.
//!
//! All variants share the same matrix layout, compression function and
//! finalization; they differ in how the pseudo-random word driving
//! reference-block selection is obtained, and (for [`Variant::Argon2ds`])
//! in an extra S-box mixing step inside the compressor.

use crate::memory::SYNC_POINTS;

/// Selector for the hashing variant. The discriminant is encoded into the
/// pre-hash, so two variants never produce the same tag for the same
/// inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    /// Data-dependent addressing everywhere. Fastest, strongest against
    /// time-memory trade-offs, but leaks an address trace.
    Argon2d = 0,
    /// Data-independent addressing everywhere. Side-channel resistant.
    Argon2i = 1,
    /// Hybrid: data-dependent while the matrix is first being populated
    /// (pass 0, slices 0-1), data-independent afterwards.
    Argon2di = 2,
    /// Hybrid: data-independent while the matrix is first being populated
    /// (pass 0, slices 0-1), data-dependent afterwards.
    Argon2id = 3,
    /// Data-dependent addressing plus S-box mixing inside the compressor.
    Argon2ds = 4,
}

impl Variant {
    /// Numeric tag absorbed by the pre-hash and the address-stream input
    /// block.
    pub(crate) fn tag(self) -> u32 {
        self as u32
    }

    /// Whether the segment at `(pass, slice)` draws its pseudo-random
    /// words from the precomputed address stream instead of the previous
    /// block.
    pub(crate) fn data_independent(self, pass: u32, slice: u32) -> bool {
        match self {
            Variant::Argon2d | Variant::Argon2ds => false,
            Variant::Argon2i => true,
            Variant::Argon2id => pass == 0 && slice < SYNC_POINTS / 2,
            Variant::Argon2di => !(pass == 0 && slice < SYNC_POINTS / 2),
        }
    }

    /// Whether the compressor consults the S-box.
    pub(crate) fn uses_sbox(self) -> bool {
        self == Variant::Argon2ds
    }
}
