//! Error domain for the hashing driver.
//!
//! Every rejection the driver can produce is a distinct variant with a
//! stable human-readable message. All validation errors are raised before
//! any memory is allocated; [`Error::AllocationFailed`] is the only error
//! that can surface mid-run, and it propagates unchanged.

use thiserror::Error;

/// Errors produced while validating inputs or running the hash.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// Requested tag is shorter than the 4-byte minimum.
    #[error("Output is too short")]
    OutputTooShort,
    /// Requested tag exceeds the 32-bit length field.
    #[error("Output is too long")]
    OutputTooLong,
    /// Password exceeds the 32-bit length field.
    #[error("Password is too long")]
    PwdTooLong,
    /// Salt is shorter than the 8-byte minimum.
    #[error("Salt is too short")]
    SaltTooShort,
    /// Salt exceeds the 32-bit length field.
    #[error("Salt is too long")]
    SaltTooLong,
    /// Secret exceeds the 32-bit length field.
    #[error("Secret is too long")]
    SecretTooLong,
    /// Associated data exceeds the 32-bit length field.
    #[error("Associated data is too long")]
    AdTooLong,
    /// Fewer than one pass requested.
    #[error("Time cost is too small")]
    TimeTooSmall,
    /// Fewer than 8 blocks per lane requested.
    #[error("Memory cost is too small")]
    MemoryTooLittle,
    /// Fewer than one lane requested.
    #[error("Too few lanes")]
    LanesTooFew,
    /// More than 255 lanes requested.
    #[error("Too many lanes")]
    LanesTooMany,
    /// The block allocator could not provide the matrix.
    #[error("Memory allocation error")]
    AllocationFailed,
}
