//! Polynomial and register constants for the CRC-32 variants.
//!
//! Lookup tables are 64-byte (cache line) aligned using [`Aligned64`] so a
//! 1 KiB table spans exactly 16 lines and no entry straddles two.

pub mod crc32;

/// Wrapper type to force 64-byte (cache line) alignment.
///
/// The inner type `T` is accessible via `.0`.
#[derive(Clone, Copy, PartialEq, Eq)]
#[repr(align(64))]
pub struct Aligned64<T>(pub T);
