//! Checksum traits shared by the crcduo crates.
//!
//! This crate defines the interface every CRC-32 engine in the workspace
//! conforms to. It is `no_std` compatible and has zero dependencies.
//!
//! | Trait | Purpose |
//! |-------|---------|
//! | [`Checksum`] | One-shot and streaming checksum computation |
//! | [`ChecksumCombine`] | `crc(A || B)` from `crc(A)`, `crc(B)` and `len(B)` |
//!
//! With the `std` feature, [`io`] provides `Read`/`Write` adapters that
//! checksum data as it passes through.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod checksum;
#[cfg(feature = "std")]
pub mod io;

pub use checksum::{Checksum, ChecksumCombine};
