//! CRC-32 computed two ways, plus the harness that proves they agree.
//!
//! # Engines
//!
//! | Function | Strategy | Cost per byte |
//! |----------|----------|---------------|
//! | [`compute_bitwise`] | shift/XOR, one bit per step | 8 steps |
//! | [`compute_table`] | 256-entry lookup, one byte per step | 1 lookup |
//!
//! Both implement CRC-32 (IEEE 802.3 / ISO-HDLC): reflected polynomial
//! `0xEDB88320`, seed and final XOR `0xFFFFFFFF`. The MSB-first variant that
//! shares the polynomial is a different algorithm and lives under its own
//! name, [`Crc32Bzip2`].
//!
//! # Example
//!
//! ```rust
//! use crcduo::{Checksum, ChecksumCombine, Crc32};
//!
//! let data = [1u8, 2, 3, 4, 5];
//!
//! // The two engines
//! assert_eq!(crcduo::compute_bitwise(&data), 0x470B_99F4);
//! assert_eq!(crcduo::compute_table(crcduo::ieee_table(), &data), 0x470B_99F4);
//!
//! // Streaming
//! let mut hasher = Crc32::new();
//! hasher.update(&data[..2]);
//! hasher.update(&data[2..]);
//! assert_eq!(hasher.finalize(), 0x470B_99F4);
//!
//! // Combine
//! let (a, b) = data.split_at(2);
//! assert_eq!(Crc32::combine(Crc32::checksum(a), Crc32::checksum(b), b.len()), 0x470B_99F4);
//!
//! // Every strategy at once
//! assert_eq!(crcduo::verify(&data), Ok(0x470B_99F4));
//! ```
//!
//! # no_std Support
//!
//! The engines, tables and hashers work without `std`. Disable default
//! features for embedded use; [`hex`] needs the `alloc` feature.
//!
//! ```toml
//! [dependencies]
//! crcduo = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod common;
mod constants;
mod crc32;
mod params;

pub mod bitwise;
pub mod dispatchers;
pub mod error;
#[cfg(feature = "alloc")]
pub mod hex;
pub mod verify;

pub use common::tables::Crc32Table;
pub use crc32::{
  Crc32, Crc32Bzip2, build_table, bzip2_table, compute_bitwise, compute_bitwise_bzip2, compute_table, config,
  ieee_table, selected_backend,
};
pub use error::{HexError, MismatchError};
pub use params::{BitOrder, Crc32Params};
// Re-export traits for convenience
pub use traits::{Checksum, ChecksumCombine};
pub use verify::{Verifier, verify};
