//! CRC-32 engines and hashers.
//!
//! This module provides:
//! - [`compute_bitwise`] / [`build_table`] / [`compute_table`]: the two
//!   engines as plain functions
//! - [`Crc32`]: streaming CRC-32 (IEEE), running whichever engine the
//!   [`config`] selects
//! - [`Crc32Bzip2`]: streaming CRC-32/BZIP2, the MSB-first variant
//! - [`ieee_table`] / [`bzip2_table`]: process-wide compute-once tables

pub mod config;
mod portable;

use traits::{Checksum, ChecksumCombine};

use self::config::Strategy;
use crate::{
  bitwise,
  common::{
    cache::TableCache,
    combine::{Gf2Matrix32, combine_crc32, generate_shift8_matrix_32},
    tables::Crc32Table,
  },
  constants::crc32::{INIT, XOR_OUT},
  dispatchers::{Crc32Dispatcher, Crc32Fn, Selected},
  params::Crc32Params,
};

// ─────────────────────────────────────────────────────────────────────────────
// Engines
// ─────────────────────────────────────────────────────────────────────────────

/// CRC-32 (IEEE) of `data`, one bit per step.
///
/// ```
/// assert_eq!(crcduo::compute_bitwise(&[1, 2, 3, 4, 5]), 0x470B_99F4);
/// assert_eq!(crcduo::compute_bitwise(&[]), 0x0000_0000);
/// ```
#[inline]
#[must_use]
pub fn compute_bitwise(data: &[u8]) -> u32 {
  bitwise::crc32::checksum(data)
}

/// CRC-32/BZIP2 of `data`, one bit per step.
#[inline]
#[must_use]
pub fn compute_bitwise_bzip2(data: &[u8]) -> u32 {
  bitwise::crc32_bzip2::checksum(data)
}

/// Build the CRC-32 (IEEE) lookup table.
///
/// Pure and deterministic; callers that want the process-wide copy should use
/// [`ieee_table`].
#[inline]
#[must_use]
pub const fn build_table() -> Crc32Table {
  Crc32Table::new(&Crc32Params::IEEE)
}

/// Checksum of `data` using `table`, one byte per step.
///
/// ```
/// let table = crcduo::build_table();
/// assert_eq!(crcduo::compute_table(&table, &[1, 2, 3, 4, 5]), 0x470B_99F4);
/// ```
#[inline]
#[must_use]
pub fn compute_table(table: &Crc32Table, data: &[u8]) -> u32 {
  table.checksum(data)
}

static IEEE_TABLE: TableCache = TableCache::new(Crc32Params::IEEE);
static BZIP2_TABLE: TableCache = TableCache::new(Crc32Params::BZIP2);

/// Process-wide CRC-32 (IEEE) table, built on first use.
#[inline]
pub fn ieee_table() -> &'static Crc32Table {
  IEEE_TABLE.get()
}

/// Process-wide CRC-32/BZIP2 table, built on first use.
#[inline]
pub fn bzip2_table() -> &'static Crc32Table {
  BZIP2_TABLE.get()
}

// ─────────────────────────────────────────────────────────────────────────────
// Dispatcher Selection
// ─────────────────────────────────────────────────────────────────────────────

/// Kernel for a concrete strategy.
#[must_use]
pub(crate) fn kernel_for(strategy: Strategy) -> Selected<Crc32Fn> {
  match strategy.resolve() {
    Strategy::Bitwise => Selected::new(portable::BITWISE_KERNEL_NAME, portable::crc32_bitwise),
    Strategy::Table | Strategy::Auto => Selected::new(portable::TABLE_KERNEL_NAME, portable::crc32_table),
  }
}

fn select_crc32_ieee() -> Selected<Crc32Fn> {
  let cfg = config::get();
  if cfg.requested != Strategy::Auto {
    log::debug!("crc32 strategy forced to {}", cfg.requested);
  }
  kernel_for(cfg.effective)
}

static CRC32_IEEE_DISPATCHER: Crc32Dispatcher = Crc32Dispatcher::new(select_crc32_ieee);

/// Name of the kernel the streaming [`Crc32`] hasher uses in this process.
#[must_use]
pub fn selected_backend() -> &'static str {
  CRC32_IEEE_DISPATCHER.backend_name()
}

// ─────────────────────────────────────────────────────────────────────────────
// CRC-32 IEEE
// ─────────────────────────────────────────────────────────────────────────────

/// CRC-32 checksum (IEEE 802.3 / ISO-HDLC).
///
/// # Properties
///
/// - **Polynomial**: 0x04C11DB7 (normal), 0xEDB88320 (reflected)
/// - **Initial value**: 0xFFFFFFFF
/// - **Final XOR**: 0xFFFFFFFF
/// - **Reflect input/output**: Yes
///
/// # Example
///
/// ```
/// use crcduo::{Checksum, Crc32};
///
/// assert_eq!(Crc32::checksum(b"123456789"), 0xCBF4_3926);
///
/// let mut hasher = Crc32::new();
/// hasher.update(&[1, 2]);
/// hasher.update(&[3, 4, 5]);
/// assert_eq!(hasher.finalize(), 0x470B_99F4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Crc32 {
  state: u32,
}

impl Crc32 {
  /// Pre-computed shift-by-8 matrix for combine.
  const SHIFT8_MATRIX: Gf2Matrix32 =
    generate_shift8_matrix_32(Crc32Params::IEEE.register_polynomial(), Crc32Params::IEEE.bit_order);

  /// Create a hasher to resume from a previously finalized CRC value.
  #[inline]
  #[must_use]
  pub const fn resume(crc: u32) -> Self {
    Self { state: crc ^ XOR_OUT }
  }

  /// Name of the kernel in use (`"portable/table"` or `"portable/bitwise"`).
  #[must_use]
  pub fn backend_name() -> &'static str {
    selected_backend()
  }
}

impl Default for Crc32 {
  #[inline]
  fn default() -> Self {
    <Self as Checksum>::new()
  }
}

impl Checksum for Crc32 {
  const OUTPUT_SIZE: usize = 4;
  type Output = u32;

  #[inline]
  fn new() -> Self {
    Self { state: INIT }
  }

  #[inline]
  fn with_initial(initial: u32) -> Self {
    Self::resume(initial)
  }

  #[inline]
  fn update(&mut self, data: &[u8]) {
    self.state = CRC32_IEEE_DISPATCHER.call(self.state, data);
  }

  #[inline]
  fn finalize(&self) -> u32 {
    self.state ^ XOR_OUT
  }

  #[inline]
  fn reset(&mut self) {
    self.state = INIT;
  }
}

impl ChecksumCombine for Crc32 {
  fn combine(crc_a: u32, crc_b: u32, len_b: usize) -> u32 {
    combine_crc32(crc_a, crc_b, len_b, Self::SHIFT8_MATRIX)
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// CRC-32/BZIP2
// ─────────────────────────────────────────────────────────────────────────────

/// CRC-32/BZIP2 checksum (MSB-first).
///
/// Shares polynomial, seed and final XOR with [`Crc32`] but processes bits
/// most-significant first. Its values are not CRC-32 (IEEE) values.
///
/// # Properties
///
/// - **Polynomial**: 0x04C11DB7
/// - **Initial value**: 0xFFFFFFFF
/// - **Final XOR**: 0xFFFFFFFF
/// - **Reflect input/output**: No
///
/// ```
/// use crcduo::{Checksum, Crc32, Crc32Bzip2};
///
/// assert_eq!(Crc32Bzip2::checksum(&[1, 2, 3, 4, 5]), 0x1D70_B47C);
/// assert_ne!(Crc32Bzip2::checksum(&[1, 2, 3, 4, 5]), Crc32::checksum(&[1, 2, 3, 4, 5]));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Crc32Bzip2 {
  state: u32,
}

impl Crc32Bzip2 {
  const SHIFT8_MATRIX: Gf2Matrix32 =
    generate_shift8_matrix_32(Crc32Params::BZIP2.register_polynomial(), Crc32Params::BZIP2.bit_order);

  /// Create a hasher to resume from a previously finalized CRC value.
  #[inline]
  #[must_use]
  pub const fn resume(crc: u32) -> Self {
    Self { state: crc ^ XOR_OUT }
  }
}

impl Default for Crc32Bzip2 {
  #[inline]
  fn default() -> Self {
    <Self as Checksum>::new()
  }
}

impl Checksum for Crc32Bzip2 {
  const OUTPUT_SIZE: usize = 4;
  type Output = u32;

  #[inline]
  fn new() -> Self {
    Self { state: INIT }
  }

  #[inline]
  fn with_initial(initial: u32) -> Self {
    Self::resume(initial)
  }

  #[inline]
  fn update(&mut self, data: &[u8]) {
    self.state = portable::crc32_bzip2_table(self.state, data);
  }

  #[inline]
  fn finalize(&self) -> u32 {
    self.state ^ XOR_OUT
  }

  #[inline]
  fn reset(&mut self) {
    self.state = INIT;
  }
}

impl ChecksumCombine for Crc32Bzip2 {
  fn combine(crc_a: u32, crc_b: u32, len_b: usize) -> u32 {
    combine_crc32(crc_a, crc_b, len_b, Self::SHIFT8_MATRIX)
  }
}

#[cfg(all(test, feature = "std"))]
mod proptests;

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  const SAMPLE: &[u8] = &[1, 2, 3, 4, 5];
  const TEST_DATA: &[u8] = b"123456789";

  #[test]
  fn test_empty_input() {
    assert_eq!(compute_bitwise(&[]), 0x0000_0000);
    assert_eq!(compute_table(&build_table(), &[]), 0x0000_0000);
    assert_eq!(Crc32::checksum(&[]), 0x0000_0000);
    assert_eq!(Crc32Bzip2::checksum(&[]), 0x0000_0000);
  }

  #[test]
  fn test_sample_vector() {
    assert_eq!(compute_bitwise(SAMPLE), 0x470B_99F4);
    assert_eq!(compute_table(&build_table(), SAMPLE), 0x470B_99F4);
    assert_eq!(compute_table(ieee_table(), SAMPLE), 0x470B_99F4);
    assert_eq!(Crc32::checksum(SAMPLE), 0x470B_99F4);
  }

  #[test]
  fn test_check_values() {
    assert_eq!(Crc32::checksum(TEST_DATA), Crc32Params::IEEE.check);
    assert_eq!(Crc32Bzip2::checksum(TEST_DATA), Crc32Params::BZIP2.check);
    assert_eq!(compute_bitwise_bzip2(TEST_DATA), Crc32Params::BZIP2.check);
  }

  #[test]
  fn test_variants_not_interchangeable() {
    assert_ne!(compute_bitwise(SAMPLE), compute_bitwise_bzip2(SAMPLE));
    assert_eq!(compute_bitwise_bzip2(SAMPLE), 0x1D70_B47C);
  }

  #[test]
  fn test_build_table_is_invariant() {
    let a = build_table();
    let b = build_table();
    assert_eq!(a, b);
    assert_eq!(a.as_array().len(), 256);
    assert_eq!(a[0], 0);
    assert_eq!(&a, ieee_table());
  }

  #[test]
  fn test_cached_tables_are_shared() {
    assert!(core::ptr::eq(ieee_table(), ieee_table()));
    assert!(core::ptr::eq(bzip2_table(), bzip2_table()));
  }

  #[test]
  fn test_kernel_names() {
    assert_eq!(kernel_for(Strategy::Auto).name, "portable/table");
    assert_eq!(kernel_for(Strategy::Table).name, "portable/table");
    assert_eq!(kernel_for(Strategy::Bitwise).name, "portable/bitwise");
    let name = Crc32::backend_name();
    assert!(name == "portable/table" || name == "portable/bitwise");
  }

  #[test]
  fn test_crc32_streaming() {
    let oneshot = Crc32::checksum(TEST_DATA);

    let mut hasher = Crc32::new();
    hasher.update(&TEST_DATA[..5]);
    hasher.update(&TEST_DATA[5..]);
    assert_eq!(hasher.finalize(), oneshot);
    assert_eq!(hasher.finalize(), oneshot);
  }

  #[test]
  fn test_resume_and_with_initial() {
    let (a, b) = SAMPLE.split_at(3);
    let mut r = Crc32::resume(Crc32::checksum(a));
    r.update(b);
    assert_eq!(r.finalize(), 0x470B_99F4);

    let mut w = Crc32Bzip2::with_initial(Crc32Bzip2::checksum(a));
    w.update(b);
    assert_eq!(w.finalize(), 0x1D70_B47C);
  }

  #[test]
  fn test_reset() {
    let mut h = Crc32::new();
    h.update(b"junk");
    h.reset();
    assert_eq!(h, Crc32::default());
    h.update(SAMPLE);
    assert_eq!(h.finalize(), 0x470B_99F4);
  }

  #[test]
  fn test_combine() {
    for split in 0..=TEST_DATA.len() {
      let (a, b) = TEST_DATA.split_at(split);
      assert_eq!(Crc32::combine(Crc32::checksum(a), Crc32::checksum(b), b.len()), 0xCBF4_3926);
      assert_eq!(Crc32Bzip2::combine(Crc32Bzip2::checksum(a), Crc32Bzip2::checksum(b), b.len()), 0xFC89_1918);
    }
  }

  #[test]
  fn test_single_byte_mutation_changes_checksum() {
    let base = compute_bitwise(SAMPLE);
    for i in 0..SAMPLE.len() {
      let mut mutated = [0u8; 5];
      mutated.copy_from_slice(SAMPLE);
      mutated[i] ^= 0x01;
      assert_ne!(compute_bitwise(&mutated), base, "flip in byte {i}");
      assert_ne!(compute_table(ieee_table(), &mutated), base, "flip in byte {i}");
    }
  }
}
