//! Portable CRC-32 kernels.
//!
//! Every kernel has the [`Crc32Fn`](crate::dispatchers::Crc32Fn) shape: it
//! advances a raw register and leaves seeding and finalization to the caller.

use super::{bzip2_table, ieee_table};
use crate::bitwise;

/// Kernel name for the bit-at-a-time engine.
pub(crate) const BITWISE_KERNEL_NAME: &str = "portable/bitwise";

/// Kernel name for the byte-at-a-time table engine.
pub(crate) const TABLE_KERNEL_NAME: &str = "portable/table";

/// CRC-32 (IEEE) bit-at-a-time.
#[inline]
pub fn crc32_bitwise(crc: u32, data: &[u8]) -> u32 {
  bitwise::crc32::compute(crc, data)
}

/// CRC-32 (IEEE) byte-at-a-time through the cached table.
#[inline]
pub fn crc32_table(crc: u32, data: &[u8]) -> u32 {
  ieee_table().update(crc, data)
}

/// CRC-32/BZIP2 byte-at-a-time through the cached table.
#[inline]
pub fn crc32_bzip2_table(crc: u32, data: &[u8]) -> u32 {
  bzip2_table().update(crc, data)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn kernels_agree_on_raw_register() {
    let data = b"The quick brown fox jumps over the lazy dog";
    for seed in [0u32, 0xFFFF_FFFF, 0x1234_5678] {
      assert_eq!(crc32_bitwise(seed, data), crc32_table(seed, data));
    }
  }

  #[test]
  fn bzip2_kernel_matches_bitwise() {
    let data = b"The quick brown fox jumps over the lazy dog";
    assert_eq!(crc32_bzip2_table(!0, data), bitwise::crc32_bzip2::compute(!0, data));
  }
}
