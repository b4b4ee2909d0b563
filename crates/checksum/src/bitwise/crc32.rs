//! Bitwise CRC-32 (ISO-HDLC, reflected).
//!
//! ```text
//! crc ^= byte
//! repeat 8:
//!   mask = 0 - (crc & 1)    // 0x00000000 or 0xFFFFFFFF
//!   crc = (crc >> 1) ^ (POLYNOMIAL & mask)
//! ```

use crate::constants::crc32::{INIT, POLYNOMIAL, XOR_OUT};

/// Advance a raw CRC-32 register over `data`.
///
/// The caller owns seeding and finalization; see [`checksum`] for the
/// complete computation.
///
/// # Example
///
/// ```
/// use crcduo::bitwise::crc32::compute;
///
/// let crc = compute(0xFFFF_FFFF, b"123456789") ^ 0xFFFF_FFFF;
/// assert_eq!(crc, 0xCBF4_3926);
/// ```
#[inline]
#[must_use]
pub fn compute(mut crc: u32, data: &[u8]) -> u32 {
  for &byte in data {
    crc = compute_byte(crc, byte);
  }
  crc
}

/// Advance the register by a single byte.
///
/// `const` so check values can be asserted at compile time.
#[inline]
#[must_use]
pub const fn compute_byte(mut crc: u32, byte: u8) -> u32 {
  crc ^= byte as u32;
  let mut bit = 0;
  while bit < 8 {
    let mask = 0u32.wrapping_sub(crc & 1);
    crc = (crc >> 1) ^ (POLYNOMIAL & mask);
    bit += 1;
  }
  crc
}

/// Complete CRC-32: seed, process, finalize.
///
/// Empty input yields `0x0000_0000`.
#[inline]
#[must_use]
pub fn checksum(data: &[u8]) -> u32 {
  compute(INIT, data) ^ XOR_OUT
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_check_value() {
    assert_eq!(checksum(b"123456789"), 0xCBF4_3926);
  }

  #[test]
  fn test_empty() {
    assert_eq!(checksum(b""), 0x0000_0000);
  }

  #[test]
  fn test_sample_vector() {
    assert_eq!(checksum(&[1, 2, 3, 4, 5]), 0x470B_99F4);
  }

  #[test]
  fn test_single_byte() {
    assert_eq!(checksum(&[0x00]), 0xD202_EF8D);
  }

  #[test]
  fn test_incremental() {
    let data = b"hello world";
    let oneshot = checksum(data);

    for split in 0..=data.len() {
      let (a, b) = data.split_at(split);
      let crc = compute(compute(INIT, a), b) ^ XOR_OUT;
      assert_eq!(crc, oneshot, "mismatch at split {}", split);
    }
  }

  #[test]
  fn test_const_computation() {
    const CRC_OF_ZERO: u32 = compute_byte(0xFFFF_FFFF, 0x00);
    assert_eq!(CRC_OF_ZERO ^ 0xFFFF_FFFF, 0xD202_EF8D);
  }
}
