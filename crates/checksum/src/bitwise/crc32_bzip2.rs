//! Bitwise CRC-32/BZIP2 (non-reflected, MSB-first).
//!
//! Each byte enters the top of the register and the register shifts left:
//!
//! ```text
//! crc ^= byte << 24
//! repeat 8:
//!   mask = 0 - (crc >> 31)
//!   crc = (crc << 1) ^ (POLYNOMIAL_NORMAL & mask)
//! ```
//!
//! Not interchangeable with [`super::crc32`]: same polynomial and seed, but
//! every non-empty input produces a different value.

use crate::constants::crc32::{INIT, POLYNOMIAL_NORMAL, XOR_OUT};

/// Advance a raw CRC-32/BZIP2 register over `data`.
#[inline]
#[must_use]
pub fn compute(mut crc: u32, data: &[u8]) -> u32 {
  for &byte in data {
    crc = compute_byte(crc, byte);
  }
  crc
}

/// Advance the register by a single byte.
#[inline]
#[must_use]
pub const fn compute_byte(mut crc: u32, byte: u8) -> u32 {
  crc ^= (byte as u32) << 24;
  let mut bit = 0;
  while bit < 8 {
    let mask = 0u32.wrapping_sub(crc >> 31);
    crc = (crc << 1) ^ (POLYNOMIAL_NORMAL & mask);
    bit += 1;
  }
  crc
}

/// Complete CRC-32/BZIP2: seed, process, finalize.
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
    assert_eq!(checksum(b"123456789"), 0xFC89_1918);
  }

  #[test]
  fn test_empty() {
    assert_eq!(checksum(b""), 0x0000_0000);
  }

  #[test]
  fn test_sample_vector() {
    assert_eq!(checksum(&[1, 2, 3, 4, 5]), 0x1D70_B47C);
  }

  #[test]
  fn test_differs_from_reflected() {
    let data = [1u8, 2, 3, 4, 5];
    assert_ne!(checksum(&data), super::super::crc32::checksum(&data));
  }
}
