//! GF(2) matrix operations for CRC-32 combination.
//!
//! Given `crc(A)` and `crc(B)`, `crc(A || B)` can be computed without
//! reprocessing `A`:
//!
//! ```text
//! crc(A || B) = crc(A) * x^(8*len(B)) mod G(x) XOR crc(B)
//! ```
//!
//! Multiplying by `x^(8*len(B))` is the matrix for "append `len(B)` zero
//! bytes", raised to a power by square-and-multiply in O(log n) steps. The
//! identity holds only because the seed equals the final XOR mask.

// SAFETY: All array indexing in this module uses bounded loop indices (0..32)
// into `[u32; 32]`.
#![allow(clippy::indexing_slicing)]

use crate::params::BitOrder;

/// A 32x32 GF(2) matrix represented as 32 u32 values.
///
/// Entry `i` is the image of the basis vector with only bit `i` set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Gf2Matrix32([u32; 32]);

impl Gf2Matrix32 {
  /// Create the identity matrix.
  #[must_use]
  pub const fn identity() -> Self {
    let mut m = [0u32; 32];
    let mut i = 0;
    while i < 32 {
      m[i] = 1 << i;
      i += 1;
    }
    Self(m)
  }

  /// Multiply matrix by a vector (u32 treated as column vector).
  #[inline]
  #[must_use]
  pub const fn mul_vec(self, vec: u32) -> u32 {
    let mut result = 0u32;
    let mut i = 0;
    while i < 32 {
      if vec & (1 << i) != 0 {
        result ^= self.0[i];
      }
      i += 1;
    }
    result
  }

  /// Multiply two matrices (self * other).
  #[must_use]
  pub const fn mul_mat(self, other: Self) -> Self {
    let mut result = [0u32; 32];
    let mut i = 0;
    while i < 32 {
      result[i] = self.mul_vec(other.0[i]);
      i += 1;
    }
    Self(result)
  }

  #[inline]
  #[must_use]
  pub const fn square(self) -> Self {
    self.mul_mat(self)
  }
}

/// Matrix that advances the register by one zero bit.
///
/// `poly` is the register polynomial for `bit_order`.
#[must_use]
pub const fn generate_shift1_matrix_32(poly: u32, bit_order: BitOrder) -> Gf2Matrix32 {
  let mut m = [0u32; 32];
  match bit_order {
    // crc' = (crc >> 1) ^ (poly if bit 0 set)
    BitOrder::LsbFirst => {
      m[0] = poly;
      let mut j = 1;
      while j < 32 {
        m[j] = 1 << (j - 1);
        j += 1;
      }
    }
    // crc' = (crc << 1) ^ (poly if bit 31 set)
    BitOrder::MsbFirst => {
      let mut j = 0;
      while j < 31 {
        m[j] = 1 << (j + 1);
        j += 1;
      }
      m[31] = poly;
    }
  }
  Gf2Matrix32(m)
}

/// Matrix that advances the register by one zero byte.
#[must_use]
pub const fn generate_shift8_matrix_32(poly: u32, bit_order: BitOrder) -> Gf2Matrix32 {
  let shift1 = generate_shift1_matrix_32(poly, bit_order);
  let shift2 = shift1.square();
  let shift4 = shift2.square();
  shift4.square()
}

/// Combine two finalized CRC-32 values.
///
/// `shift8_matrix` must come from [`generate_shift8_matrix_32`] for the same
/// polynomial and bit order that produced `crc_a` and `crc_b`.
#[must_use]
pub const fn combine_crc32(crc_a: u32, crc_b: u32, len_b: usize, shift8_matrix: Gf2Matrix32) -> u32 {
  if len_b == 0 {
    return crc_a;
  }

  let mut mat = shift8_matrix;
  let mut result_mat = Gf2Matrix32::identity();
  let mut remaining = len_b;

  while remaining > 0 {
    if remaining & 1 != 0 {
      result_mat = result_mat.mul_mat(mat);
    }
    mat = mat.square();
    remaining >>= 1;
  }

  result_mat.mul_vec(crc_a) ^ crc_b
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{bitwise, constants::crc32::POLYNOMIAL, params::Crc32Params};

  #[test]
  fn test_identity_matrix_32() {
    let id = Gf2Matrix32::identity();
    for v in [0u32, 1, 0x8000_0000, 0xDEAD_BEEF] {
      assert_eq!(id.mul_vec(v), v);
    }
  }

  #[test]
  fn test_shift8_matches_zero_byte_step() {
    let lsb = generate_shift8_matrix_32(POLYNOMIAL, BitOrder::LsbFirst);
    let msb = generate_shift8_matrix_32(Crc32Params::BZIP2.register_polynomial(), BitOrder::MsbFirst);
    for v in [1u32, 0x1234_5678, 0xFFFF_FFFF, 0x8000_0001] {
      assert_eq!(lsb.mul_vec(v), bitwise::crc32::compute_byte(v, 0));
      assert_eq!(msb.mul_vec(v), bitwise::crc32_bzip2::compute_byte(v, 0));
    }
  }

  #[test]
  fn test_combine_zero_length() {
    let m = generate_shift8_matrix_32(POLYNOMIAL, BitOrder::LsbFirst);
    assert_eq!(combine_crc32(0x470B_99F4, 0, 0, m), 0x470B_99F4);
  }

  #[test]
  fn test_combine_sample_vector() {
    let m = generate_shift8_matrix_32(POLYNOMIAL, BitOrder::LsbFirst);
    let data = [1u8, 2, 3, 4, 5];
    let (a, b) = data.split_at(2);
    let combined = combine_crc32(bitwise::crc32::checksum(a), bitwise::crc32::checksum(b), b.len(), m);
    assert_eq!(combined, 0x470B_99F4);
  }

  #[test]
  fn test_combine_msb_first() {
    let m = generate_shift8_matrix_32(Crc32Params::BZIP2.register_polynomial(), BitOrder::MsbFirst);
    let data = b"123456789";
    for split in 0..=data.len() {
      let (a, b) = data.split_at(split);
      let combined =
        combine_crc32(bitwise::crc32_bzip2::checksum(a), bitwise::crc32_bzip2::checksum(b), b.len(), m);
      assert_eq!(combined, 0xFC89_1918, "split {split}");
    }
  }
}
