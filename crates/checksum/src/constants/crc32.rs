//! CRC-32 constants.
//!
//! Polynomial: 0x04C11DB7 (reflected: 0xEDB88320)
//! Used by: Ethernet, gzip, PNG, zip, zlib (reflected) and bzip2 (MSB-first)

/// Generator polynomial in normal (MSB-first) form, without the x^32 term.
pub const POLYNOMIAL_NORMAL: u32 = 0x04C1_1DB7;

/// Generator polynomial in reflected (bit-reversed, LSB-first) form.
pub const POLYNOMIAL: u32 = POLYNOMIAL_NORMAL.reverse_bits();

/// Seed loaded into the register before the first byte.
pub const INIT: u32 = 0xFFFF_FFFF;

/// Mask XORed into the register to produce the reported checksum.
pub const XOR_OUT: u32 = 0xFFFF_FFFF;

/// Catalogue check value of the reflected variant: CRC of `b"123456789"`.
pub const CHECK_IEEE: u32 = 0xCBF4_3926;

/// Catalogue check value of the MSB-first variant: CRC of `b"123456789"`.
pub const CHECK_BZIP2: u32 = 0xFC89_1918;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_polynomial() {
    assert_eq!(POLYNOMIAL, 0xEDB8_8320);
    assert_eq!(POLYNOMIAL.reverse_bits(), POLYNOMIAL_NORMAL);
  }

  #[test]
  fn test_seed_equals_xor_out() {
    // Combine relies on this for both bit orders.
    assert_eq!(INIT, XOR_OUT);
  }
}
