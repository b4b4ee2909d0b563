//! CRC-32 algorithm parameters.
//!
//! Parameters follow the conventions of the
//! [CRC Catalogue](https://reveng.sourceforge.io/crc-catalogue/). Both
//! variants share the polynomial `0x04C11DB7` and the all-ones seed and final
//! XOR, and differ only in bit order. They disagree on every non-empty input,
//! so each has its own constant, its own engine functions and its own hasher
//! type.

use crate::constants::crc32::{CHECK_BZIP2, CHECK_IEEE, INIT, POLYNOMIAL_NORMAL, XOR_OUT};

/// Order in which bits of each input byte enter the register.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BitOrder {
  /// Reflected: least-significant bit first, register shifts right.
  LsbFirst,
  /// Non-reflected: most-significant bit first, register shifts left.
  MsbFirst,
}

/// Parameters of a 32-bit CRC.
///
/// - `polynomial`: generator polynomial in normal form (without the x^32 term)
/// - `bit_order`: [`BitOrder::LsbFirst`] means `refin = refout = true`
/// - `init`: register seed
/// - `xor_out`: final XOR mask
/// - `check`: CRC of `b"123456789"`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Crc32Params {
  /// Catalogue name.
  pub name: &'static str,
  /// Generator polynomial (normal form, implicit x^32).
  pub polynomial: u32,
  /// Bit order of input and output.
  pub bit_order: BitOrder,
  /// Initial register value.
  pub init: u32,
  /// XOR applied to the register before it is reported.
  pub xor_out: u32,
  /// Check value over `b"123456789"`.
  pub check: u32,
}

impl Crc32Params {
  /// CRC-32/ISO-HDLC: IEEE 802.3, zlib, gzip, PNG, zip.
  ///
  /// This is "the" CRC-32 of this crate.
  pub const IEEE: Self = Self {
    name: "CRC-32/ISO-HDLC",
    polynomial: POLYNOMIAL_NORMAL,
    bit_order: BitOrder::LsbFirst,
    init: INIT,
    xor_out: XOR_OUT,
    check: CHECK_IEEE,
  };

  /// CRC-32/BZIP2: same polynomial, MSB-first.
  ///
  /// Kept as a separately named algorithm; its values are not CRC-32 values.
  pub const BZIP2: Self = Self {
    name: "CRC-32/BZIP2",
    polynomial: POLYNOMIAL_NORMAL,
    bit_order: BitOrder::MsbFirst,
    init: INIT,
    xor_out: XOR_OUT,
    check: CHECK_BZIP2,
  };

  /// The polynomial as the register sees it for this bit order.
  #[inline]
  #[must_use]
  pub const fn register_polynomial(&self) -> u32 {
    match self.bit_order {
      BitOrder::LsbFirst => self.polynomial.reverse_bits(),
      BitOrder::MsbFirst => self.polynomial,
    }
  }
}
