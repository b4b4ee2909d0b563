//! Error types.
//!
//! Two failure classes exist: input that cannot be turned into bytes
//! ([`HexError`]) and engines that disagree on the same bytes
//! ([`MismatchError`]). The second is always a defect in an engine.

use core::fmt;

/// Hex input could not be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum HexError {
  /// A character that is not a hex digit, at byte offset `position`.
  InvalidDigit { position: usize, found: char },
  /// The token starting at `position` has an odd number of digits.
  OddDigitCount { position: usize },
  /// The token starting at `position` is a bare `0x` prefix.
  MissingDigits { position: usize },
}

impl HexError {
  /// Byte offset into the input where the problem starts.
  #[must_use]
  pub const fn position(&self) -> usize {
    match *self {
      Self::InvalidDigit { position, .. } | Self::OddDigitCount { position } | Self::MissingDigits { position } => {
        position
      }
    }
  }
}

impl fmt::Display for HexError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::InvalidDigit { position, found } => write!(f, "invalid hex digit {found:?} at offset {position}"),
      Self::OddDigitCount { position } => write!(f, "odd number of hex digits in token at offset {position}"),
      Self::MissingDigits { position } => write!(f, "`0x` prefix without digits at offset {position}"),
    }
  }
}

impl core::error::Error for HexError {}

/// Two CRC-32 strategies produced different values for the same input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct MismatchError {
  /// Strategy whose value is taken as the baseline.
  pub baseline: &'static str,
  /// Value produced by the baseline.
  pub expected: u32,
  /// Strategy that disagreed.
  pub strategy: &'static str,
  /// Value it produced.
  pub actual: u32,
  /// Input length in bytes.
  pub len: usize,
}

impl fmt::Display for MismatchError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "crc32 mismatch over {} bytes: {} = 0x{:08X}, {} = 0x{:08X}",
      self.len, self.baseline, self.expected, self.strategy, self.actual
    )
  }
}

impl core::error::Error for MismatchError {}
