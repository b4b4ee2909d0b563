//! Hex byte-string input.
//!
//! Accepts the forms byte dumps usually come in:
//!
//! ```text
//! 2F FF C0 64 00 14        whitespace separated
//! 2fffc0640014             contiguous
//! 0x2F, 0xFF, 0xC0         prefixed and comma separated
//! ```
//!
//! Each token must hold an even number of digits. Empty input is valid and
//! decodes to no bytes. [`format_bytes`] renders the first form.

use alloc::{string::String, vec::Vec};
use core::fmt::Write as _;

use crate::error::HexError;

/// Decode a hex byte string.
///
/// ```
/// assert_eq!(crcduo::hex::parse_bytes("01 02 03 04 05").unwrap(), [1, 2, 3, 4, 5]);
/// assert!(crcduo::hex::parse_bytes("0G").is_err());
/// ```
pub fn parse_bytes(input: &str) -> Result<Vec<u8>, HexError> {
  let mut out = Vec::with_capacity(input.len() / 2);

  for (start, token) in tokens(input) {
    let digits = token.strip_prefix("0x").or_else(|| token.strip_prefix("0X")).unwrap_or(token);
    if digits.is_empty() {
      return Err(HexError::MissingDigits { position: start });
    }
    let offset = start + (token.len() - digits.len());

    let mut high: Option<u8> = None;
    for (i, c) in digits.char_indices() {
      let nibble = match c.to_digit(16) {
        Some(d) => d as u8,
        None => return Err(HexError::InvalidDigit { position: offset + i, found: c }),
      };
      high = match high {
        None => Some(nibble),
        Some(h) => {
          out.push((h << 4) | nibble);
          None
        }
      };
    }

    if high.is_some() {
      return Err(HexError::OddDigitCount { position: start });
    }
  }

  Ok(out)
}

/// Render bytes as spaced uppercase hex, e.g. `"2F FF C0 64"`.
///
/// ```
/// assert_eq!(crcduo::hex::format_bytes(&[0x2F, 0xFF, 0x00]), "2F FF 00");
/// ```
#[must_use]
pub fn format_bytes(bytes: &[u8]) -> String {
  let mut out = String::with_capacity(bytes.len() * 3);
  for (i, byte) in bytes.iter().enumerate() {
    if i > 0 {
      out.push(' ');
    }
    let _ = write!(out, "{byte:02X}");
  }
  out
}

fn is_separator(c: char) -> bool {
  c.is_whitespace() || c == ','
}

/// Non-empty tokens with their byte offset into `input`.
fn tokens(input: &str) -> impl Iterator<Item = (usize, &str)> {
  let mut offset = 0;
  input.split_inclusive(is_separator).filter_map(move |piece| {
    let start = offset;
    offset += piece.len();
    let token = piece.trim_end_matches(is_separator);
    (!token.is_empty()).then_some((start, token))
  })
}
