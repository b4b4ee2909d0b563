//! Const-fn CRC-32 lookup table generation.
//!
//! A [`Crc32Table`] holds, for every byte value `i`, the register contents
//! after feeding `i` through eight bitwise steps of the polynomial. The
//! table-driven engine then consumes a whole byte per lookup instead of a bit
//! per step.
//!
//! Entries are pure functions of the polynomial and bit order. The table also
//! records the seed and final XOR of its parameters so that
//! [`Crc32Table::checksum`] computes the algorithm those parameters name.
//! Tables are never mutated once built.

// SAFETY: All array indexing in this module uses a `u8` index or a bounded
// loop index (0..256) into a `[u32; 256]`.
#![allow(clippy::indexing_slicing)]

use core::{fmt, ops::Index};

use crate::{
  constants::Aligned64,
  params::{BitOrder, Crc32Params},
};

/// Number of entries in a byte-indexed table.
pub const TABLE_LEN: usize = 256;

/// Compute a single table entry: the register after eight bitwise steps
/// seeded with `index`.
///
/// `poly` is the register polynomial for `bit_order` (reflected for
/// [`BitOrder::LsbFirst`], normal for [`BitOrder::MsbFirst`]).
#[must_use]
pub const fn crc32_table_entry(poly: u32, bit_order: BitOrder, index: u8) -> u32 {
  let mut crc = match bit_order {
    BitOrder::LsbFirst => index as u32,
    BitOrder::MsbFirst => (index as u32) << 24,
  };
  let mut i = 0;
  while i < 8 {
    crc = match bit_order {
      BitOrder::LsbFirst => {
        if crc & 1 != 0 {
          (crc >> 1) ^ poly
        } else {
          crc >> 1
        }
      }
      BitOrder::MsbFirst => {
        if crc & 0x8000_0000 != 0 {
          (crc << 1) ^ poly
        } else {
          crc << 1
        }
      }
    };
    i += 1;
  }
  crc
}

/// 256-entry CRC-32 lookup table for one polynomial and bit order.
///
/// ```
/// use crcduo::{Crc32Params, Crc32Table};
///
/// let table = Crc32Table::new(&Crc32Params::IEEE);
/// assert_eq!(table[0], 0x0000_0000);
/// assert_eq!(table[1], 0x7707_3096);
/// assert_eq!(table.checksum(&[1, 2, 3, 4, 5]), 0x470B_99F4);
/// ```
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Crc32Table {
  entries: Aligned64<[u32; TABLE_LEN]>,
  bit_order: BitOrder,
  init: u32,
  xor_out: u32,
}

impl Crc32Table {
  /// Build the table for `params`. Usable in `const` context.
  #[must_use]
  pub const fn new(params: &Crc32Params) -> Self {
    let poly = params.register_polynomial();
    let mut entries = [0u32; TABLE_LEN];
    let mut i = 0usize;
    while i < TABLE_LEN {
      entries[i] = crc32_table_entry(poly, params.bit_order, i as u8);
      i += 1;
    }
    Self { entries: Aligned64(entries), bit_order: params.bit_order, init: params.init, xor_out: params.xor_out }
  }

  /// Entry for byte value `byte`.
  #[inline]
  #[must_use]
  pub const fn entry(&self, byte: u8) -> u32 {
    self.entries.0[byte as usize]
  }

  /// All 256 entries, indexed by byte value.
  #[inline]
  #[must_use]
  pub const fn as_array(&self) -> &[u32; TABLE_LEN] {
    &self.entries.0
  }

  #[inline]
  #[must_use]
  pub const fn bit_order(&self) -> BitOrder {
    self.bit_order
  }

  /// Advance a raw register over `data`, one lookup per byte.
  #[inline]
  #[must_use]
  pub fn update(&self, crc: u32, data: &[u8]) -> u32 {
    match self.bit_order {
      BitOrder::LsbFirst => bytewise_lsb(crc, data, &self.entries.0),
      BitOrder::MsbFirst => bytewise_msb(crc, data, &self.entries.0),
    }
  }

  /// Register seed taken from the parameters.
  #[inline]
  #[must_use]
  pub const fn init(&self) -> u32 {
    self.init
  }

  /// Final XOR mask taken from the parameters.
  #[inline]
  #[must_use]
  pub const fn xor_out(&self) -> u32 {
    self.xor_out
  }

  /// Complete checksum of `data`: seed with `init`, process, XOR with `xor_out`.
  #[inline]
  #[must_use]
  pub fn checksum(&self, data: &[u8]) -> u32 {
    self.update(self.init, data) ^ self.xor_out
  }
}

impl Index<u8> for Crc32Table {
  type Output = u32;

  #[inline]
  fn index(&self, byte: u8) -> &u32 {
    &self.entries.0[byte as usize]
  }
}

impl fmt::Debug for Crc32Table {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Crc32Table")
      .field("bit_order", &self.bit_order)
      .field("init", &format_args!("{:#010x}", self.init))
      .field("xor_out", &format_args!("{:#010x}", self.xor_out))
      .field("entries", &format_args!("[{:#010x}, {:#010x}, .. ; 256]", self.entries.0[0], self.entries.0[1]))
      .finish()
  }
}

/// Reflected byte step: `crc = (crc >> 8) ^ table[(crc ^ byte) & 0xFF]`.
#[inline]
fn bytewise_lsb(mut crc: u32, data: &[u8], table: &[u32; TABLE_LEN]) -> u32 {
  for &b in data {
    let index = ((crc ^ (b as u32)) & 0xFF) as usize;
    crc = table[index] ^ (crc >> 8);
  }
  crc
}

/// MSB-first byte step: `crc = (crc << 8) ^ table[(crc >> 24) ^ byte]`.
#[inline]
fn bytewise_msb(mut crc: u32, data: &[u8], table: &[u32; TABLE_LEN]) -> u32 {
  for &b in data {
    let index = (((crc >> 24) ^ (b as u32)) & 0xFF) as usize;
    crc = table[index] ^ (crc << 8);
  }
  crc
}
