//! Table-less CRC-32 engines.
//!
//! These process one bit at a time against the polynomial and keep nothing
//! but the 32-bit register. They are the reference every other path in the
//! crate is checked against.
//!
//! The reduction step is branchless:
//!
//! 1. Build a mask from the bit about to leave the register with
//!    `wrapping_sub`: `0u32.wrapping_sub(0) == 0`, `0u32.wrapping_sub(1) == !0`
//! 2. XOR the polynomial in under that mask
//! 3. Shift the register
//!
//! | Module | Bit order | Register polynomial |
//! |--------|-----------|---------------------|
//! | [`crc32`] | LSB-first (reflected) | `0xEDB88320` |
//! | [`crc32_bzip2`] | MSB-first | `0x04C11DB7` |

pub mod crc32;
pub mod crc32_bzip2;
