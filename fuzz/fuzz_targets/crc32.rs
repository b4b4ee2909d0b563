//! Fuzz target for the CRC-32 engines and hashers.
//!
//! Tests that:
//! - No panics on arbitrary input
//! - Bitwise, table and streaming results agree
//! - Incremental, resume and combine match one-shot

#![no_main]

use arbitrary::Arbitrary;
use crcduo::{Checksum, ChecksumCombine, Crc32, Crc32Bzip2};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  split_point: usize,
}

fuzz_target!(|input: Input| {
  let data = &input.data;
  let split = input.split_point % (data.len() + 1);

  let oneshot = Crc32::checksum(data);
  assert_eq!(crcduo::compute_bitwise(data), oneshot, "bitwise mismatch");
  assert_eq!(crcduo::compute_table(crcduo::ieee_table(), data), oneshot, "table mismatch");
  assert_eq!(crcduo::verify(data), Ok(oneshot), "verifier mismatch");

  let (a, b) = data.split_at(split);
  let mut hasher = Crc32::new();
  hasher.update(a);
  hasher.update(b);
  assert_eq!(hasher.finalize(), oneshot, "incremental mismatch");

  let crc_a = Crc32::checksum(a);
  let mut resumed = Crc32::resume(crc_a);
  resumed.update(b);
  assert_eq!(resumed.finalize(), oneshot, "resume mismatch");

  let combined = Crc32::combine(crc_a, Crc32::checksum(b), b.len());
  assert_eq!(combined, oneshot, "combine mismatch");

  let bzip2 = Crc32Bzip2::checksum(data);
  assert_eq!(crcduo::compute_bitwise_bzip2(data), bzip2, "bzip2 bitwise mismatch");
  let combined = Crc32Bzip2::combine(Crc32Bzip2::checksum(a), Crc32Bzip2::checksum(b), b.len());
  assert_eq!(combined, bzip2, "bzip2 combine mismatch");
});
