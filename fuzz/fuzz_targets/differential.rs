//! Differential fuzzing against `crc-fast`.

#![no_main]

use crc_fast::CrcAlgorithm;
use crcduo::{Checksum, Crc32, Crc32Bzip2};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
  test_crc32_differential(data);
  test_crc32_bzip2_differential(data);
});

fn test_crc32_differential(data: &[u8]) {
  let ours = Crc32::checksum(data);
  let reference = crc_fast::checksum(CrcAlgorithm::Crc32IsoHdlc, data) as u32;

  assert_eq!(
    ours, reference,
    "CRC-32 differential mismatch: ours={:#010x}, reference={:#010x}, len={}",
    ours, reference, data.len()
  );
  assert_eq!(crcduo::compute_bitwise(data), reference, "CRC-32 bitwise mismatch");
}

fn test_crc32_bzip2_differential(data: &[u8]) {
  let ours = Crc32Bzip2::checksum(data);
  let reference = crc_fast::checksum(CrcAlgorithm::Crc32Bzip2, data) as u32;

  assert_eq!(
    ours, reference,
    "CRC-32/BZIP2 differential mismatch: ours={:#010x}, reference={:#010x}, len={}",
    ours, reference, data.len()
  );
}
