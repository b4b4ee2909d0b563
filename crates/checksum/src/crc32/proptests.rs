extern crate std;

use crc_fast::CrcAlgorithm;
use proptest::prelude::*;

use super::*;

proptest! {
  #[test]
  fn table_matches_bitwise(data in proptest::collection::vec(any::<u8>(), 0..=4096)) {
    prop_assert_eq!(compute_table(&build_table(), &data), compute_bitwise(&data));
  }

  #[test]
  fn raw_kernels_agree_for_any_seed(data in proptest::collection::vec(any::<u8>(), 0..=1024), seed in any::<u32>()) {
    prop_assert_eq!(portable::crc32_table(seed, &data), portable::crc32_bitwise(seed, &data));
  }

  #[test]
  fn bzip2_table_matches_bitwise(data in proptest::collection::vec(any::<u8>(), 0..=4096)) {
    prop_assert_eq!(Crc32Bzip2::checksum(&data), compute_bitwise_bzip2(&data));
  }

  // ─────────────────────────────────────────────────────────────────────────────
  // Cross-validation against crc-fast
  // ─────────────────────────────────────────────────────────────────────────────

  #[test]
  fn crc32_matches_crc_fast(data in proptest::collection::vec(any::<u8>(), 0..=4096)) {
    let reference = crc_fast::checksum(CrcAlgorithm::Crc32IsoHdlc, &data) as u32;
    prop_assert_eq!(compute_bitwise(&data), reference);
    prop_assert_eq!(Crc32::checksum(&data), reference);
  }

  #[test]
  fn crc32_bzip2_matches_crc_fast(data in proptest::collection::vec(any::<u8>(), 0..=4096)) {
    let reference = crc_fast::checksum(CrcAlgorithm::Crc32Bzip2, &data) as u32;
    prop_assert_eq!(Crc32Bzip2::checksum(&data), reference);
  }

  #[test]
  fn crc32_streaming_matches_crc_fast(data in proptest::collection::vec(any::<u8>(), 0..=4096), chunk in 1usize..=257) {
    let mut ours = Crc32::new();
    let mut reference = crc_fast::Digest::new(CrcAlgorithm::Crc32IsoHdlc);

    for part in data.chunks(chunk) {
      ours.update(part);
      reference.update(part);
    }

    prop_assert_eq!(ours.finalize(), reference.finalize() as u32);
  }

  #[test]
  fn crc32_combine_matches_crc_fast(data in proptest::collection::vec(any::<u8>(), 0..=4096), split in any::<usize>()) {
    let split = split % (data.len() + 1);
    let (a, b) = data.split_at(split);

    let combined = Crc32::combine(Crc32::checksum(a), Crc32::checksum(b), b.len());

    let ref_crc_a = crc_fast::checksum(CrcAlgorithm::Crc32IsoHdlc, a);
    let ref_crc_b = crc_fast::checksum(CrcAlgorithm::Crc32IsoHdlc, b);
    let ref_combined = crc_fast::checksum_combine(CrcAlgorithm::Crc32IsoHdlc, ref_crc_a, ref_crc_b, b.len() as u64) as u32;

    prop_assert_eq!(combined, ref_combined);
  }
}
