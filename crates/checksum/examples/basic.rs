//! Basic CRC-32 usage: both engines, streaming, resume, combine and I/O.
//!
//! Run with: `cargo run --example basic -p crcduo`

use std::io::{self, Read as _};

use crcduo::{Checksum, ChecksumCombine, Crc32, Crc32Bzip2};

fn main() -> io::Result<()> {
  println!("=== CRC-32 Basic Examples ===\n");

  engines_example();
  streaming_example();
  resume_and_combine_example();
  io_example()?;

  Ok(())
}

/// The two engines, called directly.
fn engines_example() {
  println!("--- Engines ---\n");

  let data = [1u8, 2, 3, 4, 5];

  let bitwise = crcduo::compute_bitwise(&data);
  println!("bitwise:        0x{bitwise:08X}");

  let table = crcduo::build_table();
  println!("table[1]:       0x{:08X}", table[1]);
  let by_table = crcduo::compute_table(&table, &data);
  println!("table-driven:   0x{by_table:08X}");
  assert_eq!(bitwise, by_table);

  // The MSB-first variant is a different algorithm.
  let bzip2 = Crc32Bzip2::checksum(&data);
  println!("CRC-32/BZIP2:   0x{bzip2:08X}");
  assert_ne!(bzip2, bitwise);

  match crcduo::verify(&data) {
    Ok(crc) => println!("verified:       0x{crc:08X}"),
    Err(err) => println!("verification failed: {err}"),
  }

  println!();
}

/// Streaming computation: process data in chunks.
fn streaming_example() {
  println!("--- Streaming ({}) ---\n", Crc32::backend_name());

  let mut hasher = Crc32::new();
  hasher.update(b"1234");
  hasher.update(b"56789");
  let crc = hasher.finalize();
  println!("Streaming CRC-32: 0x{crc:08X}");
  assert_eq!(crc, Crc32::checksum(b"123456789"));

  // finalize() is non-consuming
  hasher.update(b"...");
  println!("Extended CRC-32:  0x{:08X}", hasher.finalize());

  hasher.reset();
  hasher.update(b"new data");
  println!("Reset CRC-32:     0x{:08X}", hasher.finalize());

  println!();
}

/// Continue from a saved checksum, or join two independent ones.
fn resume_and_combine_example() {
  println!("--- Resume and Combine ---\n");

  let part1 = b"first part of data";
  let part2 = b" and the second part";

  let saved = Crc32::checksum(part1);
  let mut resumed = Crc32::resume(saved);
  resumed.update(part2);
  let full = resumed.finalize();
  println!("Resumed:  0x{full:08X}");

  let combined = Crc32::combine(saved, Crc32::checksum(part2), part2.len());
  println!("Combined: 0x{combined:08X}");
  assert_eq!(full, combined);

  println!();
}

/// Checksum bytes as they pass through a reader.
fn io_example() -> io::Result<()> {
  println!("--- Reader Adapter ---\n");

  let payload = b"Hello!".repeat(100);
  let mut reader = Crc32::reader(&payload[..]);
  let mut sink = Vec::new();
  reader.read_to_end(&mut sink)?;

  println!("Read {} bytes, CRC-32: 0x{:08X}", sink.len(), reader.crc());
  assert_eq!(reader.crc(), Crc32::checksum(&payload));

  println!();
  Ok(())
}
