//! Fuzz target for hex input parsing.
//!
//! Any string either decodes or reports a position inside the input.

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|text: &str| {
  match crcduo::hex::parse_bytes(text) {
    Ok(bytes) => {
      assert!(bytes.len() <= text.len() / 2);
      let _ = crcduo::verify(&bytes);
    }
    Err(err) => assert!(err.position() < text.len(), "{err} outside {} bytes", text.len()),
  }
});
