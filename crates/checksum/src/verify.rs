//! Cross-engine verification.
//!
//! A [`Verifier`] runs the same input through every CRC-32 (IEEE) strategy it
//! knows and only returns a checksum when they all agree. The bitwise engine
//! is the baseline; the table engine, the streaming hasher and an optional
//! injected reference are compared against it.
//!
//! A disagreement is a defect in one of the engines. It is logged at `error`
//! level and returned as [`MismatchError`]; no attempt is made to decide which
//! side is right.
//!
//! ```
//! use crcduo::verify::Verifier;
//!
//! assert_eq!(crcduo::verify(&[1, 2, 3, 4, 5]), Ok(0x470B_99F4));
//!
//! let broken = Verifier::new().with_reference("always-zero", |_| 0);
//! assert!(broken.verify(b"abc").is_err());
//! ```

use traits::Checksum;

use crate::{
  crc32::{Crc32, compute_bitwise, compute_table, ieee_table},
  error::MismatchError,
};

/// External one-shot CRC-32 (IEEE) implementation.
pub type ReferenceFn = fn(&[u8]) -> u32;

const BASELINE: &str = "bitwise";

fn table_engine(data: &[u8]) -> u32 {
  compute_table(ieee_table(), data)
}

fn streaming_hasher(data: &[u8]) -> u32 {
  Crc32::checksum(data)
}

/// Strategies compared against the bitwise baseline, in order.
const BUILTIN: [(&str, ReferenceFn); 2] = [("table", table_engine), ("hasher", streaming_hasher)];

/// Runs every strategy over the same bytes and demands agreement.
#[derive(Clone, Copy, Debug, Default)]
pub struct Verifier {
  reference: Option<(&'static str, ReferenceFn)>,
}

impl Verifier {
  /// Verifier over the built-in strategies.
  #[must_use]
  pub const fn new() -> Self {
    Self { reference: None }
  }

  /// Also compare against `reference`, reported under `name`.
  #[must_use]
  pub const fn with_reference(mut self, name: &'static str, reference: ReferenceFn) -> Self {
    self.reference = Some((name, reference));
    self
  }

  /// Name of the injected reference, if any.
  #[must_use]
  pub fn reference_name(&self) -> Option<&'static str> {
    self.reference.map(|(name, _)| name)
  }

  /// Checksum of `data` if every strategy agrees.
  ///
  /// # Errors
  ///
  /// [`MismatchError`] for the first strategy that disagrees with the
  /// bitwise engine.
  pub fn verify(&self, data: &[u8]) -> Result<u32, MismatchError> {
    let expected = compute_bitwise(data);

    for (strategy, run) in BUILTIN.iter().copied().chain(self.reference) {
      let actual = run(data);
      if actual != expected {
        let err = MismatchError { baseline: BASELINE, expected, strategy, actual, len: data.len() };
        log::error!("{err}");
        return Err(err);
      }
    }

    log::debug!("crc32 verified over {} bytes: 0x{expected:08X}", data.len());
    Ok(expected)
  }
}

/// Verify `data` with the built-in strategies.
///
/// # Errors
///
/// See [`Verifier::verify`].
pub fn verify(data: &[u8]) -> Result<u32, MismatchError> {
  Verifier::new().verify(data)
}
