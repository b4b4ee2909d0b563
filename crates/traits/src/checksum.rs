//! Non-cryptographic checksum traits.
//!
//! Every CRC-32 engine in the workspace (the reflected IEEE hasher and the
//! MSB-first BZIP2 hasher) implements [`Checksum`]; engines whose register
//! starts and ends with the same XOR mask also implement [`ChecksumCombine`].

use core::fmt::Debug;

/// Non-cryptographic checksum algorithm.
///
/// # Usage
///
/// ```rust,ignore
/// use crcduo::{Checksum, Crc32};
///
/// // One-shot
/// let crc = Crc32::checksum(&[1, 2, 3, 4, 5]);
///
/// // Streaming
/// let mut hasher = Crc32::new();
/// hasher.update(&[1, 2]);
/// hasher.update(&[3, 4, 5]);
/// assert_eq!(hasher.finalize(), crc);
/// ```
///
/// # Implementor Requirements
///
/// - `new()` must return the same state as `Default::default()`
/// - `finalize()` must be idempotent and must not consume the hasher
/// - `reset()` must restore the hasher to its initial state
pub trait Checksum: Clone + Default {
  /// Output size in bytes (4 for every CRC-32 variant).
  const OUTPUT_SIZE: usize;

  /// The checksum output type.
  type Output: Copy + Eq + Debug + Default;

  /// Create a new hasher with the algorithm's seed value.
  #[must_use]
  fn new() -> Self;

  /// Create a new hasher from a previously finalized checksum.
  ///
  /// Continuing to `update` this hasher yields the checksum of the earlier
  /// data followed by the new data.
  #[must_use]
  fn with_initial(initial: Self::Output) -> Self;

  /// Feed more data into the hasher.
  fn update(&mut self, data: &[u8]);

  /// Feed several non-contiguous buffers, in order.
  ///
  /// Identical to calling [`update`](Self::update) on each buffer.
  #[inline]
  fn update_vectored(&mut self, bufs: &[&[u8]]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Return the checksum of everything processed so far.
  #[must_use]
  fn finalize(&self) -> Self::Output;

  /// Reset the hasher to its initial state.
  fn reset(&mut self);

  /// Compute the checksum of `data` in one shot.
  #[inline]
  #[must_use]
  fn checksum(data: &[u8]) -> Self::Output {
    let mut h = Self::new();
    h.update(data);
    h.finalize()
  }

  /// Compute the checksum of several buffers in one shot.
  #[inline]
  #[must_use]
  fn checksum_vectored(bufs: &[&[u8]]) -> Self::Output {
    let mut h = Self::new();
    h.update_vectored(bufs);
    h.finalize()
  }

  /// Wrap a reader so that every byte read is checksummed.
  ///
  /// ```rust,ignore
  /// use crcduo::{Checksum, Crc32};
  ///
  /// let mut reader = Crc32::reader(std::fs::File::open("frame.bin")?);
  /// std::io::copy(&mut reader, &mut std::io::sink())?;
  /// println!("CRC32: 0x{:08X}", reader.crc());
  /// ```
  #[cfg(feature = "std")]
  #[inline]
  #[must_use]
  fn reader<R>(inner: R) -> crate::io::ChecksumReader<R, Self>
  where
    Self: Sized,
  {
    crate::io::ChecksumReader::new(inner)
  }

  /// Wrap a writer so that every byte written is checksummed.
  #[cfg(feature = "std")]
  #[inline]
  #[must_use]
  fn writer<W>(inner: W) -> crate::io::ChecksumWriter<W, Self>
  where
    Self: Sized,
  {
    crate::io::ChecksumWriter::new(inner)
  }
}

/// Checksums whose values can be concatenated without reprocessing data.
///
/// ```text
/// crc(A || B) = shift(crc(A), 8 * len(B)) XOR crc(B)
/// ```
///
/// The identity holds whenever the register seed equals the final XOR mask,
/// which is the case for both CRC-32 variants in this workspace.
pub trait ChecksumCombine: Checksum {
  /// Given `crc_a = crc(A)` and `crc_b = crc(B)`, compute `crc(A || B)`.
  #[must_use]
  fn combine(crc_a: Self::Output, crc_b: Self::Output, len_b: usize) -> Self::Output;
}
