//! Kernel selection and caching for the CRC-32 hashers.
//!
//! A kernel is a plain `fn(register, data) -> register`. The streaming
//! [`Crc32`](crate::Crc32) hasher does not hard-code one: it asks a
//! [`Crc32Dispatcher`], which runs its selector once per process and then
//! hands out the cached choice.
//!
//! ```ignore
//! fn select() -> Selected<Crc32Fn> {
//!   match config::get().effective {
//!     Strategy::Bitwise => Selected::new("portable/bitwise", bitwise_kernel),
//!     _ => Selected::new("portable/table", table_kernel),
//!   }
//! }
//!
//! static DISPATCHER: Crc32Dispatcher = Crc32Dispatcher::new(select);
//! ```

/// Function signature for CRC-32 kernels.
///
/// # Arguments
///
/// * `state` - Current raw register (seeded with 0xFFFFFFFF, not finalized)
/// * `data` - Input data to process
///
/// # Returns
///
/// Updated raw register after processing the input data.
pub type Crc32Fn = fn(u32, &[u8]) -> u32;

/// The result of kernel selection: a name for diagnostics and the kernel.
#[derive(Clone, Copy, Debug)]
pub struct Selected<F> {
  /// Human-readable kernel name (e.g. `"portable/table"`).
  pub name: &'static str,
  /// The selected kernel function.
  pub func: F,
}

impl<F> Selected<F> {
  #[inline]
  #[must_use]
  pub const fn new(name: &'static str, func: F) -> Self {
    Self { name, func }
  }
}

/// Dispatcher for CRC-32 kernels.
///
/// Caches the selected kernel on first access. Thread-safe. Without `std`
/// there is no environment to read, selection is a constant match, and the
/// selector simply runs on each call.
pub struct Crc32Dispatcher {
  #[cfg(feature = "std")]
  inner: std::sync::OnceLock<Selected<Crc32Fn>>,

  selector: fn() -> Selected<Crc32Fn>,
}

impl Crc32Dispatcher {
  /// Create a dispatcher. `selector` runs on first use.
  #[must_use]
  pub const fn new(selector: fn() -> Selected<Crc32Fn>) -> Self {
    Self {
      #[cfg(feature = "std")]
      inner: std::sync::OnceLock::new(),
      selector,
    }
  }

  /// Get the selected kernel, selecting on first call.
  #[inline]
  #[must_use]
  pub fn get(&self) -> Selected<Crc32Fn> {
    #[cfg(feature = "std")]
    {
      *self.inner.get_or_init(|| {
        let selected = (self.selector)();
        log::debug!("crc32 kernel selected: {}", selected.name);
        selected
      })
    }

    #[cfg(not(feature = "std"))]
    {
      (self.selector)()
    }
  }

  /// Run the selected kernel.
  #[inline]
  #[must_use]
  pub fn call(&self, state: u32, data: &[u8]) -> u32 {
    (self.get().func)(state, data)
  }

  /// Name of the selected kernel.
  #[inline]
  #[must_use]
  pub fn backend_name(&self) -> &'static str {
    self.get().name
  }
}

impl core::fmt::Debug for Crc32Dispatcher {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("Crc32Dispatcher").finish_non_exhaustive()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn xor_kernel(state: u32, data: &[u8]) -> u32 {
    data.iter().fold(state, |acc, &b| acc ^ u32::from(b))
  }

  fn select_xor() -> Selected<Crc32Fn> {
    Selected::new("test/xor", xor_kernel)
  }

  #[test]
  fn dispatches_to_selected_kernel() {
    static DISPATCHER: Crc32Dispatcher = Crc32Dispatcher::new(select_xor);
    assert_eq!(DISPATCHER.backend_name(), "test/xor");
    assert_eq!(DISPATCHER.call(0, &[1, 2, 4]), 7);
  }
}
