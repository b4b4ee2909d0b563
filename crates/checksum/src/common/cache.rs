//! Compute-once cache for lookup tables.
//!
//! A [`TableCache`] has two states, unbuilt and built. The first caller builds
//! the table and publishes it; every later caller, on any thread, gets a
//! shared reference to the same immutable table.
//!
//! - **std**: `OnceLock`
//! - **no_std with atomics**: atomic state machine (UNINIT → INITING → READY)
//! - **no_std without atomics**: the table is built in `const` context when the
//!   cache is constructed

#[cfg(all(not(feature = "std"), target_has_atomic = "8"))]
use core::{cell::UnsafeCell, mem::MaybeUninit};

use crate::{common::tables::Crc32Table, params::Crc32Params};

/// Lazily built, process-wide [`Crc32Table`].
pub struct TableCache {
  params: Crc32Params,

  #[cfg(feature = "std")]
  inner: std::sync::OnceLock<Crc32Table>,

  #[cfg(all(not(feature = "std"), target_has_atomic = "8"))]
  state: core::sync::atomic::AtomicU8,
  #[cfg(all(not(feature = "std"), target_has_atomic = "8"))]
  value: UnsafeCell<MaybeUninit<Crc32Table>>,

  #[cfg(all(not(feature = "std"), not(target_has_atomic = "8")))]
  table: Crc32Table,
}

// SAFETY: `value` is written exactly once, by the thread that wins the
// UNINIT -> INITING transition, and only read after READY is observed with
// Acquire ordering.
#[allow(unsafe_code)]
#[cfg(all(not(feature = "std"), target_has_atomic = "8"))]
unsafe impl Sync for TableCache {}

impl TableCache {
  #[cfg(all(not(feature = "std"), target_has_atomic = "8"))]
  const UNINIT: u8 = 0;
  #[cfg(all(not(feature = "std"), target_has_atomic = "8"))]
  const INITING: u8 = 1;
  #[cfg(all(not(feature = "std"), target_has_atomic = "8"))]
  const READY: u8 = 2;

  /// Create an unbuilt cache for `params`.
  #[must_use]
  pub const fn new(params: Crc32Params) -> Self {
    Self {
      #[cfg(all(not(feature = "std"), not(target_has_atomic = "8")))]
      table: Crc32Table::new(&params),

      params,

      #[cfg(feature = "std")]
      inner: std::sync::OnceLock::new(),

      #[cfg(all(not(feature = "std"), target_has_atomic = "8"))]
      state: core::sync::atomic::AtomicU8::new(Self::UNINIT),
      #[cfg(all(not(feature = "std"), target_has_atomic = "8"))]
      value: UnsafeCell::new(MaybeUninit::uninit()),
    }
  }

  #[cfg_attr(all(not(feature = "std"), not(target_has_atomic = "8")), allow(dead_code))]
  fn build(params: &Crc32Params) -> Crc32Table {
    log::debug!("building {} lookup table", params.name);
    Crc32Table::new(params)
  }

  /// Whether the table has been built and published.
  #[must_use]
  pub fn is_built(&self) -> bool {
    #[cfg(feature = "std")]
    {
      self.inner.get().is_some()
    }

    #[cfg(all(not(feature = "std"), target_has_atomic = "8"))]
    {
      self.state.load(core::sync::atomic::Ordering::Acquire) == Self::READY
    }

    #[cfg(all(not(feature = "std"), not(target_has_atomic = "8")))]
    {
      true
    }
  }

  /// Get the table, building it on first access.
  #[inline]
  pub fn get(&self) -> &Crc32Table {
    #[cfg(feature = "std")]
    {
      self.inner.get_or_init(|| Self::build(&self.params))
    }

    #[cfg(all(not(feature = "std"), target_has_atomic = "8"))]
    {
      use core::sync::atomic::Ordering;

      if self.state.load(Ordering::Acquire) != Self::READY {
        if self
          .state
          .compare_exchange(Self::UNINIT, Self::INITING, Ordering::AcqRel, Ordering::Acquire)
          .is_ok()
        {
          let table = Self::build(&self.params);
          // SAFETY: winning the UNINIT -> INITING exchange grants exclusive
          // write access; no reader touches `value` before READY.
          #[allow(unsafe_code)]
          unsafe {
            (*self.value.get()).write(table);
          }
          self.state.store(Self::READY, Ordering::Release);
        } else {
          // Another thread is building.
          while self.state.load(Ordering::Acquire) != Self::READY {
            core::hint::spin_loop();
          }
        }
      }

      // SAFETY: READY was observed with Acquire, so the write is visible and
      // the value is never written again.
      #[allow(unsafe_code)]
      unsafe {
        (*self.value.get()).assume_init_ref()
      }
    }

    #[cfg(all(not(feature = "std"), not(target_has_atomic = "8")))]
    {
      &self.table
    }
  }
}

impl core::fmt::Debug for TableCache {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("TableCache")
      .field("algorithm", &self.params.name)
      .field("built", &self.is_built())
      .finish()
  }
}
