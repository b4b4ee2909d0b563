//! CRC-32 runtime configuration.
//!
//! The streaming [`Crc32`](super::Crc32) hasher can run either engine. The
//! choice defaults to the table-driven engine and can be overridden from the
//! environment:
//!
//! | Variable | Values |
//! |----------|--------|
//! | `CRCDUO_CRC32_STRATEGY` | `auto`, `table` (`bytewise`, `lookup`), `bitwise` (`bit`, `reference`) |
//!
//! Values are case-insensitive. Blank values are ignored; unknown values are
//! ignored with a warning. The environment is read once per process.

use core::{fmt, str::FromStr};

/// Environment variable holding the strategy override.
pub const STRATEGY_ENV: &str = "CRCDUO_CRC32_STRATEGY";

/// Engine used by the streaming hasher.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
  /// Let the crate choose (currently [`Strategy::Table`]).
  #[default]
  Auto,
  /// One bit per step, no table.
  Bitwise,
  /// One byte per step through the 256-entry table.
  Table,
}

impl Strategy {
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Auto => "auto",
      Self::Bitwise => "bitwise",
      Self::Table => "table",
    }
  }

  /// Resolve `Auto` to a concrete engine.
  #[must_use]
  pub const fn resolve(self) -> Self {
    match self {
      Self::Auto => Self::Table,
      other => other,
    }
  }
}

impl fmt::Display for Strategy {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Error returned when a strategy name is not recognized.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub struct UnknownStrategy;

impl fmt::Display for UnknownStrategy {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("unknown crc32 strategy (expected auto, bitwise or table)")
  }
}

impl core::error::Error for UnknownStrategy {}

impl FromStr for Strategy {
  type Err = UnknownStrategy;

  fn from_str(value: &str) -> Result<Self, Self::Err> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("auto") {
      return Ok(Self::Auto);
    }
    if value.eq_ignore_ascii_case("table")
      || value.eq_ignore_ascii_case("bytewise")
      || value.eq_ignore_ascii_case("lookup")
    {
      return Ok(Self::Table);
    }
    if value.eq_ignore_ascii_case("bitwise")
      || value.eq_ignore_ascii_case("bit")
      || value.eq_ignore_ascii_case("reference")
    {
      return Ok(Self::Bitwise);
    }
    Err(UnknownStrategy)
  }
}

/// Effective CRC-32 configuration after applying overrides.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Crc32Config {
  /// Strategy requested by the environment (or `Auto`).
  pub requested: Strategy,
  /// Concrete strategy in use; never `Auto`.
  pub effective: Strategy,
}

impl Crc32Config {
  #[must_use]
  pub const fn from_requested(requested: Strategy) -> Self {
    Self { requested, effective: requested.resolve() }
  }
}

#[derive(Clone, Copy, Debug, Default)]
struct Overrides {
  strategy: Strategy,
}

/// Parse a raw override value. `None` means "no override".
#[cfg_attr(not(feature = "std"), allow(dead_code))]
fn parse_strategy(raw: Option<&str>) -> Option<Strategy> {
  let value = raw?.trim();
  if value.is_empty() {
    return None;
  }
  match value.parse::<Strategy>() {
    Ok(strategy) => Some(strategy),
    Err(err) => {
      log::warn!("ignoring {STRATEGY_ENV}={value:?}: {err}");
      None
    }
  }
}

#[cfg(feature = "std")]
fn read_env_overrides() -> Overrides {
  let raw = std::env::var(STRATEGY_ENV).ok();
  Overrides { strategy: parse_strategy(raw.as_deref()).unwrap_or_default() }
}

#[cfg(feature = "std")]
fn overrides() -> Overrides {
  use std::sync::OnceLock;
  static OVERRIDES: OnceLock<Overrides> = OnceLock::new();
  *OVERRIDES.get_or_init(read_env_overrides)
}

#[cfg(not(feature = "std"))]
fn overrides() -> Overrides {
  Overrides::default()
}

/// Get the effective CRC-32 configuration for this process.
#[inline]
#[must_use]
pub fn get() -> Crc32Config {
  Crc32Config::from_requested(overrides().strategy)
}
