//! Building blocks shared by the CRC-32 engines.
//!
//! - Const-fn lookup table generation
//! - Compute-once table cache
//! - GF(2) matrix operations for `combine()`

pub mod cache;
pub mod combine;
pub mod tables;
