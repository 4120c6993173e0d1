//! `kwitansi-core` — amount primitives shared by the formatting crates.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod amount;
pub mod error;

pub use amount::{NOT_AVAILABLE, RawAmount, normalize};
pub use error::{AmountError, AmountResult};
