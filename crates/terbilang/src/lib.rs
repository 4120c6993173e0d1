//! Spelled-out Indonesian Rupiah amounts ("terbilang").
//!
//! Payment receipts carry the amount twice: as grouped digits and as the
//! legally-required spelled-out line. This crate produces the latter,
//! implemented purely as deterministic text conversion (no IO, no state).

pub mod words;

pub use words::{amount_to_words, integer_to_words};
