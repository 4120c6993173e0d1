//! Grouped-digit "IDR" display formatting.
//!
//! The numeric amount line on receipts and invoices: `"IDR "` followed by the
//! whole-Rupiah amount with a period between every three digits, per the
//! Indonesian grouping convention.

pub mod format;

pub use format::format_currency;
