//! Receipt amount-line rendering.
//!
//! Payment receipts and invoices print the amount twice, side by side: the
//! grouped digits and the legally-required spelled-out line. This crate is
//! the display-layer consumer of the two formatters and stops at producing
//! the two strings; document layout is someone else's job.

pub mod receipt;

pub use receipt::{AmountLines, ReceiptPayload, amount_lines};
