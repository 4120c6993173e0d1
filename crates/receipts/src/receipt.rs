//! Payment-receipt payloads and their rendered amount lines.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use kwitansi_core::{NOT_AVAILABLE, RawAmount};
use kwitansi_currency::format_currency;
use kwitansi_terbilang::amount_to_words;

/// The two amount lines printed on a receipt or invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AmountLines {
    /// Grouped digits, e.g. `"IDR 1.500.000"`.
    pub numeric: String,
    /// Spelled-out amount, e.g. `"Satu juta lima ratus ribu Rupiah"`.
    pub spelled: String,
}

impl AmountLines {
    /// True when either line fell back to the `"N/A"` placeholder.
    pub fn is_placeholder(&self) -> bool {
        self.numeric == NOT_AVAILABLE || self.spelled == NOT_AVAILABLE
    }
}

/// Render both amount lines for a raw payload amount.
///
/// A malformed amount still renders (as the placeholder) so the document
/// comes out instead of crashing; the bad value is logged.
pub fn amount_lines(amount: Option<&RawAmount>) -> AmountLines {
    let lines = AmountLines {
        numeric: format_currency(amount),
        spelled: amount_to_words(amount),
    };
    if lines.is_placeholder() {
        tracing::warn!(?amount, "receipt amount fell back to placeholder");
    }
    lines
}

/// A payment-receipt record as fetched from the conference admin API.
///
/// The API is lenient about the amount field: JSON number, numeral string,
/// and null all occur in practice.
#[derive(Debug, Clone, Deserialize)]
pub struct ReceiptPayload {
    pub id: Uuid,
    pub receipt_no: String,
    pub payer: String,
    #[serde(default)]
    pub amount: Option<RawAmount>,
    pub issued_at: DateTime<Utc>,
}

impl ReceiptPayload {
    /// Render the amount lines for this receipt.
    pub fn amount_lines(&self) -> AmountLines {
        amount_lines(self.amount.as_ref())
    }
}
