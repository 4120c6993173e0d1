//! Amount error model.

use thiserror::Error;

/// Result type used across the amount-normalization layer.
pub type AmountResult<T> = Result<T, AmountError>;

/// Why a raw amount could not be normalized to a numeric value.
///
/// Display-layer callers collapse every variant into the `"N/A"` placeholder;
/// the variants exist so logs can say what was wrong with the payload.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AmountError {
    /// The payload carried no amount at all (absent or `null` field).
    #[error("amount is missing")]
    Missing,

    /// The amount text did not parse as a decimal numeral.
    #[error("unparseable amount: {0:?}")]
    Unparseable(String),

    /// The numeric amount was NaN or infinite.
    #[error("amount is not finite")]
    NotFinite,
}
