//! Loosely-typed monetary amounts as they arrive in API payloads.
//!
//! The conference admin API is not strict about amount fields: the same field
//! may hold a JSON number, a numeral string, or `null`. [`RawAmount`] models
//! the two value shapes; absence is `Option::<RawAmount>::None`.

use serde::{Deserialize, Serialize};

use crate::error::{AmountError, AmountResult};

/// Placeholder rendered wherever an amount is missing or unparseable.
pub const NOT_AVAILABLE: &str = "N/A";

/// A monetary amount as found in a fetched payload, before normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawAmount {
    Number(f64),
    Text(String),
}

impl RawAmount {
    /// Normalize to a finite `f64` number of Rupiah.
    ///
    /// Text is trimmed and must parse as a complete decimal numeral; a
    /// partial-prefix parse such as `"12abc"` is rejected.
    pub fn to_f64(&self) -> AmountResult<f64> {
        let value = match self {
            RawAmount::Number(n) => *n,
            RawAmount::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| AmountError::Unparseable(s.clone()))?,
        };
        if !value.is_finite() {
            return Err(AmountError::NotFinite);
        }
        Ok(value)
    }
}

impl From<f64> for RawAmount {
    fn from(value: f64) -> Self {
        RawAmount::Number(value)
    }
}

impl From<u64> for RawAmount {
    fn from(value: u64) -> Self {
        RawAmount::Number(value as f64)
    }
}

impl From<i64> for RawAmount {
    fn from(value: i64) -> Self {
        RawAmount::Number(value as f64)
    }
}

impl From<&str> for RawAmount {
    fn from(value: &str) -> Self {
        RawAmount::Text(value.to_string())
    }
}

impl From<String> for RawAmount {
    fn from(value: String) -> Self {
        RawAmount::Text(value)
    }
}

/// Normalize an optional raw amount, treating absence as an error.
pub fn normalize(amount: Option<&RawAmount>) -> AmountResult<f64> {
    amount.ok_or(AmountError::Missing)?.to_f64()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_normalizes_as_is() {
        assert_eq!(RawAmount::Number(1500.0).to_f64(), Ok(1500.0));
        assert_eq!(RawAmount::Number(0.5).to_f64(), Ok(0.5));
    }

    #[test]
    fn text_is_trimmed_and_parsed() {
        assert_eq!(RawAmount::from("500000").to_f64(), Ok(500000.0));
        assert_eq!(RawAmount::from("  1234.5 ").to_f64(), Ok(1234.5));
    }

    #[test]
    fn unparseable_text_is_rejected() {
        assert_eq!(
            RawAmount::from("abc").to_f64(),
            Err(AmountError::Unparseable("abc".to_string()))
        );
        assert_eq!(
            RawAmount::from("12abc").to_f64(),
            Err(AmountError::Unparseable("12abc".to_string()))
        );
    }

    #[test]
    fn non_finite_numbers_are_rejected() {
        assert_eq!(
            RawAmount::Number(f64::NAN).to_f64(),
            Err(AmountError::NotFinite)
        );
        assert_eq!(
            RawAmount::Number(f64::INFINITY).to_f64(),
            Err(AmountError::NotFinite)
        );
    }

    #[test]
    fn missing_amount_is_an_error() {
        assert_eq!(normalize(None), Err(AmountError::Missing));
        assert_eq!(normalize(Some(&RawAmount::Number(21.0))), Ok(21.0));
    }

    #[test]
    fn deserializes_untagged_from_json_number_and_string() {
        let n: RawAmount = serde_json::from_str("250000").unwrap();
        assert_eq!(n, RawAmount::Number(250000.0));

        let s: RawAmount = serde_json::from_str(r#""250000""#).unwrap();
        assert_eq!(s, RawAmount::Text("250000".to_string()));

        let absent: Option<RawAmount> = serde_json::from_str("null").unwrap();
        assert_eq!(absent, None);
    }
}
