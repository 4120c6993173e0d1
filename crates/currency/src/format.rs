//! IDR grouped-integer formatting.

use kwitansi_core::{NOT_AVAILABLE, RawAmount, normalize};

/// Format a Rupiah amount as `"IDR "` followed by period-grouped digits.
///
/// Fractional amounts round half away from zero to whole Rupiah. Missing,
/// unparseable, and non-finite amounts render as `"N/A"`. Negative amounts
/// keep their sign on the digits: `"IDR -1.234"`.
pub fn format_currency(amount: Option<&RawAmount>) -> String {
    let Ok(value) = normalize(amount) else {
        return NOT_AVAILABLE.to_string();
    };

    let rounded = value.round();
    if rounded < i128::MIN as f64 || rounded >= i128::MAX as f64 {
        return NOT_AVAILABLE.to_string();
    }

    format!("IDR {}", group_thousands(rounded as i128))
}

/// Insert a period every three digits from the right: 1234567 → "1.234.567".
fn group_thousands(n: i128) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut grouped: String = digits
        .chars()
        .rev()
        .enumerate()
        .fold(
            String::with_capacity(digits.len() + digits.len() / 3),
            |mut acc, (i, c)| {
                if i > 0 && i % 3 == 0 {
                    acc.push('.');
                }
                acc.push(c);
                acc
            },
        )
        .chars()
        .rev()
        .collect();
    if n < 0 {
        grouped.insert(0, '-');
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(amount: RawAmount) -> String {
        format_currency(Some(&amount))
    }

    #[test]
    fn groups_digits_with_periods() {
        assert_eq!(fmt(RawAmount::from(1_234_567u64)), "IDR 1.234.567");
        assert_eq!(fmt(RawAmount::from(1_000u64)), "IDR 1.000");
        assert_eq!(fmt(RawAmount::from(999u64)), "IDR 999");
        assert_eq!(fmt(RawAmount::from(0u64)), "IDR 0");
    }

    #[test]
    fn invalid_inputs_render_placeholder() {
        assert_eq!(format_currency(None), "N/A");
        assert_eq!(fmt(RawAmount::from("abc")), "N/A");
        assert_eq!(fmt(RawAmount::Number(f64::NAN)), "N/A");
    }

    #[test]
    fn string_input_is_parsed() {
        assert_eq!(fmt(RawAmount::from("500000")), "IDR 500.000");
    }

    #[test]
    fn fractional_amounts_round_half_away_from_zero() {
        assert_eq!(fmt(RawAmount::Number(1_234_567.6)), "IDR 1.234.568");
        assert_eq!(fmt(RawAmount::Number(2.5)), "IDR 3");
        assert_eq!(fmt(RawAmount::Number(2.4)), "IDR 2");
        assert_eq!(fmt(RawAmount::Number(-2.5)), "IDR -3");
    }

    #[test]
    fn negative_amounts_keep_their_sign() {
        assert_eq!(fmt(RawAmount::Number(-1_234.0)), "IDR -1.234");
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 1000,
                ..ProptestConfig::default()
            })]

            /// Property: grouping only inserts separators, never alters digits.
            #[test]
            fn grouping_preserves_digits(n in 0u64..u64::MAX) {
                let grouped = group_thousands(n as i128);
                let stripped: String =
                    grouped.chars().filter(|c| *c != '.').collect();
                prop_assert_eq!(stripped, n.to_string());
            }

            /// Property: every group between separators has exactly three
            /// digits, except a shorter leading group.
            #[test]
            fn groups_are_three_digits(n in 0u64..u64::MAX) {
                let grouped = group_thousands(n as i128);
                let mut groups = grouped.split('.');
                let first = groups.next().unwrap();
                prop_assert!((1..=3).contains(&first.len()));
                for g in groups {
                    prop_assert_eq!(g.len(), 3);
                }
            }
        }
    }
}
