//! Amount-to-words conversion for Indonesian Rupiah.

use kwitansi_core::{NOT_AVAILABLE, RawAmount, normalize};

/// Ones words, indexed by digit (index 0 unused).
const SATUAN: [&str; 10] = [
    "", "satu", "dua", "tiga", "empat", "lima", "enam", "tujuh", "delapan", "sembilan",
];

/// Teens words for 10..=19.
const BELASAN: [&str; 10] = [
    "sepuluh",
    "sebelas",
    "dua belas",
    "tiga belas",
    "empat belas",
    "lima belas",
    "enam belas",
    "tujuh belas",
    "delapan belas",
    "sembilan belas",
];

/// Tens words for 20, 30, ... 90 (indices 0 and 1 unused).
const PULUHAN: [&str; 10] = [
    "",
    "",
    "dua puluh",
    "tiga puluh",
    "empat puluh",
    "lima puluh",
    "enam puluh",
    "tujuh puluh",
    "delapan puluh",
    "sembilan puluh",
];

/// Scale words per base-1000 chunk index; index 0 (units) has no scale word.
const RIBUAN: [&str; 5] = ["", "ribu", "juta", "miliar", "triliun"];

/// Smallest whole amount with no scale word in [`RIBUAN`] (needs a 6th chunk).
const BEYOND_TRILIUN: u64 = 1_000_000_000_000_000;

/// Spell a non-negative Rupiah amount in Indonesian, suffixed with "Rupiah".
///
/// Fail-soft: missing, unparseable, non-finite, and negative amounts all
/// render as `"N/A"`, as do amounts of 10^15 Rupiah and above (past the
/// `triliun` scale word). Sub-unit amounts render as
/// `"Kurang dari satu Rupiah"` rather than being spelled digit by digit.
pub fn amount_to_words(amount: Option<&RawAmount>) -> String {
    let Ok(value) = normalize(amount) else {
        return NOT_AVAILABLE.to_string();
    };
    spell_rupiah(value).unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

fn spell_rupiah(value: f64) -> Option<String> {
    if value < 0.0 {
        return None;
    }
    if value == 0.0 {
        return Some("nol Rupiah".to_string());
    }
    let whole = value.floor();
    if whole == 0.0 {
        return Some("Kurang dari satu Rupiah".to_string());
    }
    if whole >= BEYOND_TRILIUN as f64 {
        return None;
    }
    let words = integer_to_words(whole as u64)?;
    if words.is_empty() {
        return None;
    }
    Some(format!("{} Rupiah", capitalize_first(&words)))
}

/// Spell `n` in lowercase Indonesian number words.
///
/// Returns `None` when `n` would need a scale word past `triliun`
/// (`n >= 10^15`).
pub fn integer_to_words(n: u64) -> Option<String> {
    if n == 0 {
        return Some("nol".to_string());
    }
    if n >= BEYOND_TRILIUN {
        return None;
    }

    let mut rest = n;
    let mut words = String::new();
    for (i, scale) in RIBUAN.iter().enumerate() {
        if rest == 0 {
            break;
        }
        let chunk = (rest % 1000) as u16;
        rest /= 1000;
        if chunk == 0 {
            continue;
        }

        // Exactly one leading thousand contracts to "seribu", never "satu ribu".
        let group = if i == 1 && chunk == 1 && rest == 0 {
            "seribu".to_string()
        } else if i == 0 {
            three_digits(chunk)
        } else {
            format!("{} {}", three_digits(chunk), scale)
        };

        words = if words.is_empty() {
            group
        } else {
            format!("{group} {words}")
        };
    }
    Some(words)
}

/// Spell a three-digit chunk (1..=999) in lowercase words.
fn three_digits(num: u16) -> String {
    let mut parts: Vec<String> = Vec::new();

    let hundreds = (num / 100) as usize;
    if hundreds == 1 {
        parts.push("seratus".to_string());
    } else if hundreds > 1 {
        parts.push(format!("{} ratus", SATUAN[hundreds]));
    }

    let r = num % 100;
    match r {
        0 => {}
        1..=9 => parts.push(SATUAN[r as usize].to_string()),
        10..=19 => parts.push(BELASAN[(r - 10) as usize].to_string()),
        _ => {
            let tens = PULUHAN[(r / 10) as usize];
            let ones = (r % 10) as usize;
            if ones == 0 {
                parts.push(tens.to_string());
            } else {
                parts.push(format!("{} {}", tens, SATUAN[ones]));
            }
        }
    }

    parts.join(" ")
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
