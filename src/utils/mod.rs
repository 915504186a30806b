use chrono::{DateTime, Utc};

/// Reverse a `BASE/QUOTE` symbol when the pair is flipped.
pub fn flipped_symbol(symbol: &str, flip: bool) -> String {
    if flip {
        symbol.split('/').rev().collect::<Vec<_>>().join("/")
    } else {
        symbol.to_string()
    }
}

/// Format a price with thousands separators and a fixed number of fraction digits.
pub fn format_price(value: f64, precision: usize) -> String {
    let fixed = format!("{:.*}", precision, value.abs());
    let (whole, fraction) = match fixed.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (fixed.as_str(), None),
    };

    let mut result = String::new();
    let mut count = 0;

    for ch in whole.chars().rev() {
        if count == 3 {
            result.push(',');
            count = 0;
        }
        result.push(ch);
        count += 1;
    }

    let mut grouped: String = result.chars().rev().collect();
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }

    if value.is_sign_negative() && grouped.chars().any(|c| c.is_ascii_digit() && c != '0') {
        grouped.insert(0, '-');
    }
    grouped
}

/// Convert an on-chain unix timestamp into an absolute instant.
pub fn timestamp_from_unix(secs: u64) -> Option<DateTime<Utc>> {
    i64::try_from(secs)
        .ok()
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
}
