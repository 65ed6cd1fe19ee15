//! Cell formatting: grouped numbers, currency, derived percentages.
//!
//! Formatting fails closed: division by zero, missing values, and
//! non-numeric input all render [`MISSING`] instead of propagating.

use crate::types::{CellFormat, CellValue, Row};

/// Fallback rendered for missing or unformattable numeric values.
pub const MISSING: &str = "—";

/// Render one cell according to its column format.
///
/// `PercentOf` ignores the cell's own value and derives the display from
/// its two source columns on the same row.
pub fn format_value(value: &CellValue, format: &CellFormat, row: &Row) -> String {
    match format {
        CellFormat::Text => value.as_text().into_owned(),
        CellFormat::Number => match value.as_number() {
            Some(n) => format_number(n),
            None => MISSING.to_string(),
        },
        CellFormat::Currency => match value.as_number() {
            Some(n) => format!("${}", format_fixed(n, 2)),
            None => MISSING.to_string(),
        },
        CellFormat::PercentOf {
            numerator,
            denominator,
        } => {
            let num = row.get(numerator).as_number();
            let den = row.get(denominator).as_number();
            match (num, den) {
                (Some(n), Some(d)) if d != 0.0 => {
                    format!("{}%", format_fixed(n / d * 100.0, 2))
                }
                _ => MISSING.to_string(),
            }
        }
    }
}

/// en-US number formatting: grouping separators, fractional part trimmed
/// to at most three digits ("5,000", "0.125").
pub fn format_number(n: f64) -> String {
    let fixed = format!("{:.3}", n.abs());
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    let (int_part, frac_part) = trimmed.split_once('.').unwrap_or((trimmed, ""));
    // Values that round to zero lose their sign, never "-0"
    let sign = if n < 0.0 && trimmed != "0" { "-" } else { "" };
    let grouped = group_digits(int_part);
    if frac_part.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac_part}")
    }
}

/// Grouped with a fixed number of fraction digits ("5,000.00").
pub fn format_fixed(n: f64, digits: usize) -> String {
    let rounded = format!("{:.digits$}", n.abs());
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));
    let nonzero = rounded.bytes().any(|b| b.is_ascii_digit() && b != b'0');
    let sign = if n < 0.0 && nonzero { "-" } else { "" };
    let grouped = group_digits(int_part);
    if frac_part.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac_part}")
    }
}

/// Insert a thousands separator every three digits from the right.
fn group_digits(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
