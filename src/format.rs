//! Display helpers for amounts and dates in projection tables

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

const MONTHS_SHORT: [&str; 12] = [
    "jan", "fev", "mar", "abr", "mai", "jun", "jul", "ago", "set", "out", "nov", "dez",
];

/// Format an amount as Brazilian reais: 1234.5 -> "R$ 1.234,50"
pub fn format_brl(value: f64) -> String {
    brl_from_fixed(&format!("{:.2}", value))
}

/// Same as [`format_brl`] for exact decimal amounts
pub fn format_brl_decimal(value: Decimal) -> String {
    brl_from_fixed(&format!("{:.2}", value))
}

/// Short month label, e.g. "fev/2025"
pub fn month_label(date: NaiveDate) -> String {
    format!("{}/{}", MONTHS_SHORT[date.month0() as usize], date.year())
}

// Expects "[-]digits.dd"
fn brl_from_fixed(fixed: &str) -> String {
    let (negative, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, fixed),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let is_zero = unsigned.chars().all(|c| c == '0' || c == '.');
    let sign = if negative && !is_zero { "-" } else { "" };
    format!("{}R$ {},{}", sign, grouped, frac_part)
}
