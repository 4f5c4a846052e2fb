//! Formatting helpers
//!
//! Currency, date and greeting formatting shared by the storefront pages.
//! All monetary amounts are whole rupiah; formatted strings use the
//! `Rp 50.000` style with dot-grouped thousands and no decimals.

use jiff::{Zoned, civil::DateTime};

/// Indonesian month names, indexed by `month - 1`.
const MONTHS: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

/// Formats a rupiah amount with dot-grouped thousands, e.g. `Rp 50.000`.
#[must_use]
pub fn format_rupiah(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    format!("Rp {grouped}")
}

/// Parses a formatted price by stripping every non-digit character.
///
/// `"Rp 50.000"` parses to `50_000`. A string with no digits at all (or one
/// whose digits overflow `u64`) yields `None`.
#[must_use]
pub fn parse_rupiah(text: &str) -> Option<u64> {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();

    digits.parse().ok()
}

/// Returns the greeting for a given hour of day.
#[must_use]
pub fn greeting_for_hour(hour: i8) -> &'static str {
    if hour < 12 {
        "Selamat Pagi"
    } else if hour < 15 {
        "Selamat Siang"
    } else if hour < 18 {
        "Selamat Sore"
    } else {
        "Selamat Malam"
    }
}

/// Returns the greeting for the current local time.
#[must_use]
pub fn greeting() -> &'static str {
    greeting_for_hour(Zoned::now().hour())
}

/// Formats a date in long Indonesian form, e.g. `12 Januari 2025, 14.30`.
#[must_use]
pub fn format_date(when: &DateTime) -> String {
    let month_index = usize::from(when.month().unsigned_abs()).saturating_sub(1);
    let month = MONTHS.get(month_index).copied().unwrap_or_default();

    format!(
        "{} {month} {}, {:02}.{:02}",
        when.day(),
        when.year(),
        when.hour(),
        when.minute()
    )
}

/// Escapes the five HTML-special characters in a string.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());

    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(ch),
        }
    }

    escaped
}
