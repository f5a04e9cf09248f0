//! Currency quantization and locale-aware presentation helpers.

use std::fmt::Write;

use crate::period::calendar::parse_iso_date;

/// Pattern used when a date is shown to people, e.g. `Mar 1, 2024`.
pub const DEFAULT_DATE_PATTERN: &str = "%b %-d, %Y";

const COMPACT_UNITS: [(f64, &str); 4] = [(1e3, "K"), (1e6, "M"), (1e9, "B"), (1e12, "T")];

/// Rounds half-up to `decimals` places.
pub fn round_half_up(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor + 0.5).floor() / factor
}

/// Quantizes to whole cents. Every monetary output of the crate goes through here.
///
/// The epsilon nudge keeps values like `1.005` from rounding down because of their binary
/// representation.
pub fn to_currency(value: f64) -> f64 {
    round_half_up(value + f64::EPSILON, 2)
}

/// Separators and currency marker used when money is shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoneyStyle {
    pub currency: String,
    pub decimal_separator: char,
    pub grouping_separator: char,
}

impl MoneyStyle {
    /// Style for a BCP 47 style tag (`en-US`, `de_DE`, `fr`) and an ISO 4217 code.
    ///
    /// Only the language part of the tag matters. Unknown languages use en-US separators.
    pub fn new(locale: &str, currency: &str) -> Self {
        let language = locale
            .split(|c: char| c == '-' || c == '_')
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        let (decimal_separator, grouping_separator) = match language.as_str() {
            "fr" => (',', ' '),
            "de" | "es" | "it" | "nl" | "pt" => (',', '.'),
            _ => ('.', ','),
        };
        Self {
            currency: currency.trim().to_ascii_uppercase(),
            decimal_separator,
            grouping_separator,
        }
    }
}

impl Default for MoneyStyle {
    fn default() -> Self {
        Self::new("en-US", "USD")
    }
}

fn symbol_for(code: &str) -> Option<&'static str> {
    match code {
        "USD" => Some("$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        "JPY" => Some("¥"),
        _ => None,
    }
}

/// Formats a value as US dollars, e.g. `$1,254.24` or `-$12.50`.
pub fn format_currency(value: f64) -> String {
    format_money(value, &MoneyStyle::default())
}

/// Formats a quantized value in `style`: `€1.254,24` for a known symbol, `1,254.24 CHF`
/// otherwise.
pub fn format_money(value: f64, style: &MoneyStyle) -> String {
    let rounded = to_currency(value);
    let body = format!("{:.2}", rounded.abs());
    let (int_part, fraction) = body.split_once('.').unwrap_or((body.as_str(), "00"));
    let number = format!(
        "{}{}{fraction}",
        group_digits(int_part, style.grouping_separator),
        style.decimal_separator
    );
    let sign = if rounded < 0.0 { "-" } else { "" };
    match symbol_for(&style.currency) {
        Some(symbol) => format!("{sign}{symbol}{number}"),
        None => format!("{sign}{number} {}", style.currency),
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index != 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

/// Formats an ISO date with a chrono pattern, echoing the input when it does not parse.
pub fn format_iso_date(iso: &str, pattern: &str) -> String {
    let Some(date) = parse_iso_date(iso) else {
        return iso.to_string();
    };
    let mut rendered = String::new();
    if write!(rendered, "{}", date.format(pattern)).is_err() {
        return iso.to_string();
    }
    rendered
}

/// Compact notation with at most one fraction digit: `950`, `1.2K`, `3.4M`.
pub fn format_compact_number(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let magnitude = value.abs();

    let mut scaled = round_half_up(magnitude, 1);
    let mut suffix = "";
    for (threshold, unit) in COMPACT_UNITS {
        if scaled < 1000.0 {
            break;
        }
        scaled = round_half_up(magnitude / threshold, 1);
        suffix = unit;
    }

    let mut body = format!("{scaled:.1}");
    if body.ends_with(".0") {
        body.truncate(body.len() - 2);
    }
    format!("{sign}{body}{suffix}")
}
