//! Display formatting for customer-data values.
//!
//! These helpers turn normalized values into the strings the presentation
//! layer shows: percent labels, currency amounts, short dates and brand
//! titles. Each one has a defined fallback instead of an error, since the
//! caller always has something to render.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

/// Currency used when a payload doesn't name one.
pub const DEFAULT_CURRENCY: &str = "EUR";

/// Placeholder for a missing percentage.
const MISSING: &str = "-";

/// `Some(70)` -> `"70%"`, `None` -> `"-"`.
pub fn format_percent(value: Option<u8>) -> String {
    match value {
        Some(n) => format!("{n}%"),
        None => MISSING.to_string(),
    }
}

/// Format `amount` in `currency` with grouped thousands.
///
/// Missing or non-finite amounts render as an empty string.
///
/// # Example
/// ```
/// use energen::format_currency;
///
/// assert_eq!(format_currency(Some(1234.5), "EUR"), "€1,234.50");
/// assert_eq!(format_currency(None, "EUR"), "");
/// ```
pub fn format_currency(amount: Option<f64>, currency: &str) -> String {
    let Some(amount) = amount.filter(|a| a.is_finite()) else {
        return String::new();
    };

    let code = currency.trim().to_ascii_uppercase();
    let (symbol, decimals): (Option<&str>, usize) = match code.as_str() {
        "EUR" => (Some("€"), 2),
        "USD" => (Some("$"), 2),
        "GBP" => (Some("£"), 2),
        "JPY" => (Some("¥"), 0),
        _ => (None, 2),
    };

    let fixed = format!("{:.*}", decimals, amount.abs());
    let (whole, frac) = match fixed.split_once('.') {
        Some((w, f)) => (w, Some(f)),
        None => (fixed.as_str(), None),
    };

    let mut body = group_thousands(whole);
    if let Some(frac) = frac {
        body.push('.');
        body.push_str(frac);
    }

    // "-0.00" reads oddly; only sign amounts that survive rounding.
    let negative = amount < 0.0 && body.bytes().any(|b| (b'1'..=b'9').contains(&b));
    let sign = if negative { "-" } else { "" };

    match symbol {
        Some(symbol) => format!("{sign}{symbol}{body}"),
        None => format!("{sign}{code} {body}"),
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (idx, c) in digits.chars().enumerate() {
        if idx > 0 && (len - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Format a date string as `"<day> <Mon> <year>"`, e.g. `"1 Mar 2025"`.
///
/// Accepts RFC 3339 timestamps (converted to local time), ISO-like date-times
/// without an offset, `YYYY-MM-DD`, `YYYY/MM/DD` and `Month D, YYYY`. Anything
/// else is returned unchanged.
pub fn format_date(input: &str) -> String {
    match parse_date(input.trim()) {
        Some(date) => date.format("%-d %b %Y").to_string(),
        None => input.to_string(),
    }
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Local).date_naive());
    }

    const DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"];
    for fmt in DATE_TIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }

    const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%B %d, %Y", "%B %d %Y", "%d %B %Y"];
    DATE_FORMATS.iter().find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}

/// `"energen-home"` -> `"Energen Home"`.
///
/// Word boundaries are ASCII-only, like a browser `\b\w`: a letter after a
/// non-ASCII character starts a word, and non-ASCII letters stay as they are.
pub fn to_title_case(s: &str) -> String {
    let spaced = regex!(r"[-_]").replace_all(s, " ");
    regex!(r"(^|[^A-Za-z0-9_])([a-z])")
        .replace_all(&spaced, |caps: &regex::Captures| format!("{}{}", &caps[1], caps[2].to_ascii_uppercase()))
        .into_owned()
}

/// Brand title for a site key; a missing or blank key becomes `"Site"`.
pub fn brand_title(site: Option<&str>) -> String {
    match site.map(str::trim).filter(|s| !s.is_empty()) {
        Some(site) => to_title_case(site),
        None => "Site".to_string(),
    }
}
