//! Percent coercion.
//!
//! Turns a loosely formatted number into a whole percentage:
//!
//! ```text
//! "70%"  -> 70      percent literal, rounded then clamped to 0..=100
//! "0.7"  -> 70      fraction in 0..=1, scaled
//! "70"   -> 70      already a percent in (1, 100]
//! "150"  -> None    out of range (or clamped under RangePolicy::Clamp)
//! ```
//!
//! Plain numbers follow the JavaScript `Number()` grammar, since the values
//! come out of a browser-side personalization payload: decimal with optional
//! sign and exponent, `.5` / `5.`, `0x`/`0o`/`0b` integers and `Infinity`.

use super::trim_js;
use crate::RangePolicy;

/// Coerce `raw` to a whole percentage in `0..=100`.
pub(crate) fn coerce(raw: Option<&str>, policy: RangePolicy) -> Option<u8> {
    let s = trim_js(raw?);
    if s.is_empty() {
        return None;
    }

    if regex!(r"^-?[0-9]+(\.[0-9]+)?%$").is_match(s) {
        let n: f64 = s[..s.len() - 1].parse().ok()?;
        if !n.is_finite() {
            return None;
        }
        return Some(clamp_percent(n.round()));
    }

    let n = parse_js_number(s)?;
    if !n.is_finite() {
        return None;
    }

    if (0.0..=1.0).contains(&n) {
        return Some(clamp_percent((n * 100.0).round()));
    }
    if n > 1.0 && n <= 100.0 {
        return Some(clamp_percent(n.round()));
    }

    match policy {
        RangePolicy::Reject => None,
        RangePolicy::Clamp => Some(if n < 0.0 { 0 } else { 100 }),
    }
}

fn clamp_percent(n: f64) -> u8 {
    n.clamp(0.0, 100.0) as u8
}

/// Parse an already-trimmed string with JavaScript `Number()` semantics.
///
/// Returns `None` where `Number()` would yield `NaN`. Infinities are returned
/// as-is; callers decide what to do with them.
pub(crate) fn parse_js_number(s: &str) -> Option<f64> {
    if let Some(n) = parse_radix_literal(s) {
        return Some(n);
    }

    let (sign, body) = match s.as_bytes().first()? {
        b'-' => (-1.0, &s[1..]),
        b'+' => (1.0, &s[1..]),
        _ => (1.0, s),
    };

    if body == "Infinity" {
        return Some(sign * f64::INFINITY);
    }

    // Rust's float grammar also takes "inf"/"nan"; JavaScript does not.
    if !regex!(r"^([0-9]+\.?[0-9]*|\.[0-9]+)([eE][+-]?[0-9]+)?$").is_match(body) {
        return None;
    }

    body.parse::<f64>().ok().map(|n| sign * n)
}

/// `0x1F`, `0o17`, `0b101`: unsigned integers only.
fn parse_radix_literal(s: &str) -> Option<f64> {
    let caps = regex!(r"^0([xXoObB])([0-9a-zA-Z]+)$").captures(s)?;
    let radix = match &caps[1] {
        "x" | "X" => 16,
        "o" | "O" => 8,
        _ => 2,
    };

    let digits = &caps[2];
    let mut value = 0f64;
    for c in digits.chars() {
        let d = c.to_digit(radix)?;
        value = value * radix as f64 + d as f64;
    }
    Some(value)
}
