//! Shape classification.
//!
//! Raw split values arrive in several encodings: JSON arrays, JSON objects,
//! comma-separated text or a bare scalar. Classification decodes the value
//! exactly once and hands the rest of the pipeline a refined [`Shape`], so
//! the resolvers never re-test what kind of value they hold.
//!
//! ```text
//! raw ──trim──┬─ ""                      -> None (empty)
//!             ├─ LOOKS_JSON and parses    -> Sequence | Record
//!             └─ anything else            -> PlainText (trimmed)
//! ```
//!
//! Decoding is as lenient as a browser `JSON.parse`: numbers too large for an
//! `f64` and unpaired surrogate escapes are rewritten before a second attempt
//! (see [`repair`]), so one oversized side doesn't cost the other side its
//! structure. A JSON parse failure is still not an error: the trimmed text
//! falls through to `PlainText` and gets the CSV/scalar treatment.

use super::trigger::InputTraits;
use super::trim_js;
use serde_json::{Map, Value};

/// A decoded raw value.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Shape {
    /// A JSON array.
    Sequence(Vec<Value>),
    /// A JSON object.
    Record(Map<String, Value>),
    /// Non-JSON text, or JSON-looking text that failed to parse.
    PlainText(String),
}

/// Data-free view of the detected shape, reported by verbose normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Empty,
    Sequence,
    Record,
    PlainText,
}

impl Shape {
    /// Decode `raw` into a [`Shape`]. Returns `None` for missing or blank input.
    ///
    /// `traits` must come from [`InputTraits::scan`] on the same input; only
    /// input flagged [`InputTraits::LOOKS_JSON`] is handed to the JSON decoder.
    pub(crate) fn classify(raw: Option<&str>, traits: InputTraits) -> Option<Shape> {
        let trimmed = trim_js(raw?);
        if trimmed.is_empty() {
            return None;
        }

        if !traits.contains(InputTraits::LOOKS_JSON) {
            return Some(Shape::PlainText(trimmed.to_string()));
        }

        match decode(trimmed) {
            Ok(Value::Array(items)) => Some(Shape::Sequence(items)),
            Ok(Value::Object(map)) => Some(Shape::Record(map)),
            // A leading bracket rules out scalars; keep the text anyway.
            Ok(_) => Some(Shape::PlainText(trimmed.to_string())),
            Err(err) => {
                tracing::trace!(error = %err, "json decode failed; treating as plain text");
                Some(Shape::PlainText(trimmed.to_string()))
            }
        }
    }

    pub(crate) fn kind(&self) -> ShapeKind {
        match self {
            Shape::Sequence(_) => ShapeKind::Sequence,
            Shape::Record(_) => ShapeKind::Record,
            Shape::PlainText(_) => ShapeKind::PlainText,
        }
    }
}

fn decode(text: &str) -> Result<Value, serde_json::Error> {
    serde_json::from_str(text).or_else(|err| match repair(text) {
        Some(repaired) => {
            tracing::trace!(error = %err, "retrying json decode on repaired text");
            serde_json::from_str(&repaired)
        }
        None => Err(err),
    })
}

/// Rewrite the JSON that `serde_json` rejects but a browser accepts.
///
/// - a number literal that overflows `f64` becomes the string `"Infinity"`
///   (or `"-Infinity"`), which coerces the way the browser's `Infinity` does;
/// - a `\uXXXX` escape naming an unpaired surrogate becomes `\ufffd`.
///
/// Returns `None` when there is nothing to rewrite.
fn repair(text: &str) -> Option<String> {
    let bytes = text.as_bytes();
    let mut out = String::new();
    let mut copied = 0;
    let mut in_string = false;
    let mut i = 0;

    // Every rewrite starts and ends on an ASCII byte, so the slices below stay
    // on char boundaries.
    let rewrite = |out: &mut String, from: usize, to: usize, with: &str, copied: &mut usize| {
        out.push_str(&text[*copied..from]);
        out.push_str(with);
        *copied = to;
    };

    while i < bytes.len() {
        let b = bytes[i];
        if in_string {
            match b {
                b'"' => in_string = false,
                b'\\' => match escape_unit(text, i) {
                    Some(0xD800..=0xDBFF) if matches!(escape_unit(text, i + 6), Some(0xDC00..=0xDFFF)) => {
                        i += 12;
                        continue;
                    }
                    Some(0xD800..=0xDFFF) => {
                        rewrite(&mut out, i, i + 6, "\\ufffd", &mut copied);
                        i += 6;
                        continue;
                    }
                    _ => {
                        i += 2;
                        continue;
                    }
                },
                _ => {}
            }
            i += 1;
            continue;
        }

        match b {
            b'"' => in_string = true,
            b'-' | b'0'..=b'9' => {
                let len = bytes[i..]
                    .iter()
                    .position(|b| !matches!(b, b'0'..=b'9' | b'.' | b'e' | b'E' | b'+' | b'-'))
                    .unwrap_or(bytes.len() - i);
                let token = &text[i..i + len];
                if regex!(r"^-?(0|[1-9][0-9]*)(\.[0-9]+)?([eE][+-]?[0-9]+)?$").is_match(token) {
                    if let Ok(n) = token.parse::<f64>() {
                        if n.is_infinite() {
                            let with = if n < 0.0 { "\"-Infinity\"" } else { "\"Infinity\"" };
                            rewrite(&mut out, i, i + len, with, &mut copied);
                        }
                    }
                }
                i += len;
                continue;
            }
            _ => {}
        }
        i += 1;
    }

    if copied == 0 {
        return None;
    }
    out.push_str(&text[copied..]);
    Some(out)
}

/// The code unit of a `\uXXXX` escape starting at `at`, if there is one.
fn escape_unit(text: &str, at: usize) -> Option<u16> {
    let hex = text.get(at..at + 6)?.strip_prefix("\\u")?;
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u16::from_str_radix(hex, 16).ok()
}
