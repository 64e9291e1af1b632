//! Split normalization pipeline.
//!
//! Turning a raw customer-data value into a [`Split`] is a single pass:
//!
//! ```text
//! raw ── InputTraits::scan ──┐                      (trigger.rs)
//!                            v
//!                  Shape::classify                   (shape.rs)
//!                    Sequence | Record | PlainText
//!                            │
//!                            v
//!                  resolve::extract                  (resolve.rs, lookup.rs)
//!                    raw peak / off-peak text
//!                            │
//!                            v
//!                  percent::coerce (per side)        (percent.rs)
//!                            │
//!                            v
//!                          Split
//! ```
//!
//! Nothing in the pipeline fails. Every unusable input degrades to `None` on
//! the affected side.
//!
//! ## Responsibilities by module
//!
//! - `trigger.rs`: coarse traits of the raw text, used to skip inputs that
//!   cannot produce a number.
//! - `shape.rs`: decodes once into a tagged union.
//! - `lookup.rs`: ordered candidate keys and labeled-item search.
//! - `resolve.rs`: per-shape extraction of raw sides.
//! - `percent.rs`: coercion of a raw side into a whole percentage.
//!
//! ## Debugging
//!
//! Each run emits a `debug` event on the `energen::normalize` target with the
//! traits, the shape and the result.

#[path = "normalize/lookup.rs"]
mod lookup;
#[path = "normalize/percent.rs"]
mod percent;
#[path = "normalize/resolve.rs"]
mod resolve;
#[path = "normalize/shape.rs"]
mod shape;
#[path = "normalize/trigger.rs"]
mod trigger;

#[cfg(test)]
#[path = "normalize/tests.rs"]
mod tests;

pub(crate) use percent::coerce;
pub(crate) use resolve::RawSides;
pub use shape::ShapeKind;
pub use trigger::InputTraits;

use crate::{RangePolicy, Split};
use shape::Shape;

/// Trim the way a browser `String.prototype.trim` does: Unicode white space
/// and the byte-order mark, but not NEL (U+0085).
pub(crate) fn trim_js(s: &str) -> &str {
    s.trim_matches(|c: char| c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}'))
}

/// Everything one normalization run found out about its input.
#[derive(Debug, Clone)]
pub(crate) struct Outcome {
    pub split: Split,
    pub kind: ShapeKind,
    pub traits: InputTraits,
    pub raw: RawSides,
}

/// Run the full pipeline on `raw`.
pub(crate) fn run(raw: Option<&str>, policy: RangePolicy) -> Outcome {
    let traits = raw.map_or(InputTraits::empty(), InputTraits::scan);

    let Some(shape) = Shape::classify(raw, traits) else {
        tracing::debug!(target: "energen::normalize", "empty input");
        return Outcome { split: Split::EMPTY, kind: ShapeKind::Empty, traits, raw: RawSides::default() };
    };
    let kind = shape.kind();

    if !traits.may_hold_number() {
        tracing::debug!(target: "energen::normalize", ?traits, ?kind, "no digits; skipping extraction");
        return Outcome { split: Split::EMPTY, kind, traits, raw: RawSides::default() };
    }

    let sides = resolve::extract(&shape, traits);
    let split = Split {
        peak: coerce(sides.peak.as_deref(), policy),
        off_peak: coerce(sides.off_peak.as_deref(), policy),
    };

    tracing::debug!(
        target: "energen::normalize",
        ?traits,
        ?kind,
        raw_peak = ?sides.peak,
        raw_off_peak = ?sides.off_peak,
        peak = ?split.peak,
        off_peak = ?split.off_peak,
        "resolved split"
    );

    Outcome { split, kind, traits, raw: sides }
}
