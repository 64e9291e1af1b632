//! Shape resolution.
//!
//! Each [`Shape`] variant has one resolver that extracts the raw peak and
//! off-peak text. Coercion to percentages happens afterwards, in one place.
//!
//! ```text
//! Sequence ──┬─ [a, b] (no records)  -> positional
//!            └─ labeled records       -> find_labeled + ITEM_VALUE_KEYS
//! Record   ───── PEAK_KEYS / OFF_PEAK_KEYS
//! PlainText ─┬─ "a,b"                 -> two CSV parts
//!            └─ anything else         -> whole text as peak
//! ```

use super::lookup::{
    ITEM_VALUE_KEYS, OFF_PEAK_KEYS, OFF_PEAK_LABELS, PEAK_KEYS, PEAK_LABELS, find_labeled, first_present,
    scalar_text,
};
use super::shape::Shape;
use super::trigger::InputTraits;
use super::trim_js;
use serde_json::{Map, Value};

/// Raw, uncoerced sides of a split.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct RawSides {
    pub peak: Option<String>,
    pub off_peak: Option<String>,
}

impl RawSides {
    fn new(peak: Option<String>, off_peak: Option<String>) -> Self {
        RawSides { peak, off_peak }
    }
}

/// Extract raw sides from a classified shape.
pub(crate) fn extract(shape: &Shape, traits: InputTraits) -> RawSides {
    match shape {
        Shape::Sequence(items) => from_sequence(items),
        Shape::Record(record) => from_record(record),
        Shape::PlainText(text) if traits.contains(InputTraits::HAS_COMMA) => from_text(text),
        Shape::PlainText(text) => RawSides::new(Some(text.clone()), None),
    }
}

fn from_sequence(items: &[Value]) -> RawSides {
    if let [peak, off_peak] = items {
        if !peak.is_object() && !off_peak.is_object() {
            return RawSides::new(scalar_text(peak), scalar_text(off_peak));
        }
    }

    let peak_item = find_labeled(items, PEAK_LABELS);
    let off_item = find_labeled(items, OFF_PEAK_LABELS);

    if peak_item.is_none() && off_item.is_none() {
        return RawSides::default();
    }

    RawSides::new(
        peak_item.and_then(|item| first_present(item, ITEM_VALUE_KEYS)),
        off_item.and_then(|item| first_present(item, ITEM_VALUE_KEYS)),
    )
}

fn from_record(record: &Map<String, Value>) -> RawSides {
    RawSides::new(first_present(record, PEAK_KEYS), first_present(record, OFF_PEAK_KEYS))
}

fn from_text(text: &str) -> RawSides {
    let parts: Vec<&str> = text.split(',').map(trim_js).collect();
    if let [peak, off_peak] = parts.as_slice() {
        return RawSides::new(non_empty(peak), non_empty(off_peak));
    }
    RawSides::new(Some(text.to_string()), None)
}

fn non_empty(part: &str) -> Option<String> {
    if part.is_empty() { None } else { Some(part.to_string()) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sides(peak: Option<&str>, off_peak: Option<&str>) -> RawSides {
        RawSides::new(peak.map(String::from), off_peak.map(String::from))
    }

    #[test]
    fn positional_pair() {
        let shape = Shape::Sequence(vec![json!(70), json!("30%")]);
        assert_eq!(extract(&shape, InputTraits::HAS_DIGITS), sides(Some("70"), Some("30%")));
    }

    #[test]
    fn pair_with_null_side() {
        let shape = Shape::Sequence(vec![Value::Null, json!("30%")]);
        assert_eq!(extract(&shape, InputTraits::HAS_DIGITS), sides(None, Some("30%")));
    }

    #[test]
    fn pair_containing_a_record_is_searched_by_label() {
        let shape = Shape::Sequence(vec![json!({"label": "peak", "amount": 0.6}), json!("x")]);
        assert_eq!(extract(&shape, InputTraits::HAS_DIGITS), sides(Some("0.6"), None));
    }

    #[test]
    fn unlabeled_sequence_is_empty() {
        let shape = Shape::Sequence(vec![json!(1), json!(2), json!(3)]);
        assert_eq!(extract(&shape, InputTraits::HAS_DIGITS), RawSides::default());
    }

    #[test]
    fn record_candidates() {
        let raw = r#"{"peak_percent": 55, "offPct": "45"}"#;
        let Some(Shape::Record(record)) = Shape::classify(Some(raw), InputTraits::scan(raw)) else {
            panic!("expected record");
        };
        assert_eq!(from_record(&record), sides(Some("55"), Some("45")));
    }

    #[test]
    fn csv_and_scalar_text() {
        assert_eq!(from_text("70, 30"), sides(Some("70"), Some("30")));
        assert_eq!(from_text("70,"), sides(Some("70"), None));
        assert_eq!(from_text("55"), sides(Some("55"), None));
        assert_eq!(from_text("a,b,c"), sides(Some("a,b,c"), None));
    }

    #[test]
    fn csv_parts_drop_byte_order_marks() {
        assert_eq!(from_text("70\u{feff},\u{feff} 30"), sides(Some("70"), Some("30")));
    }

    #[test]
    fn text_without_commas_is_a_single_peak() {
        let shape = Shape::PlainText("55".to_string());
        assert_eq!(extract(&shape, InputTraits::HAS_DIGITS), sides(Some("55"), None));

        let scan = InputTraits::scan("70,30");
        assert_eq!(extract(&Shape::PlainText("70,30".to_string()), scan), sides(Some("70"), Some("30")));
    }
}
