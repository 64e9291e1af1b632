//! Trigger scanning (input pre-classification).
//!
//! A single cheap pass over the raw input that records coarse traits. The
//! normalizer uses them to skip work that cannot produce a value: without an
//! ASCII digit anywhere in the input no side of a split can coerce to a
//! percentage (JSON `\u` escapes of digits carry digits themselves). Only
//! `LOOKS_JSON` input reaches the JSON decoder, and plain text is split into
//! two sides only when it `HAS_COMMA`.
//!
//! False positives are fine here. The downstream classifier and coercion still
//! have to accept the value.

use super::trim_js;

bitflags::bitflags! {
    /// Coarse traits of a raw value.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct InputTraits: u8 {
        /// Trimmed input opens with `{` or `[`.
        const LOOKS_JSON = 1 << 0;
        const HAS_DIGITS = 1 << 1;
        /// Plain text only splits into two sides around a comma.
        const HAS_COMMA  = 1 << 2;
    }
}

impl InputTraits {
    /// Scan `input` for coarse traits.
    pub fn scan(input: &str) -> Self {
        let mut traits = InputTraits::empty();
        let trimmed = trim_js(input);

        if trimmed.starts_with('{') || trimmed.starts_with('[') {
            traits |= InputTraits::LOOKS_JSON;
        }

        for b in trimmed.bytes() {
            match b {
                b'0'..=b'9' => traits |= InputTraits::HAS_DIGITS,
                b',' => traits |= InputTraits::HAS_COMMA,
                _ => {}
            }
        }

        traits
    }

    /// Whether any side of a split could still coerce to a number.
    pub fn may_hold_number(self) -> bool {
        self.contains(InputTraits::HAS_DIGITS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_detects_json_and_digits() {
        let traits = InputTraits::scan("  [\"70%\", \"30%\"]");
        assert!(traits.contains(InputTraits::LOOKS_JSON));
        assert!(traits.contains(InputTraits::HAS_DIGITS));
        assert!(traits.contains(InputTraits::HAS_COMMA));
    }

    #[test]
    fn scan_plain_words() {
        let traits = InputTraits::scan("peak, off");
        assert_eq!(traits, InputTraits::HAS_COMMA);
        assert!(!traits.may_hold_number());
    }

    #[test]
    fn scan_empty() {
        assert_eq!(InputTraits::scan("   "), InputTraits::empty());
    }

    #[test]
    fn scan_sees_json_behind_a_byte_order_mark() {
        assert_eq!(InputTraits::scan("\u{feff}{}"), InputTraits::LOOKS_JSON);
        assert_eq!(InputTraits::scan("\u{feff}70"), InputTraits::HAS_DIGITS);
    }
}
