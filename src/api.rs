use crate::normalize::{self, InputTraits, ShapeKind};
use crate::Split;
use std::time::{Duration, Instant};

/// How plain numbers outside `0..=100` are treated.
///
/// Percent literals (`"130%"`) are always clamped. Plain numbers (`"150"`)
/// are rejected by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RangePolicy {
    /// Map out-of-range plain numbers to `None`.
    #[default]
    Reject,
    /// Clamp out-of-range plain numbers into `0..=100`.
    Clamp,
}

/// Options that affect normalization.
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub range_policy: RangePolicy,
}

/// Result of [`normalize_split_verbose`].
///
/// Meant for debugging payloads: it shows which shape the raw value was read
/// as and what text was extracted for each side before coercion.
#[derive(Debug, Clone)]
pub struct NormalizeDetails {
    pub split: Split,
    pub shape: ShapeKind,
    pub traits: InputTraits,
    /// Extracted peak text before percent coercion.
    pub raw_peak: Option<String>,
    /// Extracted off-peak text before percent coercion.
    pub raw_off_peak: Option<String>,
    pub elapsed: Duration,
}

/// Normalize a raw peak/off-peak split using default [`Options`].
///
/// # Example
/// ```
/// use energen::{Split, normalize_split};
///
/// assert_eq!(normalize_split(Some(r#"["70%","30%"]"#)), Split::new(Some(70), Some(30)));
/// assert_eq!(normalize_split(Some("70,30")), Split::new(Some(70), Some(30)));
/// assert_eq!(normalize_split(None), Split::EMPTY);
/// ```
pub fn normalize_split(raw: Option<&str>) -> Split {
    normalize_split_with(raw, &Options::default())
}

/// Normalize a raw split with explicit `options`.
pub fn normalize_split_with(raw: Option<&str>, options: &Options) -> Split {
    normalize::run(raw, options.range_policy).split
}

/// Normalize a raw split and report how it was read.
pub fn normalize_split_verbose(raw: Option<&str>, options: &Options) -> NormalizeDetails {
    let started = Instant::now();
    let outcome = normalize::run(raw, options.range_policy);

    NormalizeDetails {
        split: outcome.split,
        shape: outcome.kind,
        traits: outcome.traits,
        raw_peak: outcome.raw.peak,
        raw_off_peak: outcome.raw.off_peak,
        elapsed: started.elapsed(),
    }
}

/// Normalize a raw tariff into its percent equivalents.
///
/// Tariffs share the split encodings, so this reads them the same way.
pub fn normalize_tariff_to_percent(raw: Option<&str>) -> Split {
    normalize_split(raw)
}

/// Coerce `"70%"`, `"70"` or `"0.7"` into `70`.
///
/// # Example
/// ```
/// use energen::to_percent_number;
///
/// assert_eq!(to_percent_number(Some("0.7")), Some(70));
/// assert_eq!(to_percent_number(Some("130%")), Some(100));
/// assert_eq!(to_percent_number(Some("150")), None);
/// ```
pub fn to_percent_number(raw: Option<&str>) -> Option<u8> {
    to_percent_number_with(raw, &Options::default())
}

/// Percent coercion with explicit `options`.
pub fn to_percent_number_with(raw: Option<&str>, options: &Options) -> Option<u8> {
    normalize::coerce(raw, options.range_policy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_reports_shape_and_raw_sides() {
        let res = normalize_split_verbose(Some(r#"{"peak":"0.7","offPeak":"0.3"}"#), &Options::default());

        assert_eq!(res.split, Split::new(Some(70), Some(30)));
        assert_eq!(res.shape, ShapeKind::Record);
        assert!(res.traits.contains(InputTraits::LOOKS_JSON));
        assert_eq!(res.raw_peak.as_deref(), Some("0.7"));
        assert_eq!(res.raw_off_peak.as_deref(), Some("0.3"));
        assert!(res.elapsed >= Duration::ZERO);
    }

    #[test]
    fn verbose_on_empty_input() {
        let res = normalize_split_verbose(Some("   "), &Options::default());
        assert_eq!(res.shape, ShapeKind::Empty);
        assert!(res.split.is_empty());
    }

    #[test]
    fn clamp_policy_flows_through_options() {
        let opts = Options { range_policy: RangePolicy::Clamp };
        assert_eq!(normalize_split_with(Some("150,-2"), &opts), Split::new(Some(100), Some(0)));
        assert_eq!(normalize_split(Some("150,-2")), Split::EMPTY);
        assert_eq!(to_percent_number_with(Some("250"), &opts), Some(100));
    }

    #[test]
    fn tariff_reads_like_a_split() {
        let raw = Some(r#"{"peakRate":"28%","offPeakRate":"12%"}"#);
        assert_eq!(normalize_tariff_to_percent(raw), normalize_split(raw));
        assert_eq!(normalize_tariff_to_percent(raw), Split::new(Some(28), Some(12)));
    }
}
