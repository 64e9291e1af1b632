extern crate self as energen;

use serde::{Deserialize, Serialize};
use std::fmt;

#[macro_use]
mod macros;
mod api;
mod error;
mod format;
mod guest;
mod normalize;

pub use api::{
    NormalizeDetails, Options, RangePolicy, normalize_split, normalize_split_verbose, normalize_split_with,
    normalize_tariff_to_percent, to_percent_number, to_percent_number_with,
};
pub use error::{Error, Result};
pub use format::{DEFAULT_CURRENCY, brand_title, format_currency, format_date, format_percent, to_title_case};
pub use guest::{
    ContractView, DEFAULT_PLAN_TO_COMPARE, DataExtension, EnergyDataExtension, GuestDetails, Identifier, Order,
    PlanEstimate, Segment,
};
pub use normalize::{InputTraits, ShapeKind};

// --- Public value types -----------------------------------------------------

/// A peak/off-peak usage split as integer percentages.
///
/// Each side is either `None` (unknown) or a whole percentage in `0..=100`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Split {
    pub peak: Option<u8>,
    pub off_peak: Option<u8>,
}

impl Split {
    /// Both sides unknown.
    pub const EMPTY: Split = Split { peak: None, off_peak: None };

    pub fn new(peak: Option<u8>, off_peak: Option<u8>) -> Self {
        Split { peak, off_peak }
    }

    /// True when neither side carries a value.
    pub fn is_empty(&self) -> bool {
        self.peak.is_none() && self.off_peak.is_none()
    }
}

/// Renders as `"<peak>,<offPeak>"` with a `-` placeholder per missing side.
///
/// The output is itself a valid raw split, so feeding it back into
/// [`normalize_split`] yields the same value.
impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", format_percent(self.peak), format_percent(self.off_peak))
    }
}
