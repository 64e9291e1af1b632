//! Personalization payload models.
//!
//! The customer-data platform answers personalization calls with loosely
//! shaped JSON. These models decode the parts the site renders; every field is
//! defaulted so partial payloads still decode. [`ContractView`] turns the
//! energy data extension into display-ready values, running the split and
//! tariff fields through the normalizer.

use crate::{DEFAULT_CURRENCY, Result, Split, format_currency, format_date, normalize_split, normalize_tariff_to_percent};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Plan compared against when the page doesn't name one.
pub const DEFAULT_PLAN_TO_COMPARE: &str = "Green Energy Plan";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Identifier {
    #[serde(rename = "ref")]
    pub reference: String,
    pub created_at: String,
    pub modified_at: String,
    pub provider: String,
    pub id: String,
}

/// Energy contract and usage values stored on a guest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnergyDataExtension {
    pub next_payment_date: Option<String>,
    pub contract_start_date: Option<String>,
    pub contract_term: Option<String>,
    pub contract_end_date: Option<String>,
    pub tariff: Option<String>,
    pub tariff_rates: Option<String>,
    pub account_balance: Option<f64>,
    pub plan: Option<String>,
    pub current_month_electricity_usage: Option<String>,
    pub current_month_electricity_split: Option<String>,
    pub current_month_gas_usage: Option<String>,
    pub current_month_solar_energy_produced: Option<String>,
}

impl EnergyDataExtension {
    /// True when the extension carries none of the energy fields.
    pub fn is_empty(&self) -> bool {
        *self == EnergyDataExtension::default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DataExtension {
    #[serde(rename = "ref")]
    pub reference: String,
    pub created_at: String,
    pub modified_at: String,
    pub name: String,
    pub key: String,
    pub values: EnergyDataExtension,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Segment {
    #[serde(rename = "ref")]
    pub reference: String,
    pub client_key: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Order {
    pub status: String,
}

/// The `full_guest_details` personalization response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GuestDetails {
    #[serde(rename = "ref")]
    pub reference: String,
    pub first_name: String,
    pub last_name: String,
    pub title: String,
    pub gender: String,
    pub email: String,
    pub emails: Vec<Value>,
    pub language: String,
    pub nationality: String,
    pub guest_type: String,
    pub unknown: bool,
    pub created_at: String,
    pub modified_at: String,
    pub first_seen: String,
    pub last_seen: String,
    pub identifiers: Vec<Identifier>,
    pub data_extensions: Vec<DataExtension>,
    pub segment_memberships: Vec<Segment>,
    pub orders: Vec<Order>,
}

impl GuestDetails {
    /// Decode a guest-details payload.
    pub fn from_json(json: &str) -> Result<GuestDetails> {
        let guest: GuestDetails = serde_json::from_str(json)?;
        tracing::debug!(
            guest = %guest.reference,
            extensions = guest.data_extensions.len(),
            segments = guest.segment_memberships.len(),
            "decoded guest details"
        );
        Ok(guest)
    }

    /// The first data extension that carries energy values.
    pub fn energy(&self) -> Option<&EnergyDataExtension> {
        self.data_extensions.iter().map(|ext| &ext.values).find(|values| !values.is_empty())
    }

    /// `"First Last"`, skipping blank parts.
    pub fn display_name(&self) -> Option<String> {
        let parts: Vec<&str> =
            [self.first_name.trim(), self.last_name.trim()].into_iter().filter(|p| !p.is_empty()).collect();
        if parts.is_empty() { None } else { Some(parts.join(" ")) }
    }

    pub fn segment_names(&self) -> Vec<&str> {
        self.segment_memberships.iter().map(|s| s.name.as_str()).filter(|n| !n.is_empty()).collect()
    }
}

/// Display-ready contract data derived from an [`EnergyDataExtension`].
#[derive(Debug, Clone, PartialEq)]
pub struct ContractView {
    pub plan: Option<String>,
    pub contract_term: Option<String>,
    pub contract_start: Option<String>,
    pub contract_end: Option<String>,
    pub next_payment: Option<String>,
    /// Formatted account balance; empty when the payload has none.
    pub account_balance: String,
    pub tariff: Split,
    pub tariff_rates: Option<String>,
    pub electricity_split: Split,
    pub electricity_usage: Option<String>,
    pub gas_usage: Option<String>,
    pub solar_produced: Option<String>,
}

impl ContractView {
    /// Build the view, formatting the balance in `currency`.
    pub fn from_energy(values: &EnergyDataExtension, currency: &str) -> Self {
        let date = |d: &Option<String>| d.as_deref().map(format_date);
        let text = |t: &Option<String>| t.as_deref().map(str::trim).filter(|t| !t.is_empty()).map(String::from);

        ContractView {
            plan: text(&values.plan),
            contract_term: text(&values.contract_term),
            contract_start: date(&values.contract_start_date),
            contract_end: date(&values.contract_end_date),
            next_payment: date(&values.next_payment_date),
            account_balance: format_currency(values.account_balance, currency),
            tariff: normalize_tariff_to_percent(values.tariff.as_deref()),
            tariff_rates: text(&values.tariff_rates),
            electricity_split: normalize_split(values.current_month_electricity_split.as_deref()),
            electricity_usage: text(&values.current_month_electricity_usage),
            gas_usage: text(&values.current_month_gas_usage),
            solar_produced: text(&values.current_month_solar_energy_produced),
        }
    }

    /// Build the view for a guest, in the default currency.
    pub fn for_guest(guest: &GuestDetails) -> Option<Self> {
        guest.energy().map(|values| ContractView::from_energy(values, DEFAULT_CURRENCY))
    }
}

/// The plan-estimate personalization response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlanEstimate {
    pub current_plan: String,
    pub current_plan_estimated_annual_cost: String,
    pub description: String,
    pub new_plan_estimate_annual_cost: String,
    pub predicted_annual_usage: String,
}

impl PlanEstimate {
    pub fn from_json(json: &str) -> Result<PlanEstimate> {
        Ok(serde_json::from_str(json)?)
    }

    /// Labelled rows in display order, skipping empty values.
    ///
    /// `plan_to_compare` falls back to [`DEFAULT_PLAN_TO_COMPARE`].
    pub fn rows(&self, plan_to_compare: Option<&str>) -> Vec<(String, String)> {
        let plan = plan_to_compare.map(str::trim).filter(|p| !p.is_empty()).unwrap_or(DEFAULT_PLAN_TO_COMPARE);

        [
            ("Current Plan".to_string(), &self.current_plan),
            ("Current Plan Estimated Annual Cost".to_string(), &self.current_plan_estimated_annual_cost),
            ("Predicted Annual Usage".to_string(), &self.predicted_annual_usage),
            (format!("{plan} Estimated Annual Cost"), &self.new_plan_estimate_annual_cost),
        ]
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(label, value)| (label, value.clone()))
        .collect()
    }
}
