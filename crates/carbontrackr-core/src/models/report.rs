//! Bill processing report model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Result of processing one bill: extracted consumption, derived emissions,
/// and the reward award, plus everything needed to audit the arithmetic.
///
/// `units == None` means "no confident value could be derived", which is
/// deliberately distinct from zero consumption. Emissions and points follow
/// the same convention.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillReport {
    /// Best-estimate electricity consumption for the billing period (kWh).
    pub units: Option<Decimal>,

    /// `units × emission_factor`; absent whenever `units` is absent.
    pub carbon_emissions_kg: Option<Decimal>,

    /// Emission factor actually applied (kg CO₂ per kWh), so the caller can
    /// reconstruct the multiplication without repeating the lookup.
    pub emission_factor: Decimal,

    /// Region the caller asked for, echoed as given.
    pub region: String,

    /// Reward points under the configured policy; absent without a
    /// consumption value.
    pub points: Option<i64>,

    /// Verbatim extractor output the values were derived from.
    pub ocr_text: String,

    /// Non-fatal extraction findings (discarded candidates, sentinel hits).
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub warnings: Vec<String>,
}
