//! Region-aware carbon emission computation.

mod factors;

pub use factors::{DEFAULT_REGION, EmissionFactorTable};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Derived emissions for one consumption figure.
///
/// Read-only value object: created once per lookup and handed to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmissionsResult {
    /// Consumption the computation was based on (kWh).
    pub units: Option<Decimal>,

    /// `units × factor` in kg CO₂; `None` when `units` is `None`. An unknown
    /// consumption is never coerced to zero.
    pub carbon_emissions_kg: Option<Decimal>,

    /// Factor actually applied (kg CO₂ per kWh).
    pub factor: Decimal,

    /// Region as requested by the caller.
    pub region: String,
}
