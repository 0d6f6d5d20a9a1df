//! Emission factor table: region → kg CO₂ per kWh.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::error::{Result, TrackrError};

use super::EmissionsResult;

/// Region key of the mandatory nationwide-average fallback entry.
pub const DEFAULT_REGION: &str = "India";

/// State-wise emission factors in thousandths of a kg CO₂ per kWh,
/// reflecting each grid's generation mix.
const INDIA_FACTORS: &[(&str, i64)] = &[
    ("Andhra Pradesh", 850),
    ("Arunachal Pradesh", 450),
    ("Assam", 820),
    ("Bihar", 930),
    ("Chhattisgarh", 1050),
    ("Goa", 650),
    ("Gujarat", 1270),
    ("Haryana", 880),
    ("Himachal Pradesh", 420),
    ("Jharkhand", 950),
    ("Karnataka", 740),
    ("Kerala", 660),
    ("Madhya Pradesh", 970),
    ("Maharashtra", 920),
    ("Manipur", 460),
    ("Meghalaya", 480),
    ("Mizoram", 420),
    ("Nagaland", 440),
    ("Odisha", 1040),
    ("Punjab", 810),
    ("Rajasthan", 1010),
    ("Sikkim", 400),
    ("Tamil Nadu", 700),
    ("Telangana", 820),
    ("Tripura", 550),
    ("Uttar Pradesh", 890),
    ("Uttarakhand", 620),
    ("West Bengal", 850),
    ("India", 703),
];

/// Immutable mapping from region to emission factor.
///
/// Loaded once at startup and never written afterwards. The default entry is
/// a construction invariant: lookups can therefore never fail, and a table
/// missing it is rejected before any request is served.
#[derive(Debug, Clone, PartialEq)]
pub struct EmissionFactorTable {
    factors: HashMap<String, Decimal>,
    default_region: String,
    default_factor: Decimal,
}

/// On-disk shape of a custom factor table.
#[derive(Debug, Deserialize)]
struct FactorTableFile {
    #[serde(default = "default_region_key")]
    default_region: String,
    factors: HashMap<String, Decimal>,
}

fn default_region_key() -> String {
    DEFAULT_REGION.to_string()
}

impl EmissionFactorTable {
    /// The built-in state-wise Indian table with the nationwide average as
    /// the fallback entry.
    pub fn india() -> Self {
        let factors: HashMap<String, Decimal> = INDIA_FACTORS
            .iter()
            .map(|(region, millis)| ((*region).to_string(), Decimal::new(*millis, 3).normalize()))
            .collect();
        let default_factor = factors[DEFAULT_REGION];

        Self {
            factors,
            default_region: DEFAULT_REGION.to_string(),
            default_factor,
        }
    }

    /// Build a table from explicit entries, validating the invariants a
    /// lookup relies on.
    pub fn from_entries(
        entries: impl IntoIterator<Item = (String, Decimal)>,
        default_region: &str,
    ) -> Result<Self> {
        let factors: HashMap<String, Decimal> = entries.into_iter().collect();

        if factors.is_empty() {
            return Err(TrackrError::Config("factor table is empty".to_string()));
        }

        if let Some((region, factor)) = factors.iter().find(|(_, f)| **f <= Decimal::ZERO) {
            return Err(TrackrError::Config(format!(
                "factor for {:?} must be positive, got {}",
                region, factor
            )));
        }

        let default_factor = *factors.get(default_region).ok_or_else(|| {
            TrackrError::Config(format!(
                "factor table is missing its default entry {:?}",
                default_region
            ))
        })?;

        Ok(Self {
            factors,
            default_region: default_region.to_string(),
            default_factor,
        })
    }

    /// Load a custom table from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let file: FactorTableFile = serde_json::from_str(&content)?;
        Self::from_entries(file.factors, &file.default_region)
    }

    /// Factor for `region`, falling back to the default entry for unknown or
    /// blank regions. Never fails.
    pub fn factor_for(&self, region: &str) -> Decimal {
        self.factors
            .get(region.trim())
            .copied()
            .unwrap_or(self.default_factor)
    }

    /// Compute emissions for an optional consumption figure. Plain
    /// multiplication, no rounding; formatting is the caller's concern.
    pub fn emissions_for(&self, units: Option<Decimal>, region: &str) -> EmissionsResult {
        let factor = self.factor_for(region);
        EmissionsResult {
            units,
            carbon_emissions_kg: units.map(|u| u * factor),
            factor,
            region: region.to_string(),
        }
    }

    /// Region key of the fallback entry.
    pub fn default_region(&self) -> &str {
        &self.default_region
    }

    /// Whether `region` resolves to its own entry rather than the fallback.
    pub fn contains(&self, region: &str) -> bool {
        self.factors.contains_key(region.trim())
    }

    /// All entries, unordered.
    pub fn entries(&self) -> impl Iterator<Item = (&str, Decimal)> {
        self.factors.iter().map(|(region, f)| (region.as_str(), *f))
    }
}
