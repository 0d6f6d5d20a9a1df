//! Energy and emissions estimation for a fleet of household devices.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// kg CO₂ per kWh applied to air conditioners.
fn ac_factor() -> Decimal {
    Decimal::new(82, 2)
}

/// kg CO₂ per kWh applied to other appliances.
fn appliance_factor() -> Decimal {
    Decimal::new(7, 1)
}

const DAYS_PER_MONTH: i64 = 30;

/// One device as the user runs it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceUsage {
    pub name: String,
    pub watts: u32,
    pub hours_per_day: Decimal,
    /// Air conditioners carry a heavier grid factor.
    #[serde(default)]
    pub is_ac: bool,
}

/// Per-device estimation result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeviceEstimate {
    pub name: String,
    pub energy_kwh_per_day: Decimal,
    pub co2_kg_per_day: Decimal,
    pub co2_kg_per_month: Decimal,
}

/// Qualitative band for a fleet's daily emissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ImpactBand {
    Low,
    Good,
    Moderate,
    High,
}

impl ImpactBand {
    fn for_daily_kg(kg: Decimal) -> Self {
        if kg < Decimal::from(5) {
            Self::Low
        } else if kg < Decimal::from(15) {
            Self::Good
        } else if kg < Decimal::from(30) {
            Self::Moderate
        } else {
            Self::High
        }
    }

    pub fn advice(self) -> &'static str {
        match self {
            Self::Low => "Excellent! Your usage is impressively low",
            Self::Good => "Good! Consider optimizing high-usage devices",
            Self::Moderate => "Moderate emissions - room for improvement",
            Self::High => "High emissions - time to reduce usage!",
        }
    }
}

/// Whole-fleet estimation result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FleetEstimate {
    pub devices: Vec<DeviceEstimate>,
    pub total_kwh_per_day: Decimal,
    pub total_co2_kg_per_day: Decimal,
    pub total_co2_kg_per_month: Decimal,
    pub band: ImpactBand,
}

/// Estimate one device: `kWh = W × h ÷ 1000`, emissions by device kind.
pub fn estimate_device(usage: &DeviceUsage) -> DeviceEstimate {
    let energy_kwh_per_day = Decimal::from(usage.watts) * usage.hours_per_day / Decimal::from(1000);
    let factor = if usage.is_ac {
        ac_factor()
    } else {
        appliance_factor()
    };
    let co2_kg_per_day = energy_kwh_per_day * factor;

    DeviceEstimate {
        name: usage.name.clone(),
        energy_kwh_per_day,
        co2_kg_per_day,
        co2_kg_per_month: co2_kg_per_day * Decimal::from(DAYS_PER_MONTH),
    }
}

/// Estimate a whole fleet and classify its daily impact.
pub fn estimate_fleet(usages: &[DeviceUsage]) -> FleetEstimate {
    let devices: Vec<DeviceEstimate> = usages.iter().map(estimate_device).collect();

    let total_kwh_per_day: Decimal = devices.iter().map(|d| d.energy_kwh_per_day).sum();
    let total_co2_kg_per_day: Decimal = devices.iter().map(|d| d.co2_kg_per_day).sum();

    FleetEstimate {
        total_kwh_per_day,
        total_co2_kg_per_day,
        total_co2_kg_per_month: total_co2_kg_per_day * Decimal::from(DAYS_PER_MONTH),
        band: ImpactBand::for_daily_kg(total_co2_kg_per_day),
        devices,
    }
}
