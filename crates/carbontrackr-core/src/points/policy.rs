//! Award formulas converting consumption or emissions into points.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

/// Base award for the consumption policy before the per-kWh penalty.
pub const CONSUMPTION_BASE: i64 = 2000;

/// Points deducted per kWh consumed.
pub const CONSUMPTION_PENALTY_PER_KWH: i64 = 2;

/// Base award for the emissions policy before the per-kg penalty.
pub const EMISSIONS_BASE: i64 = 1000;

/// Points deducted per kg CO₂ emitted.
pub const EMISSIONS_PENALTY_PER_KG: i64 = 10;

/// Floor of the emissions policy; awards never drop below this.
pub const EMISSIONS_MIN_POINTS: i64 = 100;

/// Which award formula to apply. Lower consumption always earns more points
/// under either policy; they differ in what they score and how they clamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointsPolicy {
    /// `floor(2000 − kWh × 2)`, unclamped: heavy consumption can go negative.
    Consumption,
    /// `max(100, floor(1000 − kg × 10))`.
    Emissions,
}

impl PointsPolicy {
    /// Award for a consumption (kWh) or emissions (kg CO₂) figure, depending
    /// on the policy. Pure and total over its numeric domain; negative
    /// inputs are the caller's contract to clamp to zero beforehand.
    pub fn points_for(&self, value: Decimal) -> i64 {
        match self {
            Self::Consumption => floor_i64(
                Decimal::from(CONSUMPTION_BASE) - value * Decimal::from(CONSUMPTION_PENALTY_PER_KWH),
            ),
            Self::Emissions => floor_i64(
                Decimal::from(EMISSIONS_BASE) - value * Decimal::from(EMISSIONS_PENALTY_PER_KG),
            )
            .max(EMISSIONS_MIN_POINTS),
        }
    }
}

/// Floor to i64, saturating at the integer bounds for out-of-range values.
fn floor_i64(value: Decimal) -> i64 {
    let floored = value.floor();
    floored.to_i64().unwrap_or_else(|| {
        if floored.is_sign_negative() {
            i64::MIN
        } else {
            i64::MAX
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn consumption_policy_is_linear_and_floored() {
        let policy = PointsPolicy::Consumption;
        assert_eq!(policy.points_for(dec("0")), 2000);
        assert_eq!(policy.points_for(dec("450")), 1100);
        assert_eq!(policy.points_for(dec("450.5")), 1099);
        // floor(2000 - 250.25 * 2) = floor(1499.5)
        assert_eq!(policy.points_for(dec("250.25")), 1499);
    }

    #[test]
    fn consumption_policy_has_no_floor() {
        assert_eq!(PointsPolicy::Consumption.points_for(dec("1500")), -1000);
    }

    #[test]
    fn emissions_policy_clamps_at_minimum() {
        let policy = PointsPolicy::Emissions;
        assert_eq!(policy.points_for(dec("0")), 1000);
        assert_eq!(policy.points_for(dec("50")), 500);
        // floor(1000 - 500 * 10) = -4000, clamped
        assert_eq!(policy.points_for(dec("500")), 100);
    }

    #[test]
    fn policies_are_pure() {
        let policy = PointsPolicy::Consumption;
        assert_eq!(policy.points_for(dec("123.4")), policy.points_for(dec("123.4")));
    }

    #[test]
    fn serde_names_are_snake_case() {
        assert_eq!(
            serde_json::to_string(&PointsPolicy::Consumption).unwrap(),
            r#""consumption""#
        );
        let policy: PointsPolicy = serde_json::from_str(r#""emissions""#).unwrap();
        assert_eq!(policy, PointsPolicy::Emissions);
    }
}
