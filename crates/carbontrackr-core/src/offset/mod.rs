//! Carbon offset planning against a fixed catalog of offset options.

use lazy_static::lazy_static;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;

/// One way to offset emissions, with its absorption rate and price.
#[derive(Debug, Clone, Serialize)]
pub struct OffsetOption {
    pub id: &'static str,
    pub name: &'static str,
    /// kg CO₂ offset per unit purchased.
    pub co2_per_unit_kg: Decimal,
    /// USD per unit.
    pub cost_usd_per_unit: Decimal,
    /// What one unit is (trees, MWh, people).
    pub unit: &'static str,
    pub description: &'static str,
}

lazy_static! {
    /// The offset catalog. Fixed reference data, no runtime write path.
    pub static ref OFFSET_OPTIONS: Vec<OffsetOption> = vec![
        OffsetOption {
            id: "trees",
            name: "Tree Planting",
            co2_per_unit_kg: Decimal::new(2177, 2),
            cost_usd_per_unit: Decimal::from(5),
            unit: "trees",
            description: "Plant native trees to absorb CO₂ from the atmosphere",
        },
        OffsetOption {
            id: "wind",
            name: "Wind Energy",
            co2_per_unit_kg: Decimal::from(1000),
            cost_usd_per_unit: Decimal::from(30),
            unit: "MWh",
            description: "Support renewable wind energy projects",
        },
        OffsetOption {
            id: "solar",
            name: "Solar Power",
            co2_per_unit_kg: Decimal::from(800),
            cost_usd_per_unit: Decimal::from(25),
            unit: "MWh",
            description: "Fund solar panel installations worldwide",
        },
        OffsetOption {
            id: "water",
            name: "Clean Water",
            co2_per_unit_kg: Decimal::from(50),
            cost_usd_per_unit: Decimal::from(20),
            unit: "people",
            description: "Provide clean water access reducing deforestation",
        },
    ];
}

/// Look up an offset option by its id.
pub fn option_by_id(id: &str) -> Option<&'static OffsetOption> {
    OFFSET_OPTIONS.iter().find(|o| o.id == id)
}

/// Units of `option` needed to fully cover `target_kg` (ceiling division).
pub fn suggested_quantity(option: &OffsetOption, target_kg: Decimal) -> u64 {
    if target_kg <= Decimal::ZERO {
        return 0;
    }
    (target_kg / option.co2_per_unit_kg)
        .ceil()
        .to_u64()
        .unwrap_or(u64::MAX)
}

/// A set of offset purchases measured against a target.
#[derive(Debug, Clone, Serialize)]
pub struct OffsetPlan {
    pub target_kg: Decimal,
    picks: Vec<(&'static OffsetOption, u64)>,
}

impl OffsetPlan {
    pub fn new(target_kg: Decimal) -> Self {
        Self {
            target_kg,
            picks: Vec::new(),
        }
    }

    /// Add `quantity` units of the option with the given id. Returns `false`
    /// for an unknown id; a plan never holds unknown options.
    pub fn add(&mut self, id: &str, quantity: u64) -> bool {
        match option_by_id(id) {
            Some(option) => {
                self.picks.push((option, quantity));
                true
            }
            None => false,
        }
    }

    pub fn picks(&self) -> &[(&'static OffsetOption, u64)] {
        &self.picks
    }

    pub fn total_offset_kg(&self) -> Decimal {
        self.picks
            .iter()
            .map(|(option, quantity)| option.co2_per_unit_kg * Decimal::from(*quantity))
            .sum()
    }

    pub fn total_cost_usd(&self) -> Decimal {
        self.picks
            .iter()
            .map(|(option, quantity)| option.cost_usd_per_unit * Decimal::from(*quantity))
            .sum()
    }

    /// How much of the target the picks cover, capped at 100.
    pub fn coverage_percent(&self) -> Decimal {
        if self.target_kg <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        let raw = self.total_offset_kg() * Decimal::from(100) / self.target_kg;
        raw.min(Decimal::from(100))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn catalog_lookup() {
        assert_eq!(option_by_id("trees").unwrap().cost_usd_per_unit, dec("5"));
        assert!(option_by_id("coal").is_none());
    }

    #[test]
    fn plan_totals() {
        let mut plan = OffsetPlan::new(dec("120"));
        assert!(plan.add("trees", 3));
        assert!(plan.add("water", 1));
        // 3 × 21.77 + 50
        assert_eq!(plan.total_offset_kg(), dec("115.31"));
        // 3 × 5 + 20
        assert_eq!(plan.total_cost_usd(), dec("35"));
    }

    #[test]
    fn unknown_option_is_refused() {
        let mut plan = OffsetPlan::new(dec("10"));
        assert!(!plan.add("coal", 1));
        assert!(plan.picks().is_empty());
    }

    #[test]
    fn coverage_caps_at_hundred() {
        let mut plan = OffsetPlan::new(dec("100"));
        plan.add("wind", 1);
        assert_eq!(plan.coverage_percent(), dec("100"));
    }

    #[test]
    fn coverage_of_partial_plan() {
        let mut plan = OffsetPlan::new(dec("100"));
        plan.add("water", 1);
        assert_eq!(plan.coverage_percent(), dec("50"));
    }

    #[test]
    fn zero_target_has_zero_coverage() {
        let plan = OffsetPlan::new(Decimal::ZERO);
        assert_eq!(plan.coverage_percent(), Decimal::ZERO);
    }

    #[test]
    fn suggestions_round_up() {
        let trees = option_by_id("trees").unwrap();
        // 100 / 21.77 ≈ 4.59
        assert_eq!(suggested_quantity(trees, dec("100")), 5);
        assert_eq!(suggested_quantity(trees, dec("21.77")), 1);
        assert_eq!(suggested_quantity(trees, Decimal::ZERO), 0);
    }
}
