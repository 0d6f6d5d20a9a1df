//! Bill parser: ordered extraction cascade plus emissions and points derivation.

use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::emissions::EmissionFactorTable;
use crate::models::report::BillReport;
use crate::points::PointsPolicy;

use super::rules::{self, UnitCandidate};
use super::{MAX_PLAUSIBLE_KWH, NOT_FOUND_TOKEN};

/// Parser turning raw OCR text into a consumption estimate, emissions, and a
/// reward award.
///
/// Stateless apart from its immutable configuration: identical input always
/// produces an identical report, and any number of threads may share one
/// parser.
pub struct BillParser {
    factors: EmissionFactorTable,
    policy: PointsPolicy,
    ceiling: Decimal,
}

impl BillParser {
    /// Create a parser over the given factor table with the default
    /// consumption-based points policy.
    pub fn new(factors: EmissionFactorTable) -> Self {
        Self {
            factors,
            policy: PointsPolicy::Consumption,
            ceiling: Decimal::from(MAX_PLAUSIBLE_KWH),
        }
    }

    /// Set the points policy.
    pub fn with_policy(mut self, policy: PointsPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set the plausibility ceiling (exclusive, kWh).
    pub fn with_ceiling(mut self, ceiling: Decimal) -> Self {
        self.ceiling = ceiling;
        self
    }

    /// Best-effort consumption extraction. Returns `None` when no plausible
    /// value could be derived; never fails.
    pub fn extract_units(&self, text: &str) -> Option<Decimal> {
        self.select_candidate(text, &mut Vec::new())
            .map(|c| c.value)
    }

    /// Full pipeline: extraction, emissions lookup, points derivation.
    pub fn process(&self, text: &str, region: &str) -> BillReport {
        info!("processing bill text ({} characters)", text.len());

        let mut warnings = Vec::new();
        let units = match self.select_candidate(text, &mut warnings) {
            Some(candidate) => {
                debug!(
                    "extracted {} kWh from {:?}",
                    candidate.value,
                    candidate.source.trim()
                );
                Some(candidate.value)
            }
            None => {
                warnings.push("no consumption value detected in bill text".to_string());
                None
            }
        };

        let emissions = self.factors.emissions_for(units, region);

        // The consumption policy scores kWh; the emissions policy scores kg.
        let points = match self.policy {
            PointsPolicy::Consumption => units,
            PointsPolicy::Emissions => emissions.carbon_emissions_kg,
        }
        .map(|value| self.policy.points_for(value));

        BillReport {
            units,
            carbon_emissions_kg: emissions.carbon_emissions_kg,
            emission_factor: emissions.factor,
            region: emissions.region,
            points,
            ocr_text: text.to_string(),
            warnings,
        }
    }

    /// Run the strategy cascade. The first strategy producing at least one
    /// plausible candidate wins; candidates are never merged across
    /// strategies.
    fn select_candidate(
        &self,
        text: &str,
        warnings: &mut Vec<String>,
    ) -> Option<UnitCandidate> {
        if text.trim().is_empty() {
            return None;
        }

        if text.contains(NOT_FOUND_TOKEN) {
            warnings.push("extractor reported NOT_FOUND".to_string());
            return None;
        }

        // 1. Unit-tagged numbers: the headline total is typically the largest
        //    kWh-tagged figure on the page.
        let mut tagged = rules::extract_tagged(text);
        self.discard_implausible(&mut tagged, warnings);
        if let Some(best) = tagged.into_iter().max_by(|a, b| a.value.cmp(&b.value)) {
            debug!("unit-tagged candidate: {}", best.value);
            return Some(best);
        }

        // 2. Meter-delta reconstruction.
        if let Some(delta) = rules::extract_meter_delta(text) {
            if self.is_plausible(delta.value) {
                debug!("meter-delta candidate: {}", delta.value);
                return Some(delta);
            }
            warnings.push(format!(
                "discarded implausible meter delta {} kWh",
                delta.value
            ));
        }

        // 3. Labelled-consumption fallback, first plausible match in label
        //    priority order.
        let mut labelled = rules::extract_labelled(text);
        self.discard_implausible(&mut labelled, warnings);
        labelled.into_iter().next()
    }

    fn is_plausible(&self, value: Decimal) -> bool {
        value > Decimal::ZERO && value < self.ceiling
    }

    fn discard_implausible(
        &self,
        candidates: &mut Vec<UnitCandidate>,
        warnings: &mut Vec<String>,
    ) {
        candidates.retain(|candidate| {
            if self.is_plausible(candidate.value) {
                return true;
            }
            warnings.push(format!(
                "discarded implausible candidate {} kWh from {:?}",
                candidate.value,
                candidate.source.trim()
            ));
            false
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;

    fn parser() -> BillParser {
        BillParser::new(EmissionFactorTable::india())
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn single_tagged_number() {
        assert_eq!(parser().extract_units("Total: 450 kWh"), Some(dec("450")));
    }

    #[test]
    fn maximum_wins_among_tagged_numbers() {
        assert_eq!(
            parser().extract_units("Previous 120 kWh, Current Total 450 kWh"),
            Some(dec("450"))
        );
    }

    #[test]
    fn meter_delta_when_no_tagged_number() {
        assert_eq!(
            parser().extract_units("Previous Reading: 100\nCurrent Reading: 550"),
            Some(dec("450"))
        );
    }

    #[test]
    fn negative_delta_is_rejected() {
        assert_eq!(
            parser().extract_units("Previous Reading: 550\nCurrent Reading: 100"),
            None
        );
    }

    #[test]
    fn sentinel_overrides_everything() {
        assert_eq!(
            parser().extract_units("NOT_FOUND even though 450 kWh appears"),
            None
        );
    }

    #[test]
    fn plausibility_bounds() {
        assert_eq!(parser().extract_units("999999 kWh"), None);
        assert_eq!(parser().extract_units("0 kWh"), None);
        assert_eq!(parser().extract_units("99999 kWh"), Some(dec("99999")));
    }

    #[test]
    fn implausible_tagged_number_falls_through_to_next_strategy() {
        let text = "Cumulative: 999999 kWh\nPrevious Reading: 100\nCurrent Reading: 550";
        assert_eq!(parser().extract_units(text), Some(dec("450")));
    }

    #[test]
    fn labelled_fallback() {
        assert_eq!(
            parser().extract_units("Units Consumed: 1,250"),
            Some(dec("1250"))
        );
    }

    #[test]
    fn empty_and_hopeless_text() {
        assert_eq!(parser().extract_units(""), None);
        assert_eq!(parser().extract_units("   \n  "), None);
        assert_eq!(parser().extract_units("Dear customer, pay promptly."), None);
    }

    #[test]
    fn process_produces_full_report() {
        let report = parser().process("Total: 100 kWh", "Gujarat");
        assert_eq!(report.units, Some(dec("100")));
        assert_eq!(report.emission_factor, dec("1.27"));
        assert_eq!(report.carbon_emissions_kg, Some(dec("127")));
        // floor(2000 - 100 * 2)
        assert_eq!(report.points, Some(1800));
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn process_miss_keeps_unknown_distinct_from_zero() {
        let report = parser().process("NOT_FOUND", "Gujarat");
        assert_eq!(report.units, None);
        assert_eq!(report.carbon_emissions_kg, None);
        assert_eq!(report.points, None);
        assert_eq!(report.emission_factor, dec("1.27"));
        assert!(!report.warnings.is_empty());
    }

    #[test]
    fn process_with_emissions_policy() {
        let parser = parser().with_policy(PointsPolicy::Emissions);
        let report = parser.process("Total: 100 kWh", "Gujarat");
        // max(100, floor(1000 - 127 * 10))
        assert_eq!(report.points, Some(100));
    }

    #[test]
    fn process_is_deterministic() {
        let parser = parser();
        let text = "Units Consumed: 450";
        let first = parser.process(text, "Kerala");
        let second = parser.process(text, "Kerala");
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn custom_ceiling() {
        let parser = parser().with_ceiling(Decimal::from(500));
        assert_eq!(parser.extract_units("499 kWh"), Some(dec("499")));
        assert_eq!(parser.extract_units("500 kWh"), None);
    }
}
