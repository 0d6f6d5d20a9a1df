//! Labelled-consumption fallback (strategy 3).

use regex::Regex;

use super::numbers::parse_grouped_number;
use super::patterns::{CONSUMPTION, ENERGY_CONSUMED, TOTAL_UNITS, UNITS_CONSUMED};
use super::UnitCandidate;

/// Find numbers following a known consumption label, ordered by label
/// priority ("units consumed" first, bare "consumption" last) and then by
/// document order. Callers take the first plausible candidate.
pub fn extract_labelled(text: &str) -> Vec<UnitCandidate> {
    let patterns: [&Regex; 4] = [&UNITS_CONSUMED, &TOTAL_UNITS, &ENERGY_CONSUMED, &CONSUMPTION];

    let mut results = Vec::new();
    for pattern in patterns {
        for caps in pattern.captures_iter(text) {
            if let Some(value) = parse_grouped_number(&caps[1]) {
                let full_match = caps.get(0).unwrap();
                results.push(
                    UnitCandidate::new(value, full_match.as_str())
                        .with_position(full_match.start(), full_match.end()),
                );
            }
        }
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn matches_each_label() {
        for text in [
            "Units Consumed: 450",
            "Total Units - 450",
            "Energy consumed 450",
            "Consumption: 450",
        ] {
            let found = extract_labelled(text);
            assert_eq!(found[0].value, Decimal::from(450), "failed for {:?}", text);
        }
    }

    #[test]
    fn label_priority_order_wins_over_document_order() {
        // "consumption" appears first in the text but has the lowest priority.
        let found = extract_labelled("Consumption: 999\nUnits Consumed: 450");
        assert_eq!(found[0].value, Decimal::from(450));
    }

    #[test]
    fn no_label_no_candidates() {
        assert!(extract_labelled("Amount due: 450").is_empty());
    }
}
