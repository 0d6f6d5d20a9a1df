//! Unit-tagged number extraction (strategy 1).

use super::numbers::parse_grouped_number;
use super::patterns::UNIT_TAGGED;
use super::UnitCandidate;

/// Find every number immediately followed by a consumption unit marker
/// ("kWh", "unit", "units"), in document order.
///
/// Bills often print sub-totals and previous-period figures before the
/// headline total, so callers pick the maximum among these candidates rather
/// than the first.
pub fn extract_tagged(text: &str) -> Vec<UnitCandidate> {
    let mut results = Vec::new();

    for caps in UNIT_TAGGED.captures_iter(text) {
        if let Some(value) = parse_grouped_number(&caps[1]) {
            let full_match = caps.get(0).unwrap();
            results.push(
                UnitCandidate::new(value, full_match.as_str())
                    .with_position(full_match.start(), full_match.end()),
            );
        }
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    #[test]
    fn finds_kwh_tagged_numbers() {
        let found = extract_tagged("Total: 450 kWh");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].value, Decimal::from(450));
    }

    #[test]
    fn finds_all_candidates_in_order() {
        let found = extract_tagged("Previous 120 kWh, Current Total 450 kWh");
        let values: Vec<_> = found.iter().map(|c| c.value).collect();
        assert_eq!(values, vec![Decimal::from(120), Decimal::from(450)]);
    }

    #[test]
    fn unit_marker_is_case_insensitive_and_plural_tolerant() {
        assert_eq!(extract_tagged("consumed 320 KWH this month").len(), 1);
        assert_eq!(extract_tagged("you used 2 units")[0].value, Decimal::from(2));
    }

    #[test]
    fn grouped_and_fractional_numbers() {
        assert_eq!(
            extract_tagged("Energy: 1,250 kWh")[0].value,
            Decimal::from(1250)
        );
        assert_eq!(
            extract_tagged("1250.5 kWh")[0].value,
            Decimal::from_str("1250.5").unwrap()
        );
    }

    #[test]
    fn number_must_precede_the_marker() {
        assert!(extract_tagged("Units Consumed: 450").is_empty());
        assert!(extract_tagged("no numbers here kWh").is_empty());
    }
}
