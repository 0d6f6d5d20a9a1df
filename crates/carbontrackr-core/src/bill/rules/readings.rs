//! Meter-delta reconstruction (strategy 2).

use rust_decimal::Decimal;
use tracing::debug;

use super::numbers::parse_grouped_number;
use super::patterns::{CURRENT_READING, PREVIOUS_READING};
use super::UnitCandidate;

/// Derive consumption as `current − previous` when both labelled meter
/// readings are present. Non-positive deltas are rejected: a meter cannot
/// run backwards, so a zero or negative difference means the readings were
/// misread or mismatched.
pub fn extract_meter_delta(text: &str) -> Option<UnitCandidate> {
    let prev_caps = PREVIOUS_READING.captures(text)?;
    let curr_caps = CURRENT_READING.captures(text)?;

    let previous = parse_grouped_number(&prev_caps[1])?;
    let current = parse_grouped_number(&curr_caps[1])?;

    let delta = current - previous;
    if delta <= Decimal::ZERO {
        debug!("rejected non-positive meter delta {}", delta);
        return None;
    }

    Some(UnitCandidate::new(
        delta,
        format!("{} / {}", prev_caps[0].trim(), curr_caps[0].trim()),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reconstructs_delta_from_readings() {
        let found =
            extract_meter_delta("Previous Reading: 100\nCurrent Reading: 550").unwrap();
        assert_eq!(found.value, Decimal::from(450));
    }

    #[test]
    fn tolerates_label_variants() {
        let found =
            extract_meter_delta("Prev. meter reading - 34,120  Present meter reading - 34,570")
                .unwrap();
        assert_eq!(found.value, Decimal::from(450));
    }

    #[test]
    fn rejects_non_positive_delta() {
        assert!(extract_meter_delta("Previous Reading: 550 Current Reading: 100").is_none());
        assert!(extract_meter_delta("Previous Reading: 550 Current Reading: 550").is_none());
    }

    #[test]
    fn requires_both_readings() {
        assert!(extract_meter_delta("Current Reading: 550").is_none());
        assert!(extract_meter_delta("Previous Reading: 100").is_none());
    }
}
