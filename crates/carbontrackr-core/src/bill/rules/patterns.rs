//! Common regex patterns for electricity-bill extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Numbers directly tagged with a consumption unit ("450 kWh", "1,250 units").
    pub static ref UNIT_TAGGED: Regex = Regex::new(
        r"(?i)(\d+(?:[,\s\u{00a0}.]\d{3})*(?:\.\d+)?)\s*(?:kwh|units?)\b"
    ).unwrap();

    // Meter readings ("Previous Reading: 34120", "Current meter reading - 34570").
    pub static ref PREVIOUS_READING: Regex = Regex::new(
        r"(?i)(?:previous|prev\.?)\s*(?:meter\s*)?reading[\s:.\-]*(\d+(?:[,\s\u{00a0}.]\d{3})*(?:\.\d+)?)"
    ).unwrap();

    pub static ref CURRENT_READING: Regex = Regex::new(
        r"(?i)(?:current|present)\s*(?:meter\s*)?reading[\s:.\-]*(\d+(?:[,\s\u{00a0}.]\d{3})*(?:\.\d+)?)"
    ).unwrap();

    // Labelled consumption totals, in fallback priority order.
    pub static ref UNITS_CONSUMED: Regex = Regex::new(
        r"(?i)units?\s*consumed?\s*[:\-]?\s*(\d+(?:[,\s\u{00a0}.]\d{3})*(?:\.\d+)?)"
    ).unwrap();

    pub static ref TOTAL_UNITS: Regex = Regex::new(
        r"(?i)total\s*units?\s*[:\-]?\s*(\d+(?:[,\s\u{00a0}.]\d{3})*(?:\.\d+)?)"
    ).unwrap();

    pub static ref ENERGY_CONSUMED: Regex = Regex::new(
        r"(?i)energy\s*consumed?\s*[:\-]?\s*(\d+(?:[,\s\u{00a0}.]\d{3})*(?:\.\d+)?)"
    ).unwrap();

    pub static ref CONSUMPTION: Regex = Regex::new(
        r"(?i)consumption\s*[:\-]?\s*(\d+(?:[,\s\u{00a0}.]\d{3})*(?:\.\d+)?)"
    ).unwrap();
}
