//! Rule-based consumption extractors for electricity-bill text.
//!
//! Each extractor implements one strategy of the cascade the parser runs:
//! unit-tagged numbers first, then meter-reading deltas, then labelled
//! consumption totals.

pub mod labels;
pub mod numbers;
pub mod patterns;
pub mod readings;
pub mod tagged;

pub use labels::extract_labelled;
pub use numbers::parse_grouped_number;
pub use readings::extract_meter_delta;
pub use tagged::extract_tagged;

use rust_decimal::Decimal;

/// A numeric consumption candidate produced by one extraction strategy.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitCandidate {
    /// Candidate value in kWh.
    pub value: Decimal,
    /// Position in source text.
    pub position: Option<(usize, usize)>,
    /// Source text that was matched.
    pub source: String,
}

impl UnitCandidate {
    pub fn new(value: Decimal, source: impl Into<String>) -> Self {
        Self {
            value,
            position: None,
            source: source.into(),
        }
    }

    pub fn with_position(mut self, start: usize, end: usize) -> Self {
        self.position = Some((start, end));
        self
    }
}
