//! Bill consumption extraction module.

mod parser;
pub mod rules;

pub use parser::BillParser;

/// Token the upstream vision extractor emits when it could not find a
/// consumption value. Case-sensitive; its presence anywhere in the text
/// short-circuits extraction.
pub const NOT_FOUND_TOKEN: &str = "NOT_FOUND";

/// Upper bound (exclusive, kWh) above which a candidate is implausible for a
/// residential or commercial monthly bill.
pub const MAX_PLAUSIBLE_KWH: i64 = 100_000;
