//! Validation for user-submitted tracking and pickup requests.
//!
//! Validation reports issues as plain strings rather than errors; a request
//! with an empty issue list is acceptable.

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    static ref MONTH_YEAR: Regex = Regex::new(r"^(\d{4})-(\d{2})$").unwrap();
}

/// A request to record one billing period against a region.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackingRequest {
    /// Billing period in `YYYY-MM` form.
    pub month_year: String,

    /// Region for the emission factor lookup. Unknown regions are legal and
    /// fall back to the nationwide average, so no issue is raised here.
    pub region: String,
}

impl TrackingRequest {
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();

        match MONTH_YEAR.captures(&self.month_year) {
            Some(caps) => {
                let month: u32 = caps[2].parse().unwrap_or(0);
                if !(1..=12).contains(&month) {
                    issues.push(format!("month {} is out of range", &caps[2]));
                }
            }
            None => issues.push("month/year must be in YYYY-MM format".to_string()),
        }

        issues
    }
}

/// A request to schedule an e-waste pickup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EwasteRequest {
    pub item_type: String,
    pub quantity: i64,
    pub address: String,
    pub pickup_date: NaiveDate,
}

impl EwasteRequest {
    /// Validate against `today` (supplied by the caller so the check stays
    /// deterministic).
    pub fn validate(&self, today: NaiveDate) -> Vec<String> {
        let mut issues = Vec::new();

        let item_len = self.item_type.trim().chars().count();
        if item_len < 3 {
            issues.push("item type must be at least 3 characters".to_string());
        } else if item_len > 100 {
            issues.push("item type must be less than 100 characters".to_string());
        }

        if self.quantity <= 0 {
            issues.push("quantity must be positive".to_string());
        } else if self.quantity >= 10_000 {
            issues.push("quantity must be less than 10,000".to_string());
        }

        let address_len = self.address.trim().chars().count();
        if address_len < 10 {
            issues.push("address must be at least 10 characters".to_string());
        } else if address_len > 500 {
            issues.push("address must be less than 500 characters".to_string());
        }

        if self.pickup_date <= today {
            issues.push("pickup date must be in the future".to_string());
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn accepts_well_formed_tracking_request() {
        let request = TrackingRequest {
            month_year: "2025-03".to_string(),
            region: "Kerala".to_string(),
        };
        assert!(request.validate().is_empty());
    }

    #[test]
    fn rejects_malformed_month_year() {
        for bad in ["2025-3", "March 2025", "2025-13", ""] {
            let request = TrackingRequest {
                month_year: bad.to_string(),
                region: String::new(),
            };
            assert!(!request.validate().is_empty(), "accepted {:?}", bad);
        }
    }

    #[test]
    fn ewaste_bounds() {
        let base = EwasteRequest {
            item_type: "Old laptop".to_string(),
            quantity: 2,
            address: "12 MG Road, Bengaluru".to_string(),
            pickup_date: date(2025, 6, 1),
        };
        assert!(base.validate(date(2025, 5, 1)).is_empty());

        let mut past = base.clone();
        past.pickup_date = date(2025, 4, 1);
        assert_eq!(past.validate(date(2025, 5, 1)).len(), 1);

        let mut bulk = base.clone();
        bulk.quantity = 10_000;
        assert_eq!(bulk.validate(date(2025, 5, 1)).len(), 1);

        let mut terse = base;
        terse.item_type = "TV".to_string();
        terse.address = "here".to_string();
        assert_eq!(terse.validate(date(2025, 5, 1)).len(), 2);
    }
}
