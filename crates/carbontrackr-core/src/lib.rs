//! Core library for carbon-footprint tracking.
//!
//! This crate provides:
//! - Electricity-bill consumption extraction from OCR text
//! - Region-aware carbon emission computation (kg CO₂ per kWh)
//! - Reward-point policies, levels, and badges
//! - Household device usage estimation
//! - Carbon offset planning

pub mod bill;
pub mod devices;
pub mod emissions;
pub mod error;
pub mod models;
pub mod offset;
pub mod points;

pub use bill::{BillParser, MAX_PLAUSIBLE_KWH, NOT_FOUND_TOKEN};
pub use devices::{DeviceUsage, FleetEstimate, estimate_fleet};
pub use emissions::{DEFAULT_REGION, EmissionFactorTable, EmissionsResult};
pub use error::{Result, TrackrError};
pub use models::config::TrackrConfig;
pub use models::report::BillReport;
pub use offset::OffsetPlan;
pub use points::PointsPolicy;
