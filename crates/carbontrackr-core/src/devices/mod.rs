//! Household device usage estimation.

mod catalog;
mod estimate;

pub use catalog::{AcTonnage, DeviceType, PowerPreset, DEVICE_TYPES, ac_watts, device_type};
pub use estimate::{
    DeviceEstimate, DeviceUsage, FleetEstimate, ImpactBand, estimate_device, estimate_fleet,
};
