//! CLI subcommands.

pub mod batch;
pub mod config;
pub mod estimate;
pub mod factors;
pub mod offset;
pub mod process;

use std::path::Path;

use carbontrackr_core::{EmissionFactorTable, TrackrConfig};

/// Load configuration from an explicit path, or defaults when none given.
pub(crate) fn load_config(config_path: Option<&str>) -> anyhow::Result<TrackrConfig> {
    match config_path {
        Some(path) => Ok(TrackrConfig::from_file(Path::new(path))?),
        None => Ok(TrackrConfig::default()),
    }
}

/// Build the factor table the configuration asks for. A custom table that
/// fails validation aborts here, before any bill is processed.
pub(crate) fn load_factor_table(config: &TrackrConfig) -> anyhow::Result<EmissionFactorTable> {
    match &config.factors.table_path {
        Some(path) => Ok(EmissionFactorTable::from_file(path)?),
        None => Ok(EmissionFactorTable::india()),
    }
}
