//! Configuration structures for the tracking pipeline.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::bill::MAX_PLAUSIBLE_KWH;
use crate::error::Result;
use crate::points::PointsPolicy;

/// Main configuration for the carbontrackr pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackrConfig {
    /// Bill extraction configuration.
    pub extraction: ExtractionConfig,

    /// Reward points configuration.
    pub points: PointsConfig,

    /// Emission factor table configuration.
    pub factors: FactorsConfig,

    /// Vision gateway configuration.
    pub vision: VisionConfig,
}

impl Default for TrackrConfig {
    fn default() -> Self {
        Self {
            extraction: ExtractionConfig::default(),
            points: PointsConfig::default(),
            factors: FactorsConfig::default(),
            vision: VisionConfig::default(),
        }
    }
}

/// Bill extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Upper bound (exclusive, kWh) above which an extracted candidate is
    /// rejected as implausible for a monthly bill.
    pub max_plausible_kwh: u32,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            max_plausible_kwh: MAX_PLAUSIBLE_KWH as u32,
        }
    }
}

/// Reward points configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PointsConfig {
    /// Which award formula to apply.
    pub policy: PointsPolicy,
}

impl Default for PointsConfig {
    fn default() -> Self {
        Self {
            policy: PointsPolicy::Consumption,
        }
    }
}

/// Emission factor table configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FactorsConfig {
    /// Path to a custom factor table JSON file. The built-in state-wise
    /// Indian table is used when unset.
    pub table_path: Option<PathBuf>,
}

impl Default for FactorsConfig {
    fn default() -> Self {
        Self { table_path: None }
    }
}

/// Vision gateway configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VisionConfig {
    /// Base URL of the OpenAI-compatible gateway.
    pub base_url: String,

    /// Vision-capable model identifier.
    pub model: String,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,

    /// Maximum retries on retryable gateway failures.
    pub max_retries: u32,
}

impl Default for VisionConfig {
    fn default() -> Self {
        Self {
            base_url: "https://ai.gateway.lovable.dev/v1".to_string(),
            model: "google/gemini-2.5-flash".to_string(),
            timeout_secs: 60,
            max_retries: 3,
        }
    }
}

impl TrackrConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
