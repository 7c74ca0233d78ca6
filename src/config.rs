use crate::error::{MiningError, MiningResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const MIN_PERCENT: f64 = 1.0;
pub const MAX_PERCENT: f64 = 100.0;

/// Validated mining thresholds, both percentages in `[1, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMiningConfig")]
pub struct MiningConfig {
    pub min_support_percent: f64,
    pub min_confidence_percent: f64,
}

#[derive(Deserialize)]
struct RawMiningConfig {
    min_support_percent: f64,
    min_confidence_percent: f64,
}

impl TryFrom<RawMiningConfig> for MiningConfig {
    type Error = MiningError;

    fn try_from(raw: RawMiningConfig) -> MiningResult<Self> {
        Self::new(raw.min_support_percent, raw.min_confidence_percent)
    }
}

impl MiningConfig {
    pub fn new(min_support_percent: f64, min_confidence_percent: f64) -> MiningResult<Self> {
        let config = Self {
            min_support_percent,
            min_confidence_percent,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> MiningResult<()> {
        check_percent("minimum support", self.min_support_percent)?;
        check_percent("minimum confidence", self.min_confidence_percent)?;
        Ok(())
    }
}

fn check_percent(name: &'static str, value: f64) -> MiningResult<()> {
    // NaN fails both comparisons, so it is rejected here too.
    if (MIN_PERCENT..=MAX_PERCENT).contains(&value) {
        Ok(())
    } else {
        Err(MiningError::InvalidThreshold { name, value })
    }
}

/// On-disk configuration. Every field is optional so CLI flags can fill in
/// whatever the file leaves out.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FileConfig {
    #[serde(default)]
    pub thresholds: ThresholdsConfig,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ThresholdsConfig {
    pub min_support_percent: Option<f64>,
    pub min_confidence_percent: Option<f64>,
}

impl FileConfig {
    pub fn from_toml_str(content: &str) -> MiningResult<Self> {
        toml::from_str(content).map_err(|e| MiningError::Config {
            reason: e.to_string(),
        })
    }

    pub fn load<P: AsRef<Path>>(path: P) -> MiningResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Merge with overrides (overrides win) and validate.
    pub fn resolve(
        &self,
        min_support_percent: Option<f64>,
        min_confidence_percent: Option<f64>,
    ) -> MiningResult<MiningConfig> {
        let support = min_support_percent
            .or(self.thresholds.min_support_percent)
            .ok_or_else(|| MiningError::Config {
                reason: "minimum support not set (use --min-support or [thresholds] in the config file)"
                    .to_string(),
            })?;
        let confidence = min_confidence_percent
            .or(self.thresholds.min_confidence_percent)
            .ok_or_else(|| MiningError::Config {
                reason: "minimum confidence not set (use --min-confidence or [thresholds] in the config file)"
                    .to_string(),
            })?;
        MiningConfig::new(support, confidence)
    }
}
