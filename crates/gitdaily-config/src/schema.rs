//! Configuration schema.

use gitdaily_commit::WindowPolicy;
use serde::{Deserialize, Serialize};

use crate::{ConfigError, ConfigResult};

/// Longest accepted pause between banner lines, in milliseconds.
const MAX_BANNER_DELAY_MS: u64 = 1000;

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Report configuration.
    #[serde(default)]
    pub report: ReportConfig,

    /// Welcome banner configuration.
    #[serde(default)]
    pub banner: BannerConfig,
}

impl Config {
    /// Checks values that TOML types alone cannot constrain.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] describing the first bad value.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.banner.delay_ms > MAX_BANNER_DELAY_MS {
            return Err(ConfigError::Invalid(format!(
                "banner.delay_ms must be at most {MAX_BANNER_DELAY_MS}"
            )));
        }
        Ok(())
    }
}

/// Report configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// How commits are matched against the target day.
    #[serde(default)]
    pub window: WindowPolicy,
}

/// Welcome banner configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BannerConfig {
    /// Show the banner on start.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Pause between banner lines, in milliseconds.
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            delay_ms: default_delay_ms(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_delay_ms() -> u64 {
    50
}
