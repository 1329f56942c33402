//! Configuration management for git-daily-report.
//!
//! This crate handles loading the optional `gitdaily.toml` configuration file.
//! Every setting has a default, so a missing file is not an error for
//! [`load_or_default_from`].

mod error;
mod loader;
mod schema;

pub use error::{ConfigError, ConfigResult};
pub use loader::{CONFIG_FILE_NAME, load_config, load_or_default_from};
pub use schema::{BannerConfig, Config, ReportConfig};
