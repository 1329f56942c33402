//! Configuration loader.

use std::path::Path;

use tracing::debug;

use crate::{Config, ConfigError, ConfigResult};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "gitdaily.toml";

/// Loads configuration from the given path.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed or validated.
pub fn load_config(path: impl AsRef<Path>) -> ConfigResult<Config> {
    let path = path.as_ref();
    debug!(?path, "loading configuration");

    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    config.validate()?;

    Ok(config)
}

/// Finds and loads configuration starting from the given directory.
///
/// Walks up the directory tree until a configuration file is found.
///
/// # Errors
///
/// Returns an error if no configuration file is found or it cannot be parsed.
fn find_and_load_config_from(start_dir: impl AsRef<Path>) -> ConfigResult<Config> {
    let start_dir = start_dir.as_ref();
    let mut dir = start_dir;

    loop {
        let config_path = dir.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return load_config(config_path);
        }

        match dir.parent() {
            Some(parent) => dir = parent,
            None => break,
        }
    }

    Err(ConfigError::NotFound(start_dir.join(CONFIG_FILE_NAME)))
}

/// Finds and loads configuration starting from the given directory, falling
/// back to defaults when no configuration file exists there or in a parent.
///
/// # Errors
///
/// Returns an error if a configuration file exists but cannot be loaded.
pub fn load_or_default_from(start_dir: impl AsRef<Path>) -> ConfigResult<Config> {
    match find_and_load_config_from(start_dir) {
        Err(ConfigError::NotFound(path)) => {
            debug!(?path, "no configuration file, using defaults");
            Ok(Config::default())
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gitdaily_commit::WindowPolicy;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_config_file_name() {
        assert_eq!(CONFIG_FILE_NAME, "gitdaily.toml");
    }

    #[test]
    fn test_load_config_not_found() {
        let result = load_config("/nonexistent/path/gitdaily.toml");
        match result {
            Err(ConfigError::NotFound(path)) => {
                assert!(path.to_string_lossy().contains("gitdaily.toml"));
            }
            _ => panic!("Expected NotFound error"),
        }
    }

    #[test]
    fn test_load_config_valid() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("gitdaily.toml");
        fs::write(
            &config_path,
            r#"
            [report]
            window = "since"

            [banner]
            enabled = false
            delay_ms = 10
        "#,
        )
        .unwrap();

        let config = load_config(&config_path).unwrap();
        assert_eq!(config.report.window, WindowPolicy::Since);
        assert!(!config.banner.enabled);
        assert_eq!(config.banner.delay_ms, 10);
    }

    #[test]
    fn test_load_config_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("gitdaily.toml");
        fs::write(&config_path, "").unwrap();

        // Default values should be used
        let config = load_config(&config_path).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_config_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("gitdaily.toml");
        fs::write(&config_path, "this is not valid toml [[[").unwrap();

        let result = load_config(&config_path);
        assert!(matches!(result, Err(ConfigError::InvalidToml(_))));
    }

    #[test]
    fn test_load_config_fails_validation() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("gitdaily.toml");
        fs::write(&config_path, "[banner]\ndelay_ms = 60000\n").unwrap();

        let result = load_config(&config_path);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_find_and_load_config_in_parent() {
        let parent_dir = TempDir::new().unwrap();
        fs::write(
            parent_dir.path().join("gitdaily.toml"),
            "[report]\nwindow = \"since\"\n",
        )
        .unwrap();

        let child_dir = parent_dir.path().join("subdir");
        fs::create_dir(&child_dir).unwrap();

        let config = find_and_load_config_from(&child_dir).unwrap();
        assert_eq!(config.report.window, WindowPolicy::Since);
    }

    #[test]
    fn test_load_or_default_without_file() {
        let temp_dir = TempDir::new().unwrap();
        let config = load_or_default_from(temp_dir.path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_or_default_reports_broken_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("gitdaily.toml"), "[report\n").unwrap();

        let result = load_or_default_from(temp_dir.path());
        assert!(result.is_err());
    }
}
