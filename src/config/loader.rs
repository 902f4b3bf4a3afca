//! Configuration loading utilities
//!
//! This module handles loading configuration from files and the environment
//! with proper precedence and validation.

use super::*;
use crate::core::error::{Error, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Load configuration from environment variables
pub fn load_from_env() -> Result<StrataConfig> {
    let mut config = StrataConfig::default();
    load_from_env_into(&mut config)?;
    Ok(config)
}

/// Overwrite `config` with every `STRATA_*` variable that is set
pub fn load_from_env_into(config: &mut StrataConfig) -> Result<()> {
    if let Ok(seed) = env::var("STRATA_SEED") {
        config.sampling.seed = seed
            .parse()
            .map_err(|e| Error::ConfigurationError(format!("Invalid STRATA_SEED: {}", e)))?;
    }

    if let Ok(percent) = env::var("STRATA_DEFAULT_PERCENT") {
        config.sampling.default_percent = percent.parse().map_err(|e| {
            Error::ConfigurationError(format!("Invalid STRATA_DEFAULT_PERCENT: {}", e))
        })?;
    }

    if let Ok(rows) = env::var("STRATA_PREVIEW_ROWS") {
        config.display.preview_rows = rows.parse().map_err(|e| {
            Error::ConfigurationError(format!("Invalid STRATA_PREVIEW_ROWS: {}", e))
        })?;
    }

    if let Ok(level) = env::var("STRATA_LOG_LEVEL") {
        config.logging.level = level;
    }

    Ok(())
}

/// Load configuration from a file (YAML or TOML based on extension)
pub fn load_from_file(path: &Path) -> Result<StrataConfig> {
    if !path.exists() {
        return Err(Error::ConfigurationError(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        Error::ConfigurationError(format!(
            "Failed to read config file {}: {}",
            path.display(),
            e
        ))
    })?;

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("yaml") | Some("yml") => load_from_yaml(&contents),
        Some("toml") => load_from_toml(&contents),
        Some(ext) => Err(Error::ConfigurationError(format!(
            "Unsupported config file format: {}",
            ext
        ))),
        None => load_from_yaml(&contents).or_else(|_| load_from_toml(&contents)),
    }
}

/// Load configuration from YAML string
pub fn load_from_yaml(yaml: &str) -> Result<StrataConfig> {
    serde_yaml::from_str(yaml)
        .map_err(|e| Error::ConfigurationError(format!("Failed to parse YAML config: {}", e)))
}

/// Load configuration from TOML string
pub fn load_from_toml(toml: &str) -> Result<StrataConfig> {
    toml::from_str(toml)
        .map_err(|e| Error::ConfigurationError(format!("Failed to parse TOML config: {}", e)))
}

/// Load configuration with precedence: defaults -> file -> environment
pub fn load_with_precedence<P: AsRef<Path>>(config_file: Option<P>) -> Result<StrataConfig> {
    // Settings missing from the file keep their defaults
    let mut config = match config_file {
        Some(file_path) => load_from_file(file_path.as_ref())?,
        None => StrataConfig::default(),
    };

    load_from_env_into(&mut config)?;

    config.validate()?;

    Ok(config)
}

/// Save configuration to a file
pub fn save_to_file(config: &StrataConfig, path: &Path) -> Result<()> {
    let contents = match path.extension().and_then(|ext| ext.to_str()) {
        Some("yaml") | Some("yml") => config.to_yaml()?,
        Some("toml") => config.to_toml()?,
        Some(ext) => {
            return Err(Error::ConfigurationError(format!(
                "Unsupported config file format: {}",
                ext
            )))
        }
        None => config.to_yaml()?,
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| {
                Error::ConfigurationError(format!(
                    "Failed to create config directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    fs::write(path, contents).map_err(|e| {
        Error::ConfigurationError(format!(
            "Failed to write config file {}: {}",
            path.display(),
            e
        ))
    })
}

/// Get configuration file paths in order of precedence
pub fn get_config_file_paths() -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = vec![
        "strata.yml".into(),
        "strata.yaml".into(),
        "strata.toml".into(),
    ];

    if let Some(config_dir) = dirs::config_dir() {
        let strata_dir = config_dir.join("strata");
        paths.push(strata_dir.join("config.yml"));
        paths.push(strata_dir.join("config.yaml"));
        paths.push(strata_dir.join("config.toml"));
    }

    if let Ok(config_path) = env::var("STRATA_CONFIG_FILE") {
        paths.insert(0, config_path.into());
    }

    paths
}

/// Auto-discover and load configuration file
///
/// A file named by `STRATA_CONFIG_FILE` must exist; the other candidates are
/// skipped when absent.
pub fn auto_load() -> Result<StrataConfig> {
    if let Ok(explicit) = env::var("STRATA_CONFIG_FILE") {
        let path = PathBuf::from(explicit);
        if !path.exists() {
            return Err(Error::ConfigurationError(format!(
                "STRATA_CONFIG_FILE points to a missing file: {}",
                path.display()
            )));
        }
    }

    for path in get_config_file_paths() {
        if path.exists() {
            log::debug!("loading configuration from {}", path.display());
            return load_with_precedence(Some(path));
        }
    }

    load_with_precedence::<&Path>(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use tempfile::tempdir;

    // Mutex to serialize tests that modify environment variables
    static ENV_TEST_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 5] = [
        "STRATA_SEED",
        "STRATA_DEFAULT_PERCENT",
        "STRATA_PREVIEW_ROWS",
        "STRATA_LOG_LEVEL",
        "STRATA_CONFIG_FILE",
    ];

    fn with_clean_env<F: FnOnce()>(f: F) {
        let _lock = ENV_TEST_MUTEX.lock().unwrap();
        let saved: Vec<(&str, Option<String>)> =
            VARS.iter().map(|v| (*v, env::var(v).ok())).collect();
        for v in VARS {
            env::remove_var(v);
        }

        f();

        for (v, value) in saved {
            match value {
                Some(value) => env::set_var(v, value),
                None => env::remove_var(v),
            }
        }
    }

    #[test]
    fn test_load_from_env() {
        with_clean_env(|| {
            env::set_var("STRATA_SEED", "1234");
            env::set_var("STRATA_DEFAULT_PERCENT", "20");
            env::set_var("STRATA_LOG_LEVEL", "debug");

            let config = load_from_env().unwrap();
            assert_eq!(config.sampling.seed, 1234);
            assert_eq!(config.sampling.default_percent, 20);
            assert_eq!(config.logging.level, "debug");
        });
    }

    #[test]
    fn test_invalid_env_value() {
        with_clean_env(|| {
            env::set_var("STRATA_SEED", "forty-two");
            assert!(matches!(
                load_from_env(),
                Err(Error::ConfigurationError(_))
            ));
        });
    }

    #[test]
    fn test_env_overrides_file() {
        with_clean_env(|| {
            let dir = tempdir().unwrap();
            let path = dir.path().join("strata.toml");
            fs::write(&path, "[sampling]\nseed = 9\ndefault_percent = 30\n").unwrap();
            env::set_var("STRATA_DEFAULT_PERCENT", "60");

            let config = load_with_precedence(Some(&path)).unwrap();
            assert_eq!(config.sampling.seed, 9);
            assert_eq!(config.sampling.default_percent, 60);
        });
    }

    #[test]
    fn test_env_equal_to_default_still_overrides_file() {
        with_clean_env(|| {
            let dir = tempdir().unwrap();
            let path = dir.path().join("strata.toml");
            fs::write(&path, "[sampling]\nseed = 9\ndefault_percent = 30\n").unwrap();
            env::set_var("STRATA_SEED", "42");
            env::set_var("STRATA_DEFAULT_PERCENT", "1");

            let config = load_with_precedence(Some(&path)).unwrap();
            assert_eq!(config.sampling.seed, 42);
            assert_eq!(config.sampling.default_percent, 1);
        });
    }

    #[test]
    fn test_file_values_equal_to_default_are_kept() {
        with_clean_env(|| {
            let dir = tempdir().unwrap();
            let path = dir.path().join("strata.yml");
            fs::write(&path, "display:\n  preview_rows: 5\n  max_rows: 8\n").unwrap();

            let config = load_with_precedence(Some(&path)).unwrap();
            assert_eq!(config.display.preview_rows, 5);
            assert_eq!(config.display.max_rows, 8);
            assert_eq!(config.sampling.seed, 42);
        });
    }

    #[test]
    fn test_missing_explicit_config_file() {
        with_clean_env(|| {
            let dir = tempdir().unwrap();
            let missing = dir.path().join("absent.toml");
            env::set_var("STRATA_CONFIG_FILE", &missing);

            let err = auto_load().unwrap_err();
            assert!(matches!(err, Error::ConfigurationError(_)));
            assert!(err.to_string().contains("absent.toml"));
        });
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("strata.ini");
        fs::write(&path, "seed=1").unwrap();
        assert!(load_from_file(&path).is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = load_from_file(Path::new("/nonexistent/strata.yml")).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }
}
