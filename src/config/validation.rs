//! Configuration validation utilities

use super::*;
use crate::core::error::{Error, Result};

/// Validate the complete configuration
pub fn validate_config(config: &StrataConfig) -> Result<()> {
    validate_sampling_config(&config.sampling)?;
    validate_display_config(&config.display)?;
    validate_output_config(&config.output)?;
    validate_logging_config(&config.logging)?;
    Ok(())
}

/// Validate sampler settings
pub fn validate_sampling_config(config: &SamplingConfig) -> Result<()> {
    if !(1..=100).contains(&config.default_percent) {
        return Err(Error::ConfigurationError(format!(
            "Default percent must be between 1 and 100, got {}",
            config.default_percent
        )));
    }
    Ok(())
}

/// Validate table preview settings
pub fn validate_display_config(config: &DisplayConfig) -> Result<()> {
    if config.preview_rows == 0 {
        return Err(Error::ConfigurationError(
            "Preview rows must be greater than 0".to_string(),
        ));
    }
    if config.max_rows == 0 {
        return Err(Error::ConfigurationError(
            "Max rows must be greater than 0".to_string(),
        ));
    }
    Ok(())
}

/// Validate download settings
pub fn validate_output_config(config: &OutputConfig) -> Result<()> {
    let name = config.file_name.trim();
    if name.is_empty() {
        return Err(Error::ConfigurationError(
            "Output file name cannot be empty".to_string(),
        ));
    }
    if name.contains('/') || name.contains('\\') {
        return Err(Error::ConfigurationError(format!(
            "Output file name '{}' must not contain a path separator",
            config.file_name
        )));
    }
    if !config.mime_type.contains('/') {
        return Err(Error::ConfigurationError(format!(
            "Invalid MIME type '{}'",
            config.mime_type
        )));
    }
    Ok(())
}

/// Validate logging configuration
pub fn validate_logging_config(config: &LoggingConfig) -> Result<()> {
    let valid_levels = ["trace", "debug", "info", "warn", "error", "off"];

    if !valid_levels.contains(&config.level.to_ascii_lowercase().as_str()) {
        return Err(Error::ConfigurationError(format!(
            "Invalid log level '{}'. Valid levels: {}",
            config.level,
            valid_levels.join(", ")
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(validate_config(&StrataConfig::default()).is_ok());
    }

    #[test]
    fn test_validate_percent() {
        let mut config = SamplingConfig::default();
        config.default_percent = 0;
        assert!(validate_sampling_config(&config).is_err());
        config.default_percent = 101;
        assert!(validate_sampling_config(&config).is_err());
        config.default_percent = 100;
        assert!(validate_sampling_config(&config).is_ok());
    }

    #[test]
    fn test_validate_output() {
        let mut config = OutputConfig::default();
        config.file_name = "out/sample.csv".to_string();
        assert!(validate_output_config(&config).is_err());
        config.file_name = "  ".to_string();
        assert!(validate_output_config(&config).is_err());
    }

    #[test]
    fn test_validate_log_level() {
        let mut config = LoggingConfig::default();
        config.level = "INFO".to_string();
        assert!(validate_logging_config(&config).is_ok());
        config.level = "chatty".to_string();
        assert!(validate_logging_config(&config).is_err());
    }
}
