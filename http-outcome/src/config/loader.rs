use crate::config::types::OutcomeConfig;
use crate::error::{OutcomeError, Result};
use std::path::Path;

/// Configuration loader trait
pub trait ConfigLoader {
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<OutcomeConfig>;
    fn load_with_validation<P: AsRef<Path>>(path: P) -> Result<OutcomeConfig>;
}

/// Default configuration loader implementation
pub struct DefaultConfigLoader;

impl ConfigLoader for DefaultConfigLoader {
    /// Load configuration from an outcome.toml file
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<OutcomeConfig> {
        let content = std::fs::read_to_string(&path).map_err(|_| OutcomeError::ConfigNotFound {
            path: path.as_ref().to_path_buf(),
        })?;

        let config: OutcomeConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration, then run `OutcomeConfig::validate` on it
    fn load_with_validation<P: AsRef<Path>>(path: P) -> Result<OutcomeConfig> {
        let path_ref = path.as_ref();

        if !path_ref.exists() {
            return Err(OutcomeError::ConfigNotFound {
                path: path_ref.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path_ref)?;

        let config: OutcomeConfig = toml::from_str(&content).map_err(|e| {
            OutcomeError::invalid_config(format!(
                "Failed to parse TOML in {}: {}",
                path_ref.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }
}

impl OutcomeConfig {
    /// Create a new config builder
    pub fn builder<S: Into<String>>(base_url: S) -> crate::config::builder::OutcomeConfigBuilder {
        crate::config::builder::OutcomeConfigBuilder::new(base_url)
    }

    /// Load configuration from an outcome.toml file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        DefaultConfigLoader::load_from_file(path)
    }

    /// Load and validate configuration
    pub fn load_with_validation<P: AsRef<Path>>(path: P) -> Result<Self> {
        DefaultConfigLoader::load_with_validation(path)
    }
}
