use std::path::Path;

use crate::error::ConfigError;

/// Search engine settings. `max_depth` is fixed for the lifetime of an
/// engine instance; 8 ply is deep enough for one- and two-move tactics
/// while staying well inside interactive time budgets.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub max_depth: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig { max_depth: 8 }
    }
}

/// Top-level engine configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub search: SearchConfig,
}

impl EngineConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: EngineConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            eprintln!(
                "Warning: config file '{}' not found, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search.max_depth == 0 {
            return Err(ConfigError::Validation(
                "search.max_depth must be >= 1".into(),
            ));
        }
        // A game can never last more than 42 plies
        if self.search.max_depth > 42 {
            return Err(ConfigError::Validation(
                "search.max_depth must be <= 42".into(),
            ));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&EngineConfig::default()).expect("default config serializes")
    }
}
