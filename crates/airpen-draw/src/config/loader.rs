//! Loading and saving pen configuration as RON

use std::path::Path;

use super::{ConfigError, PenConfig};

impl PenConfig {
    /// Parse and validate a configuration from RON text
    ///
    /// Missing fields fall back to their defaults.
    pub fn from_ron_str(content: &str) -> Result<Self, ConfigError> {
        let config: PenConfig = ron::from_str(content).map_err(|e| {
            tracing::warn!("Failed to parse pen config: {}", e);
            ConfigError::Parse(e.to_string())
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty-printed RON
    pub fn to_ron_string(&self) -> Result<String, ConfigError> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Load and validate a configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        let config = Self::from_ron_str(&content)?;
        tracing::info!("Loaded pen config from {:?}", path);
        Ok(config)
    }

    /// Write the configuration to disk, creating parent directories
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::Io(e.to_string()))?;
        }
        let content = self.to_ron_string()?;
        std::fs::write(path, content).map_err(|e| ConfigError::Io(e.to_string()))?;
        tracing::info!("Saved pen config to {:?}", path);
        Ok(())
    }
}
