//! Match configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use oxo_engine::SearchLevel;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Configuration for an automated match.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Search level for the X player.
    #[serde(default)]
    x_level: SearchLevel,

    /// Search level for the O player.
    #[serde(default)]
    o_level: SearchLevel,

    /// Consecutive rejected moves tolerated before the match is abandoned.
    #[serde(default = "default_max_rejections")]
    max_rejections: usize,
}

fn default_max_rejections() -> usize {
    3
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            x_level: SearchLevel::default(),
            o_level: SearchLevel::default(),
            max_rejections: default_max_rejections(),
        }
    }
}

impl MatchConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        if config.max_rejections == 0 {
            return Err(ConfigError::new("max_rejections must be at least 1".to_string()));
        }

        info!(x_level = %config.x_level, o_level = %config.o_level, "Config loaded");
        Ok(config)
    }

    /// Replaces the search levels that are given, keeping the others.
    pub fn with_levels(mut self, x_level: Option<SearchLevel>, o_level: Option<SearchLevel>) -> Self {
        if let Some(level) = x_level {
            self.x_level = level;
        }
        if let Some(level) = o_level {
            self.o_level = level;
        }
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults_fill_missing_fields() {
        let file = write_config("x_level = \"shallow\"\n");
        let config = MatchConfig::from_file(file.path()).unwrap();
        assert_eq!(*config.x_level(), SearchLevel::Shallow);
        assert_eq!(*config.o_level(), SearchLevel::Exhaustive);
        assert_eq!(*config.max_rejections(), 3);
    }

    #[test]
    fn test_invalid_level_is_rejected() {
        let file = write_config("o_level = \"deep\"\n");
        let err = MatchConfig::from_file(file.path()).unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_zero_rejections_is_rejected() {
        let file = write_config("max_rejections = 0\n");
        assert!(MatchConfig::from_file(file.path()).is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = MatchConfig::from_file("/nonexistent/oxo.toml").unwrap_err();
        assert!(err.to_string().starts_with("Config error: Failed to read config file"));
    }

    #[test]
    fn test_with_levels_overrides_given_levels() {
        let config = MatchConfig::default().with_levels(Some(SearchLevel::Shallow), None);
        assert_eq!(*config.x_level(), SearchLevel::Shallow);
        assert_eq!(*config.o_level(), SearchLevel::Exhaustive);
    }
}
