//! Front-end settings loaded from an optional TOML file.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_alquerque::Glyphs;
use tracing::{debug, info, instrument};

/// Settings file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG: &str = "alquerque.toml";

/// User preferences for the terminal front end.
///
/// Every key is optional; missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Tracing filter used when `RUST_LOG` is not set.
    log_filter: String,

    /// List selectable pieces and destinations under the board.
    show_catalogue: bool,

    /// Characters used to draw the board.
    glyphs: Glyphs,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            show_catalogue: true,
            glyphs: Glyphs::default(),
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!(
                "Failed to read settings file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))?;

        info!(log_filter = %settings.log_filter, "Settings loaded");
        Ok(settings)
    }

    /// Loads settings for a run.
    ///
    /// An explicit path must exist and parse. Without one, the default file
    /// is read if present and defaults are used otherwise.
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let path = Path::new(DEFAULT_CONFIG);
                if path.exists() {
                    Self::from_file(path)
                } else {
                    debug!("No settings file, using defaults");
                    Ok(Self::default())
                }
            }
        }
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
    use tempfile::NamedTempFile;

    fn write_settings(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_full_file() {
        let file = write_settings(
            r#"
log_filter = "debug"
show_catalogue = false

[glyphs]
red = "x"
blue = "o"
empty = "+"
target = "@"
"#,
        );
        let settings = Settings::from_file(file.path()).unwrap();
        assert_eq!(settings.log_filter(), "debug");
        assert!(!settings.show_catalogue());
        assert_eq!(settings.glyphs().red, 'x');
        assert_eq!(settings.glyphs().target, '@');
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let file = write_settings("[glyphs]\nblue = \"b\"\n");
        let settings = Settings::from_file(file.path()).unwrap();
        assert_eq!(settings.log_filter(), "info");
        assert!(*settings.show_catalogue());
        assert_eq!(settings.glyphs().blue, 'b');
        assert_eq!(settings.glyphs().red, 'R');
    }

    #[test]
    fn test_malformed_file() {
        let file = write_settings("show_catalogue = \"sometimes\"\n");
        let err = Settings::from_file(file.path()).unwrap_err();
        assert!(err.message.contains("Failed to parse"));
        assert!(err.file.ends_with("settings.rs"));
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(Settings::load(Some(&missing)).is_err());
    }
}
