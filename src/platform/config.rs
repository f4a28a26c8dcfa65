// BayLog - platform/config.rs
//
// Config directory resolution and read-only config.toml loading with
// startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance. Nothing is ever written back.

use crate::core::model::{Bay, BayDefaults};
use crate::util::constants;
use crate::util::error::{self, ConfigError};
use directories::ProjectDirs;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Resolved platform paths for BayLog configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/baylog/ or %APPDATA%\BayLog\config\)
    pub config_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            tracing::debug!(config = %config_dir.display(), "Platform paths resolved");
            Self { config_dir }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            Self {
                config_dir: PathBuf::from("."),
            }
        }
    }

    /// Full path of config.toml.
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(constants::CONFIG_FILE_NAME)
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[ui]` section.
    pub ui: UiSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
    /// `[bays]` section.
    pub bays: BaysSection,
}

/// `[ui]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct UiSection {
    /// Theme: "dark" or "light".
    pub theme: Option<String>,
    /// Body font size in points.
    pub font_size: Option<f32>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// `[bays]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct BaysSection {
    /// `[bays.default_operators]`: bay number (as a key) -> operators.
    pub default_operators: BTreeMap<String, String>,
}

/// Validated application configuration derived from `config.toml`.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Dark mode (true) or light mode (false).
    pub dark_mode: bool,
    /// Body font size in points.
    pub font_size: f32,
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
    /// Initial per-bay default operators.
    pub bay_defaults: BayDefaults,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dark_mode: true,
            font_size: constants::DEFAULT_FONT_SIZE,
            log_level: None,
            bay_defaults: BayDefaults::default(),
        }
    }
}

/// Load and validate `config.toml` from the given config directory.
///
/// Returns `AppConfig` with validated values and a list of non-fatal warnings.
/// A missing file yields defaults with no warnings. An unreadable or
/// unparseable file yields defaults with one warning; the application
/// still starts.
pub fn load_config(config_dir: &Path) -> (AppConfig, Vec<String>) {
    let paths = PlatformPaths {
        config_dir: config_dir.to_path_buf(),
    };
    let config_path = paths.config_file();

    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "No config.toml found; using defaults");
        return (AppConfig::default(), Vec::new());
    }

    match read_raw(&config_path) {
        Ok(raw) => {
            tracing::info!(path = %config_path.display(), "Loaded config.toml");
            validate(raw)
        }
        Err(e) => {
            let msg = format!("{e}. Using defaults.");
            tracing::warn!("{}", msg);
            (AppConfig::default(), vec![msg])
        }
    }
}

fn read_raw(path: &Path) -> error::Result<RawConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let raw = toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(raw)
}

/// Validate each field against named constants, accumulating all problems.
pub fn validate(raw: RawConfig) -> (AppConfig, Vec<String>) {
    let mut config = AppConfig::default();
    let mut warnings: Vec<String> = Vec::new();

    // -- UI: theme --
    if let Some(ref theme) = raw.ui.theme {
        match theme.to_lowercase().as_str() {
            "dark" => config.dark_mode = true,
            "light" => config.dark_mode = false,
            other => warnings.push(
                ConfigError::ValueOutOfRange {
                    field: "ui.theme".to_string(),
                    value: other.to_string(),
                    expected: "\"dark\" or \"light\"".to_string(),
                }
                .to_string(),
            ),
        }
    }

    // -- UI: font_size --
    if let Some(size) = raw.ui.font_size {
        if (constants::MIN_FONT_SIZE..=constants::MAX_FONT_SIZE).contains(&size) {
            config.font_size = size;
        } else {
            warnings.push(
                ConfigError::ValueOutOfRange {
                    field: "ui.font_size".to_string(),
                    value: size.to_string(),
                    expected: format!(
                        "{}-{}",
                        constants::MIN_FONT_SIZE,
                        constants::MAX_FONT_SIZE
                    ),
                }
                .to_string(),
            );
        }
    }

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        if constants::VALID_LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.to_lowercase());
        } else {
            warnings.push(
                ConfigError::ValueOutOfRange {
                    field: "logging.level".to_string(),
                    value: level.clone(),
                    expected: constants::VALID_LOG_LEVELS.join(", "),
                }
                .to_string(),
            );
        }
    }

    // -- Bays: default_operators --
    for (key, operators) in &raw.bays.default_operators {
        match parse_bay_key(key) {
            Some(bay) => config.bay_defaults.set(bay, operators.trim()),
            None => warnings.push(
                ConfigError::ValueOutOfRange {
                    field: "bays.default_operators".to_string(),
                    value: key.clone(),
                    expected: format!(
                        "a bay number {}-{}",
                        constants::FIRST_BAY,
                        constants::LAST_BAY
                    ),
                }
                .to_string(),
            ),
        }
    }

    if !warnings.is_empty() {
        tracing::warn!(count = warnings.len(), "Config validation produced warnings");
    }

    (config, warnings)
}

fn parse_bay_key(key: &str) -> Option<Bay> {
    key.trim()
        .parse::<i64>()
        .ok()
        .and_then(|n| Bay::new(n).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_config(dir: &Path, body: &str) {
        fs::write(dir.join(constants::CONFIG_FILE_NAME), body).unwrap();
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let (config, warnings) = load_config(dir.path());
        assert!(warnings.is_empty());
        assert!(config.dark_mode);
        assert_eq!(config.font_size, constants::DEFAULT_FONT_SIZE);
    }

    #[test]
    fn test_valid_config_is_applied() {
        let dir = tempfile::tempdir().unwrap();
        write_config(
            dir.path(),
            r#"
[ui]
theme = "Light"
font_size = 16.0

[logging]
level = "DEBUG"

[bays.default_operators]
1 = "John,Doe"
9 = " Ann "
"#,
        );
        let (config, warnings) = load_config(dir.path());
        assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
        assert!(!config.dark_mode);
        assert_eq!(config.font_size, 16.0);
        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert_eq!(config.bay_defaults.get(Bay::first()), "John,Doe");
        assert_eq!(config.bay_defaults.get(Bay::new(9).unwrap()), "Ann");
    }

    #[test]
    fn test_out_of_range_values_warn_and_fall_back() {
        let dir = tempfile::tempdir().unwrap();
        write_config(
            dir.path(),
            r#"
[ui]
theme = "neon"
font_size = 99.0

[logging]
level = "loud"

[bays.default_operators]
0 = "Nobody"
x = "Nobody"
"#,
        );
        let (config, warnings) = load_config(dir.path());
        assert_eq!(warnings.len(), 5, "{warnings:?}");
        assert!(config.dark_mode);
        assert_eq!(config.font_size, constants::DEFAULT_FONT_SIZE);
        assert!(config.log_level.is_none());
        assert_eq!(config.bay_defaults, BayDefaults::default());
    }

    #[test]
    fn test_unparseable_file_warns_once() {
        let dir = tempfile::tempdir().unwrap();
        write_config(dir.path(), "[ui\ntheme = ");
        let (config, warnings) = load_config(dir.path());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].starts_with("Configuration error: Config parse error"));
        assert!(config.dark_mode);
    }

    #[test]
    fn test_config_file_lives_in_config_dir() {
        let paths = PlatformPaths {
            config_dir: PathBuf::from("cfg"),
        };
        assert_eq!(paths.config_file(), PathBuf::from("cfg").join("config.toml"));
    }
}
