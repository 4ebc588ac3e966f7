//! Configuration for `StudentPlanner`
//!
//! Settings live in a TOML file under the platform config directory. The file
//! is seeded from compiled-in defaults on first run and topped up with any new
//! default fields on later loads. CLI overrides apply to one run only.

use crate::logger::Level;
use crate::warn;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Placeholder expanded to [`Config::get_app_dir`]
const DIR_VARIABLE: &str = "$STUDENT_PLANNER";

/// `[logging]` section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path; empty disables file logging
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// `[paths]` section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory holding the `courses` and `events` collections
    #[serde(default)]
    pub data_dir: String,
    /// Default directory for exported reports
    #[serde(default)]
    pub reports_dir: String,
}

/// Planner configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Storage and export locations
    #[serde(default)]
    pub paths: PathsConfig,
}

/// Per-run overrides from the command line; `None` keeps the loaded value
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Logging level
    pub level: Option<String>,
    /// Log file path
    pub file: Option<String>,
    /// Verbose flag
    pub verbose: Option<bool>,
    /// Data directory
    pub data_dir: Option<String>,
    /// Reports directory
    pub reports_dir: Option<String>,
}

/// Keys accepted by [`Config::get`], [`Config::set`] and [`Config::unset`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigKey {
    Level,
    File,
    Verbose,
    DataDir,
    ReportsDir,
}

impl ConfigKey {
    /// Keys stored as text, in file order
    const TEXT: [Self; 4] = [Self::Level, Self::File, Self::DataDir, Self::ReportsDir];

    /// Keys whose values are paths and may contain `$STUDENT_PLANNER`
    const PATHS: [Self; 3] = [Self::File, Self::DataDir, Self::ReportsDir];
}

impl FromStr for ConfigKey {
    type Err = String;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        match key {
            "level" => Ok(Self::Level),
            "file" => Ok(Self::File),
            "verbose" => Ok(Self::Verbose),
            "data_dir" | "data-dir" => Ok(Self::DataDir),
            "reports_dir" | "reports-dir" => Ok(Self::ReportsDir),
            _ => Err(format!(
                "Unknown config key: '{key}'. Use: level, file, verbose, data_dir, or reports_dir"
            )),
        }
    }
}

impl Config {
    /// Application directory, the value of `$STUDENT_PLANNER`
    ///
    /// `studentplanner` under [`dirs::config_dir`] (e.g. `~/.config/studentplanner`
    /// on Linux), or `./studentplanner` when the platform has no config dir.
    #[must_use]
    pub fn get_app_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("studentplanner")
    }

    /// Path of the user config file (`dconfig.toml` in debug builds)
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_app_dir().join(CONFIG_FILE_NAME)
    }

    fn text(&self, key: ConfigKey) -> Option<&String> {
        match key {
            ConfigKey::Level => Some(&self.logging.level),
            ConfigKey::File => Some(&self.logging.file),
            ConfigKey::DataDir => Some(&self.paths.data_dir),
            ConfigKey::ReportsDir => Some(&self.paths.reports_dir),
            ConfigKey::Verbose => None,
        }
    }

    fn text_mut(&mut self, key: ConfigKey) -> Option<&mut String> {
        match key {
            ConfigKey::Level => Some(&mut self.logging.level),
            ConfigKey::File => Some(&mut self.logging.file),
            ConfigKey::DataDir => Some(&mut self.paths.data_dir),
            ConfigKey::ReportsDir => Some(&mut self.paths.reports_dir),
            ConfigKey::Verbose => None,
        }
    }

    /// Fill text fields that are empty here but set in `defaults`.
    ///
    /// Returns `true` if anything was filled in.
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;
        for key in ConfigKey::TEXT {
            if let (Some(slot), Some(default)) = (self.text_mut(key), defaults.text(key)) {
                if slot.is_empty() && !default.is_empty() {
                    slot.clone_from(default);
                    changed = true;
                }
            }
        }
        changed
    }

    /// Apply command-line overrides for this run; the file is not touched
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        let texts = [
            (ConfigKey::Level, &overrides.level),
            (ConfigKey::File, &overrides.file),
            (ConfigKey::DataDir, &overrides.data_dir),
            (ConfigKey::ReportsDir, &overrides.reports_dir),
        ];
        for (key, value) in texts {
            if let (Some(slot), Some(value)) = (self.text_mut(key), value) {
                slot.clone_from(value);
            }
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }
    }

    /// Parse a TOML document; missing fields stay empty and path values have
    /// `$STUDENT_PLANNER` expanded.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or does not fit the schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;
        let app_dir = Self::get_app_dir();
        let app_dir = app_dir.to_string_lossy();
        for key in ConfigKey::PATHS {
            if let Some(slot) = config.text_mut(key) {
                if slot.contains(DIR_VARIABLE) {
                    *slot = slot.replace(DIR_VARIABLE, &app_dir);
                }
            }
        }
        Ok(config)
    }

    /// The compiled-in defaults for this build profile
    ///
    /// # Panics
    /// Panics if the embedded default configuration is invalid TOML.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Read `path`, or `None` with a warning if it cannot be read or parsed
    fn read_file(path: &Path) -> Option<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| warn!("Cannot read config {}: {e}", path.display()))
            .ok()?;
        Self::from_toml(&content)
            .map_err(|e| warn!("Ignoring invalid config {}: {e}", path.display()))
            .ok()
    }

    /// Load the user config, seeding it from defaults on first run.
    ///
    /// A file that gains fields from newer defaults is saved back. An
    /// unreadable file leaves the defaults in effect without overwriting it.
    #[must_use]
    pub fn load() -> Self {
        let path = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if !path.exists() {
            if let Err(e) = defaults.save() {
                warn!("Cannot create config {}: {e}", path.display());
            }
            return defaults;
        }

        let Some(mut config) = Self::read_file(&path) else {
            return defaults;
        };
        if config.merge_defaults(&defaults) {
            if let Err(e) = config.save() {
                warn!("Cannot update config {}: {e}", path.display());
            }
        }
        config
    }

    /// Write the config file, creating its directory if needed
    ///
    /// # Errors
    /// Returns an error if the directory or file cannot be written.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let path = Self::get_config_file_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Value of `key` as text, `None` for unknown keys
    ///
    /// Keys: `level`, `file`, `verbose`, `data_dir`, `reports_dir` (the two
    /// directory keys also accept dashes).
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        let key: ConfigKey = key.parse().ok()?;
        Some(
            self.text(key)
                .map_or_else(|| self.logging.verbose.to_string(), Clone::clone),
        )
    }

    /// Change `key` in memory; call [`save`](Config::save) to persist.
    ///
    /// # Errors
    /// Returns a message for an unknown key, an unknown log level or a
    /// non-boolean `verbose`.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key.parse::<ConfigKey>()? {
            ConfigKey::Verbose => {
                self.logging.verbose = value
                    .parse()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            ConfigKey::Level => {
                if Level::parse(value).is_none() {
                    return Err(format!(
                        "Invalid log level '{value}'. Use: error, warn, info, or debug"
                    ));
                }
                self.logging.level = value.trim().to_ascii_lowercase();
            }
            key => {
                if let Some(slot) = self.text_mut(key) {
                    *slot = value.to_string();
                }
            }
        }
        Ok(())
    }

    /// Restore `key` from `defaults`
    ///
    /// # Errors
    /// Returns a message for an unknown key.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        let key: ConfigKey = key.parse()?;
        if key == ConfigKey::Verbose {
            self.logging.verbose = defaults.logging.verbose;
        } else if let (Some(slot), Some(default)) = (self.text_mut(key), defaults.text(key)) {
            slot.clone_from(default);
        }
        Ok(())
    }

    /// Delete the config file so the next [`load`](Config::load) starts from
    /// defaults. A missing file is not an error.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be removed.
    pub fn reset() -> Result<(), std::io::Error> {
        match fs::remove_file(Self::get_config_file_path()) {
            Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(e),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;
        writeln!(f, "\n[paths]")?;
        writeln!(f, "  data_dir = \"{}\"", self.paths.data_dir)?;
        writeln!(f, "  reports_dir = \"{}\"", self.paths.reports_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_aliases() {
        assert_eq!("data-dir".parse::<ConfigKey>(), Ok(ConfigKey::DataDir));
        assert_eq!("reports_dir".parse::<ConfigKey>(), Ok(ConfigKey::ReportsDir));
        assert!("database".parse::<ConfigKey>().is_err());
    }

    #[test]
    fn test_verbose_is_not_text() {
        let config = Config::default();
        assert!(config.text(ConfigKey::Verbose).is_none());
        assert_eq!(config.get("verbose").as_deref(), Some("false"));
    }
}
