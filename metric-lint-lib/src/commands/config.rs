use crate::Result;
use crate::validation::{Severity, ValidationPolicy};
use camino::{Utf8Path, Utf8PathBuf};
use ohno::{IntoAppError, app_err};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;

/// The default configuration TOML content, embedded from `default_config.toml`
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../../default_config.toml");

const LOG_TARGET: &str = "    config";

/// Name of the configuration file looked up in the root being checked
pub const CONFIG_FILE_NAME: &str = "metric-lint.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Name of the files holding metric definitions
    #[serde(default = "default_definition_file_name")]
    pub definition_file_name: String,

    /// Accepted spellings for the optional `unit` property
    #[serde(default = "default_units")]
    pub units: Vec<String>,

    /// Severity used when a definition has neither or both threshold kinds
    #[serde(default = "default_threshold_kind_severity")]
    pub threshold_kind_severity: Severity,

    /// Require static threshold values to be JSON numbers
    #[serde(default)]
    pub strict_threshold_values: bool,

    /// Require every directory name under the root to be lowercase
    #[serde(default = "default_require_lowercase_directories")]
    pub require_lowercase_directories: bool,
}

fn default_definition_file_name() -> String {
    "metrics.json".to_string()
}

fn default_units() -> Vec<String> {
    ValidationPolicy::default().units
}

const fn default_threshold_kind_severity() -> Severity {
    Severity::Warning
}

const fn default_require_lowercase_directories() -> bool {
    true
}

impl Config {
    /// Load configuration from a file or use defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or holds invalid values
    pub fn load(base: &Utf8Path, config_path: Option<&Utf8PathBuf>) -> Result<Self> {
        let (final_path, text) = if let Some(path) = config_path {
            let text = fs::read_to_string(path).into_app_err_with(|| format!("reading metric-lint configuration file '{path}'"))?;
            (path.clone(), text)
        } else {
            let path = base.join(CONFIG_FILE_NAME);
            match fs::read_to_string(&path) {
                Ok(text) => (path, text),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    log::debug!(target: LOG_TARGET, "No '{path}' found, using the default configuration");
                    return Ok(Self::default());
                }
                Err(e) => return Err(e).into_app_err_with(|| format!("reading metric-lint configuration file '{path}'")),
            }
        };

        let config: Self = toml::from_str(&text).into_app_err_with(|| format!("parsing configuration file '{final_path}'"))?;
        config.validate()?;

        log::debug!(target: LOG_TARGET, "Loaded configuration from '{final_path}'");
        Ok(config)
    }

    /// Save the default configuration to a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written
    pub fn save_default(output_path: &Utf8Path) -> Result<()> {
        fs::write(output_path, DEFAULT_CONFIG_TOML).into_app_err_with(|| format!("writing default configuration to {output_path}"))?;
        Ok(())
    }

    /// The validation knobs this configuration selects.
    #[must_use]
    pub fn policy(&self) -> ValidationPolicy {
        ValidationPolicy {
            units: self.units.clone(),
            threshold_kind_severity: self.threshold_kind_severity,
            strict_threshold_values: self.strict_threshold_values,
        }
    }

    fn validate(&self) -> Result<()> {
        let name = self.definition_file_name.as_str();
        if name.is_empty() || name.contains(['/', '\\']) || name == "." || name == ".." {
            return Err(app_err!("definition_file_name must be a bare file name, got '{name}'"));
        }

        if self.units.is_empty() {
            return Err(app_err!("units must list at least one accepted unit"));
        }

        if let Some(blank) = self.units.iter().find(|u| u.trim().is_empty()) {
            return Err(app_err!("units must not contain blank entries, got '{blank}'"));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_TOML).expect("default_config.toml should be valid TOML that deserializes to Config")
    }
}
