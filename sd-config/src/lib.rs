//! Settings for the sd field layer, read from `sd.toml` and the process
//! environment once at start-up, then passed by reference.
//!
//! ```toml
//! [fields]
//! json_max_length = 4096
//!
//! [logging]
//! level = "debug"
//!
//! [redis]
//! host = "localhost"
//! port = "6379"
//! ```
//!
//! Environment variables override the file: `SD_LOG_LEVEL`,
//! `SD_JSON_MAX_LENGTH`, `SD_GENERIC_MAX_LENGTH`, `SD_MAC_MAX_LENGTH`, and
//! `DJANGO_*` / `RABBITMQ_*` / `REDIS_*` for the service sections.

mod error;
mod section;

pub use error::{ConfigError, ConfigResult};
pub use section::EnvSection;

use sd_fields::{AnyField, DEFAULT_TEXT_MAX_LENGTH, FieldKind, MAC_MAX_LENGTH};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File consulted when no path is given and `SD_CONFIG` is unset.
pub const DEFAULT_CONFIG_FILE: &str = "sd.toml";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Column length limits applied to every field built from these settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldLimits {
    /// JSON, List, Dict and MACSet columns.
    #[serde(default = "default_text_max_length")]
    pub json_max_length: usize,
    #[serde(default = "default_text_max_length")]
    pub generic_max_length: usize,
    #[serde(default = "default_mac_max_length")]
    pub mac_max_length: usize,
}

fn default_text_max_length() -> usize {
    DEFAULT_TEXT_MAX_LENGTH
}

fn default_mac_max_length() -> usize {
    MAC_MAX_LENGTH
}

impl Default for FieldLimits {
    fn default() -> Self {
        Self {
            json_max_length: default_text_max_length(),
            generic_max_length: default_text_max_length(),
            mac_max_length: default_mac_max_length(),
        }
    }
}

impl FieldLimits {
    pub fn max_length_for(&self, kind: FieldKind) -> usize {
        match kind {
            FieldKind::Json | FieldKind::List | FieldKind::Dict | FieldKind::MacSet => {
                self.json_max_length
            }
            FieldKind::GenericObject => self.generic_max_length,
            FieldKind::Mac => self.mac_max_length,
        }
    }

    /// Builds a column of `kind` carrying the configured limit.
    pub fn field(&self, kind: FieldKind) -> AnyField {
        AnyField::for_kind(kind).with_max_length(self.max_length_for(kind))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Top-level settings parsed from `sd.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub fields: FieldLimits,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub django: EnvSection,
    #[serde(default)]
    pub rabbitmq: EnvSection,
    #[serde(default)]
    pub redis: EnvSection,
}

impl Settings {
    /// Loads settings from an explicit path. A missing file yields defaults;
    /// a file that cannot be read or parsed is an error.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            info!("No settings file found at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let settings = Self::from_toml_str(&contents)?;
        info!("Loaded settings from {:?}", path);
        Ok(settings)
    }

    pub fn from_toml_str(contents: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Applies `NAME=value` overrides. Unrecognised names are ignored.
    pub fn apply_env<I, K, V>(&mut self, vars: I) -> ConfigResult<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        for (name, value) in vars {
            let name = name.as_ref();
            match name {
                "SD_LOG_LEVEL" => self.logging.level = value.into(),
                "SD_JSON_MAX_LENGTH" => {
                    self.fields.json_max_length = parse_limit(name, value.into())?
                }
                "SD_GENERIC_MAX_LENGTH" => {
                    self.fields.generic_max_length = parse_limit(name, value.into())?
                }
                "SD_MAC_MAX_LENGTH" => {
                    self.fields.mac_max_length = parse_limit(name, value.into())?
                }
                _ => {
                    if let Some((section, key)) = self.section_for(name) {
                        debug!(var = name, "environment override");
                        section.set(key, value);
                    }
                }
            }
        }
        Ok(())
    }

    /// Reads the settings file (explicit path, else `SD_CONFIG`, else
    /// `sd.toml`), applies the process environment and validates the result.
    pub fn from_env_and_file(path: Option<&Path>) -> ConfigResult<Self> {
        let vars: Vec<(String, String)> = std::env::vars().collect();
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => vars
                .iter()
                .find(|(name, _)| name == "SD_CONFIG")
                .map(|(_, value)| PathBuf::from(value))
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE)),
        };

        let mut settings = Self::load_from(&path)?;
        settings.apply_env(vars)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        let limits = [
            ("fields.json_max_length", self.fields.json_max_length),
            ("fields.generic_max_length", self.fields.generic_max_length),
            ("fields.mac_max_length", self.fields.mac_max_length),
        ];
        for (key, limit) in limits {
            if limit == 0 {
                return Err(ConfigError::invalid(key, "must be greater than zero"));
            }
        }
        if self.fields.mac_max_length < MAC_MAX_LENGTH {
            return Err(ConfigError::invalid(
                "fields.mac_max_length",
                format!("must be at least {MAC_MAX_LENGTH}"),
            ));
        }
        if !LOG_LEVELS.contains(&self.logging.level.to_ascii_lowercase().as_str()) {
            return Err(ConfigError::invalid(
                "logging.level",
                format!("`{}` is not one of {}", self.logging.level, LOG_LEVELS.join(", ")),
            ));
        }
        Ok(())
    }

    /// Looks up a service section by name.
    pub fn section(&self, name: &str) -> Option<&EnvSection> {
        match name.to_ascii_lowercase().as_str() {
            "django" => Some(&self.django),
            "rabbitmq" => Some(&self.rabbitmq),
            "redis" => Some(&self.redis),
            _ => None,
        }
    }

    fn section_for<'a>(&mut self, var: &'a str) -> Option<(&mut EnvSection, &'a str)> {
        let (prefix, key) = var.split_once('_')?;
        if key.is_empty() {
            return None;
        }
        let section = match prefix {
            "DJANGO" => &mut self.django,
            "RABBITMQ" => &mut self.rabbitmq,
            "REDIS" => &mut self.redis,
            _ => return None,
        };
        Some((section, key))
    }
}

fn parse_limit(name: &str, raw: String) -> ConfigResult<usize> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::invalid(name, format!("`{raw}` is not a length")))
}
