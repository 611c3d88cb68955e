use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::open_closed::Special;
use crate::report::Principle;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

// =============================================================================
// Demo configuration
// =============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SolidConfig {
    pub principles: Vec<Principle>,
    pub color: bool,
    /// SQLite file for the SRP walkthrough; in memory when unset.
    pub database: Option<PathBuf>,
    pub log_level: String,
    pub specials: Vec<SpecialConfig>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpecialConfig {
    pub description: String,
    pub price: f64,
}

impl Default for SolidConfig {
    fn default() -> Self {
        SolidConfig {
            principles: Principle::ALL.to_vec(),
            color: true,
            database: None,
            log_level: "warn".to_string(),
            specials: Vec::new(),
        }
    }
}

impl SolidConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: SolidConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        let config: SolidConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// JSON when the extension says so, TOML otherwise.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|err| ConfigError::Read {
            path: path.display().to_string(),
            message: err.to_string(),
        })?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.principles.is_empty() {
            return Err(ConfigError::invalid_value(
                "principles",
                "at least one principle is required",
            ));
        }

        if !LOG_LEVELS.contains(&self.log_level.to_ascii_lowercase().as_str()) {
            return Err(ConfigError::invalid_value(
                "log_level",
                format!(
                    "'{}' is not one of {}",
                    self.log_level,
                    LOG_LEVELS.join(", ")
                ),
            ));
        }

        for (index, special) in self.specials.iter().enumerate() {
            if special.description.trim().is_empty() {
                return Err(ConfigError::invalid_value(
                    format!("specials[{index}].description"),
                    "must not be empty",
                ));
            }
            if !special.price.is_finite() || special.price < 0.0 {
                return Err(ConfigError::invalid_value(
                    format!("specials[{index}].price"),
                    format!("{} is not a valid price", special.price),
                ));
            }
        }

        Ok(())
    }

    /// `NO_COLOR` wins over the file.
    pub fn use_color(&self) -> bool {
        self.color && std::env::var_os("NO_COLOR").is_none()
    }

    pub fn special_dishes(&self) -> impl Iterator<Item = Special> + '_ {
        self.specials
            .iter()
            .map(|special| Special::new(special.description.clone(), special.price))
    }
}
