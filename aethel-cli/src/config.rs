use std::fs::read_to_string;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use aethel_chrono::consts::DEFAULT_GRAVITY;

pub const DEFAULT_SPECIES: &str = "Woolly Mammoth";
pub const DEFAULT_FRAGMENT: &str = "ATGCCGTAGCTAA";
pub const DEFAULT_TARGET: &str = "AT";
pub const DEFAULT_PROTEIN: &str = "HPHPPHH";

///
/// Default inputs for the dashboard commands, read from a TOML file.
///
/// ```toml
/// species = "Dodo Bird"
/// fragment = "ATGCGGTA"
/// gravity = 4.5
/// target = "CG"
/// protein = "HPHPH"
/// ```
///
/// Every key is optional. Flags given on the command line take precedence.
///
#[derive(Deserialize, Serialize, Debug, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DashboardConfig {
    pub species: Option<String>,
    pub fragment: Option<String>,
    pub gravity: Option<f64>,
    pub target: Option<String>,
    pub protein: Option<String>,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Gravity must be a finite, non-negative number, got {0}")]
    InvalidGravity(f64),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

impl DashboardConfig {
    pub fn from_path(path: &Path) -> ConfigResult<Self> {
        let raw = read_to_string(path)?;
        let config: DashboardConfig = toml::from_str(&raw)?;
        if let Some(gravity) = config.gravity {
            validate_gravity(gravity)?;
        }
        Ok(config)
    }

    /// Read the config at `path`, or fall back to built-in defaults.
    pub fn load(path: Option<&Path>) -> ConfigResult<Self> {
        match path {
            Some(path) => DashboardConfig::from_path(path),
            None => Ok(DashboardConfig::default()),
        }
    }

    pub fn species(&self) -> &str {
        self.species.as_deref().unwrap_or(DEFAULT_SPECIES)
    }

    pub fn fragment(&self) -> &str {
        self.fragment.as_deref().unwrap_or(DEFAULT_FRAGMENT)
    }

    pub fn gravity(&self) -> f64 {
        self.gravity.unwrap_or(DEFAULT_GRAVITY)
    }

    pub fn target(&self) -> &str {
        self.target.as_deref().unwrap_or(DEFAULT_TARGET)
    }

    pub fn protein(&self) -> &str {
        self.protein.as_deref().unwrap_or(DEFAULT_PROTEIN)
    }
}

pub fn validate_gravity(gravity: f64) -> ConfigResult<f64> {
    if gravity.is_finite() && gravity >= 0.0 {
        Ok(gravity)
    } else {
        Err(ConfigError::InvalidGravity(gravity))
    }
}

/// clap value parser for `--gravity`.
pub fn parse_gravity(raw: &str) -> Result<f64, String> {
    let gravity: f64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", raw))?;
    validate_gravity(gravity).map_err(|e| e.to_string())
}
