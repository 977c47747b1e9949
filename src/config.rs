use std::{
    fs::File,
    io::{self, BufReader, Read},
    path::{Path, PathBuf},
};

use log::info;
use log::warn;
use serde::Deserialize;
use thiserror::Error;

use crate::mapper::CoordinateMapper;

pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Side length of the data space.
    pub extent: f64,
    /// Canvas side as a fraction of the smaller window dimension.
    pub canvas_relative_size: f64,
    pub export_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            extent: 100.0,
            canvas_relative_size: 0.5,
            export_dir: PathBuf::from("."),
        }
    }
}

impl Config {
    pub fn load() -> Result<Config, ConfigLoadError> {
        Self::load_from(DEFAULT_CONFIG_PATH)
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Config, ConfigLoadError> {
        let mut s = String::new();
        BufReader::new(File::open(path.as_ref())?).read_to_string(&mut s)?;
        let config: Config = toml::from_str(&s)?;
        config.validate()?;
        info!("Loaded config from {}", path.as_ref().display());
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigLoadError> {
        for (key, value) in [
            ("extent", self.extent),
            ("canvas_relative_size", self.canvas_relative_size),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigLoadError::NonPositiveValue { key, value });
            }
        }
        Ok(())
    }

    /// Like [`Self::load_from`], but a missing file yields the defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Config, ConfigLoadError> {
        match Self::load_from(path.as_ref()) {
            Err(ConfigLoadError::IOError(e)) if e.kind() == io::ErrorKind::NotFound => {
                warn!(
                    "{} not found, using default config",
                    path.as_ref().display()
                );
                Ok(Config::default())
            }
            res => res,
        }
    }

    pub fn mapper(&self) -> CoordinateMapper {
        CoordinateMapper::new(self.extent)
    }
}

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("{0}")]
    IOError(#[from] std::io::Error),
    #[error("{0}")]
    IllegalConfigEntry(#[from] toml::de::Error),
    #[error("{key} must be a positive number, got {value}")]
    NonPositiveValue { key: &'static str, value: f64 },
}
