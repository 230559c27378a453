use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::geodetic::GeodeticCoordinate;
use crate::look_angle::LookAngleOptions;

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub ground: GroundConfig,
    pub observer: ObserverConfig,
    pub options: LookAngleOptions,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct GroundConfig {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ObserverConfig {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,
}

impl Default for GroundConfig {
    fn default() -> Self {
        Self {
            latitude: 40.0,
            longitude: 75.0,
            altitude: 0.0,
        }
    }
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self {
            latitude: 40.0,
            longitude: 74.0,
            altitude: 0.0,
        }
    }
}

impl GroundConfig {
    pub fn coordinate(&self) -> GeodeticCoordinate {
        GeodeticCoordinate::new(self.latitude, self.longitude, self.altitude)
    }
}

impl ObserverConfig {
    pub fn coordinate(&self) -> GeodeticCoordinate {
        GeodeticCoordinate::new(self.latitude, self.longitude, self.altitude)
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// `<config dir>/lookangle/config.toml` for the current platform.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("lookangle").join("config.toml"))
    }

    /// Loads the platform config file if one exists, otherwise the built-in defaults.
    ///
    /// A file that exists but cannot be loaded is reported and skipped.
    pub fn load_default() -> Self {
        let Some(path) = Self::default_path() else {
            return Self::default();
        };
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::load(&path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{:#}, using defaults", anyhow::Error::from(e));
                Self::default()
            }
        }
    }
}
