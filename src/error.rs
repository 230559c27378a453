use std::num::ParseFloatError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Errors from parsing a `"lat,lon,alt"` coordinate string.
#[derive(Debug, Error)]
pub enum CoordinateParseError {
    #[error("expected 3 comma separated values (lat,lon,alt), found {0}")]
    FieldCount(usize),
    #[error("invalid {field} value {value:?}")]
    InvalidNumber {
        field: &'static str,
        value: String,
        #[source]
        source: ParseFloatError,
    },
}
