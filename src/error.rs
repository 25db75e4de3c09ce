// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Errors surfaced to the UI. Every variant carries a displayable message;
/// nothing in this application is fatal, so errors only degrade the view.
#[derive(Debug, Clone)]
pub enum Error {
    /// Network request failed (connection, TLS, HTTP status).
    Fetch(String),
    /// Response body could not be decoded into photo records.
    Decode(String),
    /// Configuration file could not be read or written.
    Config(String),
    Io(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Fetch(e) => write!(f, "Fetch Error: {}", e),
            Error::Decode(e) => write!(f, "Decode Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Io(e) => write!(f, "I/O Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Decode(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
