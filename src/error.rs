//! Error types shared by the config loader, the tenant client and the
//! browser launcher.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, NavigatorError>;

#[derive(Error, Debug)]
pub enum NavigatorError {
    // ─────────────────────────────────────────────────────────────
    // Configuration
    // ─────────────────────────────────────────────────────────────
    #[error("error reading configuration {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error parsing configuration {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("configuration file not found (searched: {searched})")]
    ConfigNotFound { searched: String },

    #[error("mandatory configuration parameters were not provided: {missing}")]
    MissingParams { missing: String },

    #[error("error parsing {param}: {source}")]
    InvalidUrl {
        param: String,
        #[source]
        source: url::ParseError,
    },

    // ─────────────────────────────────────────────────────────────
    // Tenant API
    // ─────────────────────────────────────────────────────────────
    #[error("error when calling {url}: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("error when calling {url}: {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("error decoding response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("error acquiring access token from {url}: {reason}")]
    Token { url: String, reason: String },

    // ─────────────────────────────────────────────────────────────
    // Browser
    // ─────────────────────────────────────────────────────────────
    #[error("error opening {url} in browser: {source}")]
    Browser {
        url: String,
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // Terminal program
    // ─────────────────────────────────────────────────────────────
    #[error("terminal program failed: {0}")]
    Program(String),
}
