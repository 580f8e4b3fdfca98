use std::fmt;
use thiserror::Error;

use crate::domains::megaverse::CreationCommand;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Required value {name} is missing")]
    Missing { name: String },

    #[error("The value for {name} is empty")]
    Empty { name: String },

    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {reason}")]
    Invalid { reason: String },
}

/// Sub-classification of a non-2xx status, used for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    NotFound,
    TooManyRequests,
    InternalServerError,
    Other,
}

impl StatusKind {
    pub fn from_code(code: u16) -> Self {
        match code {
            404 => StatusKind::NotFound,
            429 => StatusKind::TooManyRequests,
            500 => StatusKind::InternalServerError,
            _ => StatusKind::Other,
        }
    }
}

impl fmt::Display for StatusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusKind::NotFound => write!(f, "Not found. The URL may be wrong. Check the API_URL value."),
            StatusKind::TooManyRequests => write!(f, "Too Many Requests. Wait before trying again."),
            StatusKind::InternalServerError => {
                write!(f, "Internal Server Error. Check the CANDIDATE_ID value.")
            }
            StatusKind::Other => write!(f, "HTTP error occurred."),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("{code} {kind}")]
    HttpStatus { code: u16, kind: StatusKind },

    #[error("HTTP error occurred. No response received.")]
    NoResponse,

    #[error("The request timed out. Wait before trying again.")]
    Timeout,

    #[error("Connection error, the URL may be wrong ({0}). Check the API_URL value.")]
    Connection(String),

    #[error("Invalid URL ({0}). Make sure API_URL holds a full URL.")]
    InvalidUrl(String),

    #[error("Unexpected error occurred: {0}")]
    Unexpected(String),

    #[error("Maximum retry attempts reached ({attempts})")]
    MaxRetriesExceeded { attempts: u32 },
}

impl ApiError {
    pub fn from_status(code: u16) -> Self {
        ApiError::HttpStatus {
            code,
            kind: StatusKind::from_code(code),
        }
    }

    pub fn is_rate_limited(&self) -> bool {
        matches!(
            self,
            ApiError::HttpStatus {
                kind: StatusKind::TooManyRequests,
                ..
            }
        )
    }
}

/// A creation request that failed while replaying the command list.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Replay halted at command #{index} ({command}): {source}")]
pub struct ReplayError {
    pub index: usize,
    pub command: CreationCommand,
    #[source]
    pub source: ApiError,
}

#[derive(Error, Debug)]
pub enum MegaverseError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to fetch goal map: {0}")]
    Fetch(#[source] ApiError),

    #[error(transparent)]
    Replay(#[from] ReplayError),
}

pub type ApiResult<T> = Result<T, ApiError>;
pub type ConfigResult<T> = Result<T, ConfigError>;
pub type MegaverseResult<T> = Result<T, MegaverseError>;
