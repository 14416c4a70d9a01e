use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("catalog request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("catalog answered {status} for {path}: {}", .message.as_deref().unwrap_or("no message"))]
    Status {
        status: u16,
        path: String,
        message: Option<String>,
    },

    #[error("invalid catalog payload from {path}: {source}")]
    Decode {
        path: String,
        source: serde_json::Error,
    },

    #[error("invalid catalog endpoint {path}: {source}")]
    Endpoint {
        path: String,
        source: url::ParseError,
    },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{name} is not a valid base URL ({value}): {source}")]
    InvalidUrl {
        name: &'static str,
        value: String,
        source: url::ParseError,
    },

    #[error("{name} must be a positive number of seconds, got {value}")]
    InvalidTimeout { name: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, CatalogError>;
