use thiserror::Error;
use whodat::error::FetchError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: String,
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    ConfigParse {
        path: String,
        source: serde_json::Error,
    },

    #[error("could not determine the config directory")]
    NoConfigDir,

    #[error("could not set up the HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    #[error("could not read from stdin: {0}")]
    Stdin(std::io::Error),
}

impl CliError {
    pub fn usage(msg: impl Into<String>) -> Self {
        CliError::Usage(msg.into())
    }
}
