use thiserror::Error;

/// Why a catalog fetch did not produce an item.
///
/// Payloads are plain strings so the error can sit inside UI state and be
/// cloned into views.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {reason}")]
    Transport { url: String, reason: String },

    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("unreadable response from {url}: {reason}")]
    Decode { url: String, reason: String },

    #[error("the catalog listing came back empty")]
    EmptyCatalog,

    #[error("catalog entry '{name}' has no image")]
    MissingImage { name: String },
}

impl FetchError {
    pub fn transport(url: &str, reason: impl ToString) -> Self {
        FetchError::Transport {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn decode(url: &str, reason: impl ToString) -> Self {
        FetchError::Decode {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }
}
