use ably_shared::error::ErrorInfo;

/// Error type for the REST client
#[derive(Debug, thiserror::Error)]
pub enum AblyError {
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("Invalid client options: {0}")]
    InvalidOptions(String),

    #[error("Unable to build http client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Request rejected: {0}")]
    Api(ErrorInfo),

    #[error("Unexpected response body: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("{0}")]
    Precondition(String),
}

impl AblyError {
    /// HTTP status reported by the service, if the request got that far.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            AblyError::Api(info) => Some(info.status_code),
            AblyError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

pub type AblyResult<T> = Result<T, AblyError>;
