use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The request never produced a response: connect, DNS or timeout failure.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status. `body` is the raw
    /// response text, e.g. "Invalid State Code".
    #[error("service returned {status}: {body}")]
    Service { status: StatusCode, body: String },

    #[error("cannot decode address result: {source}; body: {body}")]
    Decode {
        #[source]
        source: serde_json::Error,
        body: String,
    },

    #[error("invalid base url [{url}]: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("invalid timeout [{0}]: expected a whole number of seconds")]
    InvalidTimeout(String),

    #[error("cannot build http client: {0}")]
    Build(#[source] reqwest::Error),
}

impl Error {
    /// the service's message text, if the failure came from the service
    pub fn service_body(&self) -> Option<&str> {
        match self {
            Error::Service { body, .. } => Some(body),
            _ => None,
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Service { status, .. } => Some(*status),
            Error::Transport(e) => e.status(),
            _ => None,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }
}
