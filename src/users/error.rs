use reqwest::StatusCode;
use thiserror::Error;

/// Failures of a single upstream fetch. An upstream `404` is not one of them.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("upstream {url} responded with {status}")]
    Status { status: StatusCode, url: String },
    #[error("request to upstream failed")]
    Request(#[source] reqwest::Error),
    #[error("invalid users payload from upstream")]
    Decode(#[source] reqwest::Error),
}

impl FetchError {
    /// Upstream status code, when the failure carries one.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Request(err) | Self::Decode(err) => err.status(),
        }
    }
}
