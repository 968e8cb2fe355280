//! CMS client error types.

use thiserror::Error;

/// Result type for CMS operations.
pub type CmsResult<T> = Result<T, CmsError>;

/// Errors that can occur talking to the CMS.
///
/// A 404 is not an error: the client hands back a `{ "data": null }` body
/// so callers can fall back gracefully.
#[derive(Debug, Error)]
pub enum CmsError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("CMS request failed: {status} {body}")]
    Status { status: u16, body: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl CmsError {
    /// Returns the HTTP status if the CMS answered with one.
    pub fn status(&self) -> Option<u16> {
        match self {
            CmsError::Status { status, .. } => Some(*status),
            CmsError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns true if the request never got an answer in time.
    pub fn is_timeout(&self) -> bool {
        matches!(self, CmsError::Http(e) if e.is_timeout())
    }
}
