//! Error types for preview resolution.

use std::time::Duration;

use deepneurax_cms::CmsError;
use thiserror::Error;

/// Result type for preview operations.
pub type PreviewResult<T> = Result<T, PreviewError>;

/// Errors raised while computing a preview URL.
///
/// None of these reach the admin panel: [`crate::PreviewService::preview_url`]
/// logs them and answers "no preview".
#[derive(Debug, Error)]
pub enum PreviewError {
    /// The CMS could not be queried.
    #[error("CMS error: {0}")]
    Cms(#[from] CmsError),

    /// The document does not exist (or not in the requested status/locale).
    #[error("document not found: {0}")]
    NotFound(String),

    /// The document fetch did not finish in time.
    #[error("document fetch timed out after {0:?}")]
    Timeout(Duration),

    /// The content type has no preview route.
    #[error("unsupported content type: {0}")]
    UnsupportedContentType(String),

    /// Invalid preview configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
