//! Preview URL computation for the CMS admin panel.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::content_type::ContentTypeId;
use crate::error::{PreviewError, PreviewResult};
use crate::routes::{lookup, resolve_preview_path, PreviewDocument, PreviewRequest};
use crate::store::{DocumentStore, PreviewContext};

/// Preview settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewConfig {
    /// Public site origin the preview path is appended to.
    pub site_url: String,
    /// Upper bound on the document fetch, in milliseconds. Preview is an
    /// interactive action, so there is no retry.
    pub fetch_timeout_ms: u64,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            site_url: "http://localhost:3000".to_string(),
            fetch_timeout_ms: 5_000,
        }
    }
}

impl PreviewConfig {
    pub fn validate(&self) -> PreviewResult<()> {
        if !(self.site_url.starts_with("http://") || self.site_url.starts_with("https://")) {
            return Err(PreviewError::InvalidConfig(format!(
                "site URL must start with http:// or https://, got {:?}",
                self.site_url
            )));
        }
        if self.fetch_timeout_ms == 0 {
            return Err(PreviewError::InvalidConfig(
                "preview fetch timeout must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_millis(self.fetch_timeout_ms)
    }
}

/// Computes preview URLs, fetching the document before resolving its route.
#[derive(Clone)]
pub struct PreviewService {
    config: PreviewConfig,
    store: Arc<dyn DocumentStore>,
}

impl PreviewService {
    pub fn new(config: PreviewConfig, store: Arc<dyn DocumentStore>) -> PreviewResult<Self> {
        config.validate()?;
        Ok(Self { config, store })
    }

    /// The absolute preview URL, or `None` to disable the preview button.
    ///
    /// Never fails: fetch errors and timeouts are logged and reported as
    /// "no preview".
    pub async fn preview_url(
        &self,
        content_type: &ContentTypeId,
        context: &PreviewContext,
    ) -> Option<String> {
        match self.preview_path(content_type, context).await {
            Ok(Some(path)) => Some(format!(
                "{}{}",
                self.config.site_url.trim_end_matches('/'),
                path
            )),
            Ok(None) => None,
            Err(err) => {
                warn!(
                    "Preview handler error for {} {}: {}",
                    content_type, context.document_id, err
                );
                None
            }
        }
    }

    /// The site-relative preview path.
    ///
    /// Unknown content types return `Ok(None)` without touching the store.
    /// Every other type fetches the document first, so a missing document
    /// has no preview even when its route ignores the slug.
    pub async fn preview_path(
        &self,
        content_type: &ContentTypeId,
        context: &PreviewContext,
    ) -> PreviewResult<Option<String>> {
        if lookup(content_type).is_none() {
            debug!("Preview unavailable for content type {}", content_type);
            return Ok(None);
        }

        let document = self.fetch_document(content_type, context).await?;

        let request = PreviewRequest {
            locale: context.locale.as_deref(),
            document: &document,
        };
        Ok(resolve_preview_path(content_type, &request))
    }

    async fn fetch_document(
        &self,
        content_type: &ContentTypeId,
        context: &PreviewContext,
    ) -> PreviewResult<PreviewDocument> {
        let limit = self.config.fetch_timeout();
        tokio::time::timeout(limit, self.store.find_one(content_type, context))
            .await
            .map_err(|_| PreviewError::Timeout(limit))?
    }
}
