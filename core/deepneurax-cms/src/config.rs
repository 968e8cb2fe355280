use serde::{Deserialize, Serialize};

use crate::error::{CmsError, CmsResult};

/// Connection settings for the Strapi CMS.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CmsConfig {
    /// CMS origin without the `/api` suffix (e.g. `http://localhost:1337`).
    pub base_url: String,
    /// Read-only API token, sent as a bearer token when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_token: Option<String>,
    /// Overall timeout for a single request, in seconds.
    pub timeout_secs: u64,
}

impl Default for CmsConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:1337".to_string(),
            api_token: None,
            timeout_secs: 30,
        }
    }
}

impl CmsConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        let token = token.into();
        self.api_token = (!token.is_empty()).then_some(token);
        self
    }

    /// Media URLs are built on `base_url`, so it has to be absolute.
    pub fn validate(&self) -> CmsResult<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(CmsError::InvalidConfig(format!(
                "CMS base URL must start with http:// or https://, got {:?}",
                self.base_url
            )));
        }
        if self.timeout_secs == 0 {
            return Err(CmsError::InvalidConfig("CMS timeout must be non-zero".to_string()));
        }
        Ok(())
    }

    /// The base URL without trailing slashes.
    pub fn origin(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}
