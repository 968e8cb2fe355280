//! Strapi REST client.
//!
//! Wraps one pooled `reqwest::Client`. Every request goes to
//! `{base_url}/api{path}` with a Strapi-encoded query string.

use std::time::Duration;

use deepneurax_content::MediaResolver;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use tracing::{debug, error};

use crate::config::CmsConfig;
use crate::error::{CmsError, CmsResult};
use crate::query::encode_query;

/// Per-call request options.
#[derive(Debug, Clone, Default)]
pub struct FetchOptions {
    /// Extra headers, applied after the defaults.
    pub headers: Vec<(String, String)>,
    /// Overrides the client-wide timeout for this call.
    pub timeout: Option<Duration>,
}

impl FetchOptions {
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
            ..Default::default()
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// Client for the Strapi content API.
#[derive(Debug, Clone)]
pub struct CmsClient {
    config: CmsConfig,
    http: Client,
    media: MediaResolver,
}

impl CmsClient {
    /// Creates a client after validating `config`.
    pub fn new(config: CmsConfig) -> CmsResult<Self> {
        config.validate()?;

        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        let media = MediaResolver::new(config.origin());

        Ok(Self {
            config,
            http,
            media,
        })
    }

    /// Resolver for media URLs served by this CMS.
    pub fn media(&self) -> &MediaResolver {
        &self.media
    }

    /// Full request URL for an API path and query.
    pub fn api_url(&self, path: &str, query: &Value) -> String {
        let query_string = encode_query(query);
        if query_string.is_empty() {
            format!("{}/api{}", self.config.origin(), path)
        } else {
            format!("{}/api{}?{}", self.config.origin(), path, query_string)
        }
    }

    /// GET with default options.
    pub async fn get(&self, path: &str, query: &Value) -> CmsResult<Value> {
        self.fetch(path, query, &FetchOptions::default()).await
    }

    /// GET `path` and return the JSON body.
    ///
    /// A 404 is returned as a body (`{ "data": null }` when empty) so callers
    /// can fall back; any other non-2xx status is an error.
    pub async fn fetch(
        &self,
        path: &str,
        query: &Value,
        options: &FetchOptions,
    ) -> CmsResult<Value> {
        let url = self.api_url(path, query);
        debug!("CMS GET {}", url);

        let mut request = self.http.get(&url).header(CONTENT_TYPE, "application/json");
        if let Some(token) = &self.config.api_token {
            request = request.bearer_auth(token);
        }
        for (name, value) in &options.headers {
            request = request.header(name.as_str(), value.as_str());
        }
        if let Some(timeout) = options.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await.map_err(|e| {
            error!("Error fetching from CMS: {} ({})", e, url);
            CmsError::Http(e)
        })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            let body = response.text().await.unwrap_or_default();
            debug!("CMS returned 404 for {}", url);
            return Ok(not_found_body(&body));
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let err = CmsError::Status {
                status: status.as_u16(),
                body,
            };
            error!("{} ({})", err, url);
            return Err(err);
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

fn not_found_body(body: &str) -> Value {
    if body.trim().is_empty() {
        return json!({ "data": null });
    }
    serde_json::from_str(body).unwrap_or_else(|_| json!({ "data": null, "error": body }))
}
