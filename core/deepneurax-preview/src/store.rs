//! Document lookup for preview resolution.

use async_trait::async_trait;
use deepneurax_cms::CmsClient;
use deepneurax_content::normalize_entity;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::content_type::ContentTypeId;
use crate::error::{PreviewError, PreviewResult};
use crate::routes::{lookup, ApiEndpoint, PreviewDocument};

/// What the admin panel sends when the preview button is pressed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewContext {
    pub document_id: String,
    #[serde(default)]
    pub locale: Option<String>,
    /// `draft` or `published`.
    #[serde(default)]
    pub status: Option<String>,
}

impl PreviewContext {
    pub fn new(document_id: impl Into<String>) -> Self {
        Self {
            document_id: document_id.into(),
            ..Default::default()
        }
    }
}

/// Source of documents for preview routing.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetches the document `context.document_id` of `content_type`.
    async fn find_one(
        &self,
        content_type: &ContentTypeId,
        context: &PreviewContext,
    ) -> PreviewResult<PreviewDocument>;
}

/// [`DocumentStore`] backed by the CMS REST API.
#[derive(Debug, Clone)]
pub struct CmsDocumentStore {
    client: CmsClient,
}

impl CmsDocumentStore {
    pub fn new(client: CmsClient) -> Self {
        Self { client }
    }

    /// API path of the document, or `None` for types without a route.
    pub fn document_path(content_type: &ContentTypeId, document_id: &str) -> Option<String> {
        let path = match lookup(content_type)?.endpoint {
            ApiEndpoint::Single(path) => format!("/{path}"),
            ApiEndpoint::Collection(path) => {
                format!("/{path}/{}", urlencoding::encode(document_id))
            }
        };
        Some(path)
    }
}

#[async_trait]
impl DocumentStore for CmsDocumentStore {
    async fn find_one(
        &self,
        content_type: &ContentTypeId,
        context: &PreviewContext,
    ) -> PreviewResult<PreviewDocument> {
        let path = Self::document_path(content_type, &context.document_id)
            .ok_or_else(|| PreviewError::UnsupportedContentType(content_type.to_string()))?;

        let mut query = Map::new();
        if let Some(status) = &context.status {
            query.insert("status".to_string(), Value::String(status.clone()));
        }
        if let Some(locale) = &context.locale {
            query.insert("locale".to_string(), Value::String(locale.clone()));
        }

        debug!("Fetching preview document {} {}", content_type, context.document_id);
        let body = self.client.get(&path, &Value::Object(query)).await?;

        let entity = normalize_entity(&body["data"]).ok_or_else(|| {
            PreviewError::NotFound(format!("{} {}", content_type, context.document_id))
        })?;

        Ok(PreviewDocument {
            slug: entity.get_str("slug").map(str::to_string),
            title: entity.get_str("title").map(str::to_string),
        })
    }
}
