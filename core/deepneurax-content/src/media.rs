use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::entity::NormalizedEntity;
use crate::shape::{unwrap_entity, ListPolicy};

const URL_KEY: &str = "url";

/// A media field after resolution: `{ "asset": { "url": "<absolute>" } }`.
///
/// Page code only ever sees this shape or `null`, whatever the CMS sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedMedia {
    pub asset: MediaAsset,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaAsset {
    pub url: String,
}

impl ResolvedMedia {
    pub fn url(&self) -> &str {
        &self.asset.url
    }

    pub fn into_url(self) -> String {
        self.asset.url
    }
}

/// Whether `url` is already fully qualified (`http://`, `https://` or
/// protocol-relative `//`).
pub fn is_absolute_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://") || url.starts_with("//")
}

/// Turns CMS media references into absolute URLs.
///
/// Relative upload paths are joined onto the CMS origin; externally hosted
/// assets (CDN, cloud upload providers) are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaResolver {
    origin: String,
}

impl MediaResolver {
    /// `origin` is the CMS base URL, e.g. `http://localhost:1337`. Trailing
    /// slashes are dropped.
    pub fn new(origin: impl Into<String>) -> Self {
        let origin = origin.into();
        Self {
            origin: origin.trim_end_matches('/').to_string(),
        }
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Resolves a bare URL string. Empty strings yield `None`.
    pub fn resolve_url(&self, url: &str) -> Option<String> {
        if url.is_empty() {
            return None;
        }
        if is_absolute_url(url) {
            return Some(url.to_string());
        }
        Some(format!("{}/{}", self.origin, url.trim_start_matches('/')))
    }

    /// Resolves a media field in any accepted shape.
    ///
    /// `data` is followed (first element of a list), then `attributes`, then
    /// `url` is read. Anything missing along the way yields `None`.
    pub fn resolve(&self, field: &Value) -> Option<ResolvedMedia> {
        let fields = unwrap_entity(field, ListPolicy::First)?.fields()?;
        let url = fields.get(URL_KEY)?.as_str()?;
        self.resolve_url(url).map(|url| ResolvedMedia {
            asset: MediaAsset { url },
        })
    }

    /// Like [`resolve`](Self::resolve) but for list-valued media fields:
    /// every element is resolved and failures are dropped.
    pub fn resolve_all(&self, field: &Value) -> Vec<ResolvedMedia> {
        crate::normalize_collection(field)
            .into_iter()
            .filter_map(|media| self.resolve(&media.into_value()))
            .collect()
    }

    /// Replaces `entity[key]` with its resolved form, or `null`.
    ///
    /// The key is always present afterwards, matching what page code expects.
    pub fn resolve_field(&self, entity: &mut NormalizedEntity, key: &str) {
        let resolved = entity
            .get(key)
            .and_then(|field| self.resolve(field))
            .and_then(|media| serde_json::to_value(media).ok())
            .unwrap_or(Value::Null);
        entity.insert(key, resolved);
    }
}
