//! Content type → site route table.
//!
//! One static table drives both where a content type previews on the site
//! and where its documents live in the CMS API. Adding a content type means
//! adding one row.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::content_type::ContentTypeId;

/// Where a content type previews on the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewRoute {
    /// Always the same page, whatever the document says.
    Fixed(&'static str),
    /// `{listing}/{slug}`, or the bare listing page when the slug is empty.
    SlugBased { listing: &'static str },
}

impl PreviewRoute {
    pub fn path_for(&self, document: &PreviewDocument) -> String {
        match *self {
            PreviewRoute::Fixed(path) => path.to_string(),
            PreviewRoute::SlugBased { listing } => match document.slug() {
                Some(slug) => format!("{listing}/{slug}"),
                None => listing.to_string(),
            },
        }
    }
}

/// Where documents of a content type are read from the CMS API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiEndpoint {
    /// Single type: `/api/{path}`.
    Single(&'static str),
    /// Collection type: `/api/{path}/{documentId}`.
    Collection(&'static str),
}

/// One row of the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentTypeRoute {
    pub id: &'static str,
    pub endpoint: ApiEndpoint,
    pub route: PreviewRoute,
}

const HOME: PreviewRoute = PreviewRoute::Fixed("/");

const fn homepage(id: &'static str, endpoint: ApiEndpoint) -> ContentTypeRoute {
    ContentTypeRoute {
        id,
        endpoint,
        route: HOME,
    }
}

const fn detail_page(
    id: &'static str,
    plural: &'static str,
    listing: &'static str,
) -> ContentTypeRoute {
    ContentTypeRoute {
        id,
        endpoint: ApiEndpoint::Collection(plural),
        route: PreviewRoute::SlugBased { listing },
    }
}

/// Content types with a preview. Sections without a page of their own
/// (services, products, features, metrics, testimonials) preview on the
/// homepage where they are rendered inline.
pub const CONTENT_TYPE_ROUTES: &[ContentTypeRoute] = &[
    homepage("hero", ApiEndpoint::Single("hero")),
    homepage("footer", ApiEndpoint::Single("footer")),
    homepage("cta", ApiEndpoint::Single("cta")),
    homepage("service", ApiEndpoint::Collection("services")),
    homepage("product", ApiEndpoint::Collection("products")),
    homepage("feature", ApiEndpoint::Collection("features")),
    homepage("metric", ApiEndpoint::Collection("metrics")),
    homepage("testimonial", ApiEndpoint::Collection("testimonials")),
    detail_page("blog-post", "blog-posts", "/blog"),
    detail_page("case-study", "case-studies", "/case-studies"),
];

/// Finds the table row for `content_type`.
pub fn lookup(content_type: &ContentTypeId) -> Option<&'static ContentTypeRoute> {
    CONTENT_TYPE_ROUTES
        .iter()
        .find(|entry| entry.id == content_type.as_str())
}

/// The document fields preview routing reads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewDocument {
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

impl PreviewDocument {
    pub fn with_slug(slug: impl Into<String>) -> Self {
        Self {
            slug: Some(slug.into()),
            title: None,
        }
    }

    /// The slug if present and non-blank.
    pub fn slug(&self) -> Option<&str> {
        self.slug.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }
}

/// Input to [`resolve_preview_path`].
#[derive(Debug, Clone, Copy)]
pub struct PreviewRequest<'a> {
    /// Accepted but not used yet; locale-aware routing would prefix the path.
    pub locale: Option<&'a str>,
    pub document: &'a PreviewDocument,
}

/// Computes the site-relative preview path, or `None` when the content type
/// has no preview page.
pub fn resolve_preview_path(
    content_type: &ContentTypeId,
    request: &PreviewRequest<'_>,
) -> Option<String> {
    let Some(entry) = lookup(content_type) else {
        debug!("No preview route for content type {}", content_type);
        return None;
    };
    Some(entry.route.path_for(request.document))
}
