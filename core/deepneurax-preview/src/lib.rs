//! Preview URLs for the CMS admin panel.
//!
//! When an editor presses "preview", the admin asks where the document is
//! rendered on the site. This crate answers with:
//! - [`resolve_preview_path`]: a pure lookup from content type and document
//!   to a site-relative path
//! - [`PreviewService`]: fetches the document (bounded timeout, no retry)
//!   and returns the absolute URL
//!
//! Every failure degrades to "no preview"; nothing is surfaced to the admin.

mod content_type;
mod error;
mod routes;
mod service;
mod store;

pub use content_type::ContentTypeId;
pub use error::{PreviewError, PreviewResult};
pub use routes::{
    lookup, resolve_preview_path, ApiEndpoint, ContentTypeRoute, PreviewDocument, PreviewRequest,
    PreviewRoute, CONTENT_TYPE_ROUTES,
};
pub use service::{PreviewConfig, PreviewService};
pub use store::{CmsDocumentStore, DocumentStore, PreviewContext};
