//! Shared state and HTTP API for the DeepNeurax site server.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use deepneurax_cms::pages::{
    load_blog_post, load_home_page, load_layout, BlogPost, HomePage, LayoutData,
};
use deepneurax_cms::CmsClient;
use deepneurax_preview::{ContentTypeId, PreviewContext, PreviewService};
use serde::{Deserialize, Serialize};

/// Immutable state shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub cms: CmsClient,
    pub preview: PreviewService,
}

/// Query string the CMS admin sends to `/api/v1/preview`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewQuery {
    /// Content type UID, e.g. `api::blog-post.blog-post`.
    pub uid: String,
    pub document_id: String,
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PreviewUrlResponse {
    pub url: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct HealthResponse {
    pub status: String,
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

async fn preview_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PreviewQuery>,
) -> Json<PreviewUrlResponse> {
    let content_type = ContentTypeId::new(&query.uid);
    let context = PreviewContext {
        document_id: query.document_id,
        locale: query.locale,
        status: query.status,
    };
    let url = state.preview.preview_url(&content_type, &context).await;
    Json(PreviewUrlResponse { url })
}

async fn home_handler(State(state): State<Arc<AppState>>) -> Json<HomePage> {
    Json(load_home_page(&state.cms).await)
}

async fn layout_handler(State(state): State<Arc<AppState>>) -> Json<LayoutData> {
    Json(load_layout(&state.cms).await)
}

async fn blog_post_handler(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<Json<BlogPost>, StatusCode> {
    load_blog_post(&state.cms, &slug)
        .await
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

/// Build the HTTP API router with the given state.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/v1/health", get(health_handler))
        .route("/api/v1/preview", get(preview_handler))
        .route("/api/v1/pages/home", get(home_handler))
        .route("/api/v1/pages/layout", get(layout_handler))
        .route("/api/v1/pages/blog/{slug}", get(blog_post_handler))
        .with_state(state)
}
