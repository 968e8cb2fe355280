use std::sync::Arc;

use deepneurax_cms::{CmsClient, CmsConfig};
use deepneurax_preview::{CmsDocumentStore, PreviewConfig, PreviewService};
use deepneurax_server::{build_router, AppState, HealthResponse, PreviewUrlResponse};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_state(cms_url: &str) -> Arc<AppState> {
    let cms = CmsClient::new(CmsConfig::new(cms_url)).unwrap();
    let preview = PreviewService::new(
        PreviewConfig {
            site_url: "https://deepneurax.ai".to_string(),
            ..Default::default()
        },
        Arc::new(CmsDocumentStore::new(cms.clone())),
    )
    .unwrap();
    Arc::new(AppState { cms, preview })
}

/// Spin up the HTTP server on an OS-assigned port, returning the base URL.
async fn spawn_test_server(cms: &MockServer) -> String {
    let app = build_router(test_state(&cms.uri()));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://127.0.0.1:{}", port)
}

#[tokio::test]
async fn health_endpoint_returns_ok() {
    let cms = MockServer::start().await;
    let base = spawn_test_server(&cms).await;
    let resp = reqwest::get(format!("{}/api/v1/health", base))
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    let content_type = resp.headers().get("content-type").unwrap().to_str().unwrap();
    assert!(content_type.contains("application/json"));

    let body: HealthResponse = resp.json().await.unwrap();
    assert_eq!(body.status, "ok");
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let cms = MockServer::start().await;
    let base = spawn_test_server(&cms).await;
    let resp = reqwest::get(format!("{}/api/v1/nonexistent", base))
        .await
        .unwrap();

    assert_eq!(resp.status(), 404);
}

// ── Preview ──────────────────────────────────────────────────────

#[tokio::test]
async fn preview_blog_post_url() {
    let cms = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/blog-posts/doc-9"))
        .and(query_param("status", "draft"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"id": 9, "documentId": "doc-9", "slug": "agents-in-production"}
        })))
        .mount(&cms)
        .await;

    let base = spawn_test_server(&cms).await;
    let resp = reqwest::get(format!(
        "{}/api/v1/preview?uid=api::blog-post.blog-post&documentId=doc-9&locale=en&status=draft",
        base
    ))
    .await
    .unwrap();

    assert_eq!(resp.status(), 200);
    let body: PreviewUrlResponse = resp.json().await.unwrap();
    assert_eq!(
        body.url.as_deref(),
        Some("https://deepneurax.ai/blog/agents-in-production")
    );
}

#[tokio::test]
async fn preview_homepage_section() {
    let cms = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/hero"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"id": 1, "documentId": "h1", "title": "Welcome"}
        })))
        .expect(1)
        .mount(&cms)
        .await;

    let base = spawn_test_server(&cms).await;
    let resp = reqwest::get(format!("{}/api/v1/preview?uid=api::hero.hero&documentId=h1", base))
        .await
        .unwrap();

    let body: PreviewUrlResponse = resp.json().await.unwrap();
    assert_eq!(body.url.as_deref(), Some("https://deepneurax.ai/"));
}

#[tokio::test]
async fn preview_homepage_section_without_document_is_null() {
    let cms = MockServer::start().await;
    let base = spawn_test_server(&cms).await;
    let resp = reqwest::get(format!("{}/api/v1/preview?uid=api::hero.hero&documentId=gone", base))
        .await
        .unwrap();

    let body: PreviewUrlResponse = resp.json().await.unwrap();
    assert_eq!(body.url, None);
}

#[tokio::test]
async fn preview_unknown_type_is_null() {
    let cms = MockServer::start().await;
    let base = spawn_test_server(&cms).await;
    let resp = reqwest::get(format!(
        "{}/api/v1/preview?uid=api::about-us.about-us&documentId=x",
        base
    ))
    .await
    .unwrap();

    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "url": null }));
}

#[tokio::test]
async fn preview_cms_failure_is_null() {
    let cms = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/case-studies/x"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&cms)
        .await;

    let base = spawn_test_server(&cms).await;
    let resp = reqwest::get(format!("{}/api/v1/preview?uid=case-study&documentId=x", base))
        .await
        .unwrap();

    let body: PreviewUrlResponse = resp.json().await.unwrap();
    assert_eq!(body.url, None);
}

#[tokio::test]
async fn preview_without_uid_is_rejected() {
    let cms = MockServer::start().await;
    let base = spawn_test_server(&cms).await;
    let resp = reqwest::get(format!("{}/api/v1/preview?documentId=x", base))
        .await
        .unwrap();

    assert_eq!(resp.status(), 400);
}

// ── Pages ────────────────────────────────────────────────────────

#[tokio::test]
async fn blog_post_page() {
    let cms = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/blog-posts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{
                "id": 3,
                "attributes": {
                    "title": "Hello",
                    "slug": "hello",
                    "tags": ["ai", "ops"],
                    "coverImage": {"data": {"id": 1, "attributes": {"url": "/uploads/cover.png"}}}
                }
            }]
        })))
        .mount(&cms)
        .await;

    let base = spawn_test_server(&cms).await;
    let resp = reqwest::get(format!("{}/api/v1/pages/blog/hello", base))
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["title"], "Hello");
    assert_eq!(body["tags"], json!(["ai", "ops"]));
    assert_eq!(
        body["coverImage"]["asset"]["url"],
        format!("{}/uploads/cover.png", cms.uri())
    );
}

#[tokio::test]
async fn missing_blog_post_returns_404() {
    let cms = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/blog-posts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .mount(&cms)
        .await;

    let base = spawn_test_server(&cms).await;
    let resp = reqwest::get(format!("{}/api/v1/pages/blog/nope", base))
        .await
        .unwrap();

    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn home_page_tolerates_missing_sections() {
    let cms = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/hero"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"id": 1, "title": "Intelligence, deployed"}
        })))
        .mount(&cms)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/services"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&cms)
        .await;

    let base = spawn_test_server(&cms).await;
    let resp = reqwest::get(format!("{}/api/v1/pages/home", base))
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["hero"]["title"], "Intelligence, deployed");
    assert_eq!(body["services"], json!([]));
    assert_eq!(body["cta"], Value::Null);
}

#[tokio::test]
async fn layout_page_is_empty_when_any_section_fails() {
    let cms = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/services"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": 1, "title": "Consulting"}]
        })))
        .mount(&cms)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&cms)
        .await;

    let base = spawn_test_server(&cms).await;
    let resp = reqwest::get(format!("{}/api/v1/pages/layout", base))
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["footer"], Value::Null);
    assert_eq!(body["services"], json!([]));
    assert_eq!(body["products"], json!([]));
}
