use deepneurax_content::{normalize_collection, NormalizedEntity, ResolvedMedia};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{debug, warn};

use super::{optional_text, shape_footer};
use crate::client::CmsClient;
use crate::error::CmsResult;

/// A single blog post as the detail page renders it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub title: String,
    pub slug: String,
    pub published_at: Option<String>,
    pub excerpt: Option<String>,
    pub cover_image: Option<ResolvedMedia>,
    pub tags: Vec<String>,
    pub content: Option<String>,
    pub author: Option<String>,
}

/// Header/footer data shared by every page outside the landing page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LayoutData {
    pub footer: Option<NormalizedEntity>,
    pub services: Vec<NormalizedEntity>,
    pub products: Vec<NormalizedEntity>,
}

/// Loads the post with `slug`. Missing posts and CMS failures both yield `None`.
pub async fn load_blog_post(client: &CmsClient, slug: &str) -> Option<BlogPost> {
    let query = json!({
        "filters": { "slug": { "$eq": slug } },
        "populate": "*",
        "pagination": { "limit": 1 },
    });

    let body = match client.get("/blog-posts", &query).await {
        Ok(body) => body,
        Err(err) => {
            warn!("Error fetching blog post {}: {}", slug, err);
            return None;
        }
    };

    let Some(post) = normalize_collection(&body["data"]).into_iter().next() else {
        debug!("No blog post with slug {}", slug);
        return None;
    };

    Some(BlogPost {
        title: post.get_str("title").unwrap_or_default().to_string(),
        slug: post.get_str("slug").unwrap_or(slug).to_string(),
        published_at: optional_text(&post, "publishedAt"),
        excerpt: optional_text(&post, "excerpt"),
        cover_image: post.get("coverImage").and_then(|c| client.media().resolve(c)),
        tags: post
            .get("tags")
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .filter_map(|tag| tag.as_str().map(str::to_string))
            .collect(),
        content: optional_text(&post, "content"),
        author: optional_text(&post, "author"),
    })
}

/// Loads footer, services and products together.
///
/// These feed the header navigation, so they are all-or-nothing: any failure
/// returns the empty layout.
pub async fn load_layout(client: &CmsClient) -> LayoutData {
    match try_load_layout(client).await {
        Ok(layout) => layout,
        Err(err) => {
            warn!("Error fetching layout data: {}", err);
            LayoutData::default()
        }
    }
}

async fn try_load_layout(client: &CmsClient) -> CmsResult<LayoutData> {
    let footer_query = json!({ "populate": "*" });
    let list_query = json!({ "sort": "order:asc" });

    let (footer, services, products) = tokio::try_join!(
        client.get("/footer", &footer_query),
        client.get("/services", &list_query),
        client.get("/products", &list_query),
    )?;

    Ok(LayoutData {
        footer: shape_footer(client.media(), &footer),
        services: normalize_collection(&services["data"]),
        products: normalize_collection(&products["data"]),
    })
}
