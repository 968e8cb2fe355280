//! Page-data loaders.
//!
//! Each loader fetches the sections a page needs, normalizes them and
//! resolves media so the presentation layer receives one fixed shape.
//! A failing section never fails the page: it falls back to `None` or an
//! empty list.

mod blog;
mod home;

pub use blog::{load_blog_post, load_layout, BlogPost, LayoutData};
pub use home::{
    load_home_page, AboutUs, CaseStudiesSection, CoreValue, FeaturesShowcase, HomePage,
    ShowcaseImage, ShowcaseItem, SphereShowcase,
};

use deepneurax_content::{MediaResolver, NormalizedEntity};
use serde_json::Value;
use tracing::warn;

use crate::client::CmsClient;

/// Fetches `path`, logging and substituting `fallback` on failure.
async fn fetch_or(client: &CmsClient, path: &str, query: Value, fallback: Value) -> Value {
    match client.get(path, &query).await {
        Ok(body) => body,
        Err(err) if err.is_timeout() => {
            warn!("Timed out fetching {}", path);
            fallback
        }
        Err(err) => {
            warn!("Failed to fetch {}: {}", path, err);
            fallback
        }
    }
}

/// A string field, or `default` when missing or empty.
fn text_or(entity: &NormalizedEntity, key: &str, default: &str) -> String {
    entity
        .get_str(key)
        .filter(|s| !s.is_empty())
        .unwrap_or(default)
        .to_string()
}

fn optional_text(entity: &NormalizedEntity, key: &str) -> Option<String> {
    entity.get_str(key).map(str::to_string)
}

/// The CMS `order` field; missing or non-numeric sorts as 0.
fn order_of(entity: &NormalizedEntity) -> f64 {
    entity.get_number("order").unwrap_or(0.0)
}

fn sort_by_order(entities: &mut [NormalizedEntity]) {
    entities.sort_by(|a, b| order_of(a).total_cmp(&order_of(b)));
}

/// Footer with both logo variants resolved.
fn shape_footer(media: &MediaResolver, body: &Value) -> Option<NormalizedEntity> {
    let mut footer = deepneurax_content::normalize_entity(&body["data"])?;
    media.resolve_field(&mut footer, "siteLogo");
    media.resolve_field(&mut footer, "siteLogoLight");
    Some(footer)
}
