use deepneurax_content::{
    normalize_collection, normalize_entity, MediaResolver, NormalizedEntity, ResolvedMedia,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::info;

use super::{fetch_or, optional_text, shape_footer, sort_by_order, text_or};
use crate::client::CmsClient;

const DEFAULT_VIDEO_DURATION: i64 = 10;
const HOME_BLOG_POSTS: u64 = 6;

/// Everything the landing page renders.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomePage {
    pub hero: Option<NormalizedEntity>,
    pub services: Vec<NormalizedEntity>,
    pub products: Vec<NormalizedEntity>,
    pub sphere_showcase: Option<SphereShowcase>,
    pub metrics: Vec<NormalizedEntity>,
    pub about_us: Option<AboutUs>,
    pub features_showcase: Option<FeaturesShowcase>,
    pub case_studies_section: Option<CaseStudiesSection>,
    pub case_studies: Vec<NormalizedEntity>,
    pub testimonials: Vec<NormalizedEntity>,
    pub blog_posts: Vec<NormalizedEntity>,
    pub cta: Option<NormalizedEntity>,
    pub footer: Option<NormalizedEntity>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SphereShowcase {
    pub section_title: String,
    pub section_description: String,
    pub items: Vec<ShowcaseItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowcaseItem {
    pub id: Option<Value>,
    pub image: Option<String>,
    pub link: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub order: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutUs {
    pub who_we_are_heading: String,
    pub who_we_are_description: String,
    pub core_values_heading: String,
    pub core_values: Vec<CoreValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoreValue {
    pub title: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
}

/// The scroll-driven features block: intro copy plus an image strip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturesShowcase {
    pub intro_heading: Option<String>,
    pub intro_subheading: Option<String>,
    pub section_title: Option<String>,
    pub section_description: Option<String>,
    pub images: Vec<ShowcaseImage>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShowcaseImage {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseStudiesSection {
    pub title: String,
    pub description: String,
}

/// Loads every landing-page section concurrently.
///
/// Sections are fetched independently; a failure leaves that section empty
/// and the rest of the page intact.
pub async fn load_home_page(client: &CmsClient) -> HomePage {
    let single = || json!({ "data": null });
    let many = || json!({ "data": [] });
    let populated = || json!({ "populate": "*" });
    let ordered = || json!({ "populate": "*", "sort": "order:asc" });

    let (
        hero,
        services,
        products,
        sphere_showcase,
        metrics,
        about_us,
        features_section,
        case_studies_section,
        case_studies,
        testimonials,
        blog_posts,
        cta,
        footer,
    ) = tokio::join!(
        fetch_or(client, "/hero", populated(), single()),
        fetch_or(client, "/services", ordered(), many()),
        fetch_or(client, "/products", ordered(), many()),
        fetch_or(
            client,
            "/sphere-showcase",
            json!({ "populate": { "items": { "populate": "image" } } }),
            single(),
        ),
        fetch_or(client, "/metrics", ordered(), many()),
        fetch_or(
            client,
            "/about-us",
            json!({ "populate": { "coreValues": "*" } }),
            single(),
        ),
        fetch_or(
            client,
            "/features-section",
            json!({ "populate": ["images"] }),
            single(),
        ),
        fetch_or(client, "/case-studies-section", populated(), single()),
        fetch_or(client, "/case-studies", ordered(), many()),
        fetch_or(client, "/testimonials", ordered(), many()),
        fetch_or(
            client,
            "/blog-posts",
            json!({
                "populate": "*",
                "sort": "publishedAt:desc",
                "pagination": { "limit": HOME_BLOG_POSTS },
            }),
            many(),
        ),
        fetch_or(client, "/cta", populated(), single()),
        fetch_or(client, "/footer", populated(), single()),
    );

    let media = client.media();
    let page = HomePage {
        hero: shape_hero(media, &hero),
        services: with_media(media, &services, "image"),
        products: with_media(media, &products, "image"),
        sphere_showcase: shape_sphere_showcase(media, &sphere_showcase),
        metrics: normalize_collection(&metrics["data"]),
        about_us: shape_about_us(&about_us),
        features_showcase: shape_features(media, &features_section),
        case_studies_section: shape_case_studies_section(&case_studies_section),
        case_studies: shape_case_studies(media, &case_studies),
        testimonials: with_media(media, &testimonials, "avatar"),
        blog_posts: with_media(media, &blog_posts, "coverImage"),
        cta: normalize_entity(&cta["data"]),
        footer: shape_footer(media, &footer),
    };

    info!(
        "Loaded home page: {} services, {} products, {} case studies, {} blog posts",
        page.services.len(),
        page.products.len(),
        page.case_studies.len(),
        page.blog_posts.len()
    );
    page
}

/// Normalizes a collection and resolves one media field on every member.
fn with_media(media: &MediaResolver, body: &Value, field: &str) -> Vec<NormalizedEntity> {
    normalize_collection(&body["data"])
        .into_iter()
        .map(|mut entity| {
            media.resolve_field(&mut entity, field);
            entity
        })
        .collect()
}

fn media_url(media: &MediaResolver, field: Option<&Value>) -> Option<String> {
    field
        .and_then(|f| media.resolve(f))
        .map(ResolvedMedia::into_url)
}

fn shape_hero(media: &MediaResolver, body: &Value) -> Option<NormalizedEntity> {
    let mut hero = normalize_entity(&body["data"])?;
    media.resolve_field(&mut hero, "backgroundImage");

    let videos: Vec<Value> = hero
        .get("backgroundVideos")
        .and_then(Value::as_array)
        .map(|videos| {
            videos
                .iter()
                .map(|video| {
                    let node = normalize_entity(video).unwrap_or_default();
                    let thumbnail = node.get("thumbnail").and_then(|t| media.resolve(t));
                    json!({
                        "video": media_url(media, node.get("video")),
                        "videoUrl": node.get_str("videoUrl"),
                        "thumbnail": thumbnail,
                        "duration": node
                            .get("duration")
                            .filter(|d| d.as_f64().is_some_and(|d| d != 0.0))
                            .cloned()
                            .unwrap_or_else(|| json!(DEFAULT_VIDEO_DURATION)),
                    })
                })
                .collect()
        })
        .unwrap_or_default();
    hero.insert("backgroundVideos", Value::Array(videos));

    Some(hero)
}

fn shape_sphere_showcase(media: &MediaResolver, body: &Value) -> Option<SphereShowcase> {
    let showcase = normalize_entity(&body["data"])?;

    let mut items: Vec<ShowcaseItem> = showcase
        .get("items")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(|item| {
            let node = normalize_entity(item)?;
            Some(ShowcaseItem {
                id: node.id().cloned(),
                image: media_url(media, node.get("image")),
                link: text_or(&node, "link", "#"),
                title: optional_text(&node, "title"),
                description: optional_text(&node, "description"),
                order: node.get_number("order").unwrap_or(0.0),
            })
        })
        .collect();
    items.sort_by(|a, b| a.order.total_cmp(&b.order));

    Some(SphereShowcase {
        section_title: text_or(&showcase, "sectionTitle", "Explore Our Features"),
        section_description: text_or(
            &showcase,
            "sectionDescription",
            "We deliver exceptional results through innovation, expertise, and dedication",
        ),
        items,
    })
}

fn shape_about_us(body: &Value) -> Option<AboutUs> {
    let about = normalize_entity(&body["data"])?;

    let core_values = about
        .get("coreValues")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .map(|item| {
            let node = normalize_entity(item).unwrap_or_default();
            CoreValue {
                title: optional_text(&node, "title"),
                description: optional_text(&node, "description"),
                icon: optional_text(&node, "icon"),
            }
        })
        .collect();

    Some(AboutUs {
        who_we_are_heading: text_or(&about, "whoWeAreHeading", "Who We Are"),
        who_we_are_description: text_or(&about, "whoWeAreDescription", ""),
        core_values_heading: text_or(&about, "coreValuesHeading", "Our Core Values"),
        core_values,
    })
}

fn shape_features(media: &MediaResolver, body: &Value) -> Option<FeaturesShowcase> {
    let section = normalize_entity(&body["data"])?;

    let images = section
        .get("images")
        .map(|images| media.resolve_all(images))
        .unwrap_or_default()
        .into_iter()
        .map(|image| ShowcaseImage {
            url: image.into_url(),
        })
        .collect();

    Some(FeaturesShowcase {
        intro_heading: optional_text(&section, "introHeading"),
        intro_subheading: optional_text(&section, "introSubheading"),
        section_title: optional_text(&section, "sectionTitle"),
        section_description: optional_text(&section, "sectionDescription"),
        images,
    })
}

fn shape_case_studies_section(body: &Value) -> Option<CaseStudiesSection> {
    let section = normalize_entity(&body["data"])?;
    Some(CaseStudiesSection {
        title: text_or(&section, "title", "Case Studies"),
        description: text_or(&section, "description", ""),
    })
}

/// Inactive studies are dropped; the rest are ordered by `order`.
fn shape_case_studies(media: &MediaResolver, body: &Value) -> Vec<NormalizedEntity> {
    let mut studies: Vec<NormalizedEntity> = with_media(media, body, "backgroundImage")
        .into_iter()
        .filter(|study| study.get_bool("isActive") != Some(false))
        .map(|mut study| {
            let description = text_or(&study, "description", "");
            study.insert("description", Value::String(description));
            if !study.get("bulletPoints").is_some_and(Value::is_array) {
                study.insert("bulletPoints", json!([]));
            }
            study
        })
        .collect();
    sort_by_order(&mut studies);
    studies
}
