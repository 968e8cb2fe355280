//! DeepNeurax site API server
//!
//! Serves the page data the site renders and answers preview requests from
//! the CMS admin panel:
//! 1. Loads landing page, layout and blog post data from Strapi
//! 2. Maps a content type and document to its preview URL on the site
//!
//! Usage:
//!   deepneurax-server --strapi-url http://localhost:1337 --port 4000
//!
//! The server is stateless; every request reads through to the CMS.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use deepneurax_cms::{CmsClient, CmsConfig};
use deepneurax_preview::{CmsDocumentStore, PreviewConfig, PreviewService};
use deepneurax_server::{build_router, AppState};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "deepneurax-server")]
#[command(about = "DeepNeurax site API: page data and CMS preview URLs")]
struct Args {
    /// Strapi origin, without the /api suffix
    #[arg(long, env = "STRAPI_URL", default_value = "http://localhost:1337")]
    strapi_url: String,

    /// Read-only Strapi API token
    #[arg(long, env = "STRAPI_API_TOKEN", hide_env_values = true)]
    strapi_api_token: Option<String>,

    /// Public site origin used for preview URLs
    #[arg(long, env = "CLIENT_URL", default_value = "http://localhost:3000")]
    client_url: String,

    /// HTTP port to listen on
    #[arg(short, long, env = "PORT", default_value = "4000")]
    port: u16,

    /// Address to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Upper bound on the preview document fetch
    #[arg(long, env = "PREVIEW_TIMEOUT_SECS", default_value = "5")]
    preview_timeout_secs: u64,

    /// Overall timeout for a single CMS request
    #[arg(long, env = "CMS_TIMEOUT_SECS", default_value = "30")]
    cms_timeout_secs: u64,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let default_level = if args.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();

    info!("DeepNeurax server starting...");

    let mut cms_config = CmsConfig::new(&args.strapi_url);
    cms_config.timeout_secs = args.cms_timeout_secs;
    if let Some(token) = args.strapi_api_token {
        cms_config = cms_config.with_token(token);
    }
    let cms = CmsClient::new(cms_config).context("Invalid CMS configuration")?;

    let preview_config = PreviewConfig {
        site_url: args.client_url.clone(),
        fetch_timeout_ms: args.preview_timeout_secs.saturating_mul(1_000),
    };
    let store = Arc::new(CmsDocumentStore::new(cms.clone()));
    let preview =
        PreviewService::new(preview_config, store).context("Invalid preview configuration")?;

    let app = build_router(Arc::new(AppState { cms, preview }));

    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("CMS:     {}", args.strapi_url);
    info!("Site:    {}", args.client_url);
    info!("Listening on http://{}", addr);

    axum::serve(listener, app).await.context("HTTP server failed")?;
    Ok(())
}
