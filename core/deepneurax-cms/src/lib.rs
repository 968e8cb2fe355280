//! Strapi access for the DeepNeurax site.
//!
//! - [`CmsClient`]: authenticated REST client with Strapi query encoding
//! - [`pages`]: concurrent page-data loaders built on the client and the
//!   normalization layer in `deepneurax-content`

pub mod client;
pub mod config;
pub mod error;
pub mod pages;
pub mod query;

pub use client::{CmsClient, FetchOptions};
pub use config::CmsConfig;
pub use error::{CmsError, CmsResult};
pub use query::encode_query;
