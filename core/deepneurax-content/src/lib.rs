//! CMS content normalization for DeepNeurax.
//!
//! Strapi answers in more than one shape depending on version and endpoint.
//! This crate adapts every accepted shape to one canonical form before any
//! page code touches it:
//! - [`EntityShape`]: structural view of a raw JSON value (flat, nested, wrapped)
//! - [`normalize_entity`] / [`normalize_collection`]: canonical flat entities
//! - [`MediaResolver`]: media references to absolute URLs in a fixed wrapper
//!
//! Everything here is pure and total: malformed input degrades to `None`
//! or an empty collection, never to an error.

mod entity;
mod media;
mod normalize;
mod shape;

pub use entity::NormalizedEntity;
pub use media::{is_absolute_url, MediaAsset, MediaResolver, ResolvedMedia};
pub use normalize::{normalize_collection, normalize_entity};
pub use shape::{unwrap_entity, EntityShape, Fields, ListPolicy, Wrapped};
