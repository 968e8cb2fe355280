//! Content type identifiers.
//!
//! The admin panel identifies content types by Strapi UID
//! (`api::blog-post.blog-post`); elsewhere the short name (`blog-post`) is
//! used. Both spellings map to the same [`ContentTypeId`].

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

const API_NAMESPACE: &str = "api::";

/// Identifier of a CMS content type, stored in its short form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct ContentTypeId(String);

impl ContentTypeId {
    /// Parses either spelling. Only the `api::` namespace is shortened;
    /// plugin UIDs (`plugin::users-permissions.user`) are kept whole so they
    /// never collide with site content types.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        let raw = raw.trim();
        let short = raw
            .strip_prefix(API_NAMESPACE)
            .map(|uid| uid.rsplit('.').next().unwrap_or(uid))
            .unwrap_or(raw);
        Self(short.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContentTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ContentTypeId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for ContentTypeId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ContentTypeId {
    fn from(s: String) -> Self {
        Self::new(&s)
    }
}

impl From<ContentTypeId> for String {
    fn from(id: ContentTypeId) -> Self {
        id.0
    }
}
