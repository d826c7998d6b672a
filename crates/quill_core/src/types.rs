use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A published article as supplied by the content store. The selection
/// helpers only ever read these; nothing in this workspace mutates one
/// after publication.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    /// Identity. Two articles are the same article iff their slugs match.
    pub slug: String,
    pub title: String,
    pub body: String,
    pub published_at: DateTime<Utc>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Comments are on unless the article opts out.
    #[serde(default = "default_comments")]
    pub comments: bool,
}

fn default_comments() -> bool {
    true
}

impl PartialEq for Article {
    fn eq(&self, other: &Self) -> bool {
        self.slug == other.slug
    }
}

impl Eq for Article {}

impl Article {
    pub fn new(
        slug: impl Into<String>,
        title: impl Into<String>,
        body: impl Into<String>,
        published_at: DateTime<Utc>,
    ) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
            body: body.into(),
            published_at,
            featured: false,
            tags: Vec::new(),
            comments: true,
        }
    }

    pub fn featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }
}
