use tracing::debug;

use crate::types::Article;

/// The boundary to the content store that owns the published articles.
/// Snapshots hand out owned clones; the store keeps its collection
/// immutable for the duration of any one call.
pub trait ArticleStore {
    /// All published articles, most recent first.
    fn articles(&self) -> Vec<Article>;

    /// Look up a single article by slug.
    fn find(&self, slug: &str) -> Option<Article>;

    fn published_count(&self) -> usize;
}

/// In-memory store holding the article snapshot handed over by the
/// external generator at build time.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    articles: Vec<Article>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish an article. Re-publishing the same slug replaces the
    /// earlier version rather than duplicating it.
    pub fn publish(&mut self, article: Article) {
        if let Some(existing) = self.articles.iter_mut().find(|a| a.slug == article.slug) {
            debug!(slug = %article.slug, "replacing previously published article");
            *existing = article;
        } else {
            debug!(slug = %article.slug, "publishing article");
            self.articles.push(article);
        }
    }
}

impl ArticleStore for InMemoryStore {
    fn articles(&self) -> Vec<Article> {
        let mut articles = self.articles.clone();
        articles.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        articles
    }

    fn find(&self, slug: &str) -> Option<Article> {
        self.articles.iter().find(|a| a.slug == slug).cloned()
    }

    fn published_count(&self) -> usize {
        self.articles.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, TimeZone, Utc};

    fn article(slug: &str, day: u32) -> Article {
        Article::new(
            slug,
            slug.to_uppercase(),
            "body",
            Utc.with_ymd_and_hms(2013, 5, day, 12, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_snapshot_is_reverse_chronological() {
        let mut store = InMemoryStore::new();
        store.publish(article("oldest", 1));
        store.publish(article("newest", 20));
        store.publish(article("middle", 10));

        let snapshot = store.articles();
        let slugs: Vec<&str> = snapshot.iter().map(|a| a.slug.as_str()).collect();
        assert_eq!(slugs, vec!["newest", "middle", "oldest"]);
    }

    #[test]
    fn test_republish_replaces_by_slug() {
        let mut store = InMemoryStore::new();
        store.publish(article("post", 1));
        store.publish(article("post", 2));

        assert_eq!(store.published_count(), 1);
        let found = store.find("post").unwrap();
        assert_eq!(found.published_at.day(), 2);
    }

    #[test]
    fn test_find_missing_slug() {
        let store = InMemoryStore::new();
        assert!(store.find("nope").is_none());
    }
}
