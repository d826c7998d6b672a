use quill_core::Article;

/// How many articles the front page shows by default.
pub const DEFAULT_RECENT_LIMIT: usize = 5;

/// The most recently published articles, newest first, truncated to
/// `limit`. Input order is not assumed; the snapshot is re-sorted so
/// the result is correct even if the store hands articles over
/// unsorted.
pub fn recent_articles(articles: &[Article], limit: usize) -> Vec<Article> {
    let mut articles = articles.to_vec();
    articles.sort_by(|a, b| b.published_at.cmp(&a.published_at));
    articles.truncate(limit);
    articles
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn article(slug: &str, day: u32) -> Article {
        Article::new(
            slug,
            slug,
            "body",
            Utc.with_ymd_and_hms(2013, 5, day, 12, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_empty_input() {
        assert!(recent_articles(&[], DEFAULT_RECENT_LIMIT).is_empty());
    }

    #[test]
    fn test_sorted_newest_first_from_unsorted_input() {
        let articles = vec![article("b", 10), article("c", 20), article("a", 1)];
        let recent = recent_articles(&articles, DEFAULT_RECENT_LIMIT);
        let slugs: Vec<&str> = recent.iter().map(|a| a.slug.as_str()).collect();
        assert_eq!(slugs, vec!["c", "b", "a"]);
    }

    #[test]
    fn test_truncates_to_limit() {
        let articles: Vec<Article> = (1..=9).map(|d| article(&format!("a{}", d), d)).collect();
        let recent = recent_articles(&articles, 5);
        assert_eq!(recent.len(), 5);
        assert_eq!(recent[0].slug, "a9");
        assert_eq!(recent[4].slug, "a5");
    }

    #[test]
    fn test_fewer_articles_than_limit() {
        let articles = vec![article("only", 3)];
        assert_eq!(recent_articles(&articles, 5).len(), 1);
    }

    #[test]
    fn test_idempotent() {
        let articles = vec![article("b", 10), article("a", 1)];
        let first = recent_articles(&articles, 5);
        let second = recent_articles(&articles, 5);
        assert_eq!(first, second);
    }
}
