use quill_core::Article;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

/// How many featured articles the sidebar shows by default.
pub const DEFAULT_FEATURED_COUNT: usize = 3;

/// Picks up to `count` featured articles: the most recently published
/// featured article is always included, the rest are drawn at random
/// from the remaining featured articles.
///
/// `current` is the article being rendered, if any; it is never part of
/// the result, so a page cannot recommend itself.
pub fn featured_articles(
    articles: &[Article],
    current: Option<&Article>,
    count: usize,
) -> Vec<Article> {
    featured_articles_with_rng(articles, current, count, &mut rand::thread_rng())
}

/// Same as [`featured_articles`] with a caller-supplied random source,
/// so the sampling can be seeded.
pub fn featured_articles_with_rng<R: Rng + ?Sized>(
    articles: &[Article],
    current: Option<&Article>,
    count: usize,
    rng: &mut R,
) -> Vec<Article> {
    if count == 0 {
        return Vec::new();
    }

    let mut candidates: Vec<&Article> = articles
        .iter()
        .filter(|a| a.featured)
        .filter(|a| current != Some(*a))
        .collect();
    candidates.sort_by_key(|a| a.published_at);

    // The newest candidate is guaranteed a slot; recency must never be
    // left to the random draw.
    let anchor = match candidates.pop() {
        Some(anchor) => anchor,
        None => return Vec::new(),
    };

    debug!(
        anchor = %anchor.slug,
        remaining = candidates.len(),
        "selecting featured articles"
    );

    let mut picked = vec![anchor.clone()];
    picked.extend(
        candidates
            .choose_multiple(rng, count - 1)
            .map(|a| (*a).clone()),
    );
    picked
}
