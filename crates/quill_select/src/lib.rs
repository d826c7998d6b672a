//! Article selection helpers for the templating layer: recent and
//! featured article picks plus reading-time estimation. Everything here
//! is a pure function over the snapshot handed in by the content store.

pub mod featured;
pub mod reading_time;
pub mod recent;

pub use featured::{featured_articles, featured_articles_with_rng, DEFAULT_FEATURED_COUNT};
pub use reading_time::{reading_time, WORDS_PER_MINUTE};
pub use recent::{recent_articles, DEFAULT_RECENT_LIMIT};

pub mod prelude {
    pub use super::{featured_articles, reading_time, recent_articles};
    pub use quill_core::Article;
}
