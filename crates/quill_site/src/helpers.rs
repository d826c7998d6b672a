use chrono::{DateTime, Utc};
use url::Url;

use quill_core::{Article, Error, Result};

use crate::config::SiteConfig;

/// Date line shown under an article title, e.g. `" 1 May, 2013"`.
/// The day is space-padded, strftime-style.
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%e %b, %Y").to_string()
}

/// Month heading used on archive and tag pages, e.g. `"May 2013"`.
pub fn format_month(date: &DateTime<Utc>) -> String {
    date.format("%B %Y").to_string()
}

/// An anchor tag for the site navigation. The `active` class is
/// appended when the link points at the page being rendered.
pub fn nav_link_to(text: &str, url: &str, current_path: &str, extra_classes: &[&str]) -> String {
    let mut classes: Vec<&str> = extra_classes.to_vec();
    if url == current_path {
        classes.push("active");
    }
    if classes.is_empty() {
        format!(r#"<a href="{}">{}</a>"#, url, text)
    } else {
        format!(r#"<a href="{}" class="{}">{}</a>"#, url, classes.join(" "), text)
    }
}

/// A link whose text is its own target URL.
pub fn link_to_self(url: &str) -> String {
    format!(r#"<a href="{0}">{0}</a>"#, url)
}

/// Protocol-relative Gravatar URL, requested at twice the display size.
pub fn avatar_url(email_hash: &str, size: u32) -> String {
    format!("//www.gravatar.com/avatar/{}.jpg?s={}", email_hash, size * 2)
}

/// Everything the helpers need to know about the page being rendered.
/// The generator builds one of these per page instead of the helpers
/// reaching into ambient request state.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    pub current_path: String,
    pub current_article: Option<Article>,
}

impl RenderContext {
    pub fn for_page(current_path: impl Into<String>) -> Self {
        Self {
            current_path: current_path.into(),
            current_article: None,
        }
    }

    pub fn for_article(current_path: impl Into<String>, article: Article) -> Self {
        Self {
            current_path: current_path.into(),
            current_article: Some(article),
        }
    }

    /// `<article title> - <site name>`, dropping whichever side is
    /// absent.
    pub fn page_title(&self, site: &SiteConfig) -> String {
        let mut parts: Vec<&str> = Vec::new();
        if let Some(article) = &self.current_article {
            parts.push(&article.title);
        }
        if !site.name.is_empty() {
            parts.push(&site.name);
        }
        parts.join(" - ")
    }

    /// Whether the page shows a comment thread. Only articles carry the
    /// opt-out flag; everything else defaults to enabled.
    pub fn comments_enabled(&self) -> bool {
        self.current_article
            .as_ref()
            .map_or(true, |article| article.comments)
    }

    /// Canonical absolute URL identifying this page's comment thread.
    pub fn discussion_identifier(&self, site: &SiteConfig) -> Result<String> {
        let base = Url::parse(&site.base_url)
            .map_err(|e| Error::InvalidUrl(format!("Bad base URL '{}': {}", site.base_url, e)))?;
        let full = base
            .join(&self.current_path)
            .map_err(|e| Error::InvalidUrl(format!("Bad page path '{}': {}", self.current_path, e)))?;
        Ok(full.to_string())
    }
}
