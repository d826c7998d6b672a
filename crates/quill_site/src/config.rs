use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use quill_core::{Error, Result};

/// Site-wide settings handed to the external generator. Defaults match
/// the conventional asset layout; deployments override via JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub name: String,
    pub author: String,
    pub base_url: String,
    pub css_dir: String,
    pub js_dir: String,
    pub images_dir: String,
    pub time_zone: String,
    pub blog: BlogConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            author: String::new(),
            base_url: String::new(),
            css_dir: "stylesheets".to_string(),
            js_dir: "javascripts".to_string(),
            images_dir: "images".to_string(),
            time_zone: "Wellington".to_string(),
            blog: BlogConfig::default(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        info!(site = %config.name, "loaded site configuration");
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.blog.layout.is_empty() {
            return Err(Error::Config("blog.layout must not be empty".to_string()));
        }
        if !self.blog.default_extension.starts_with('.') {
            return Err(Error::Config(format!(
                "blog.default_extension '{}' must start with '.'",
                self.blog.default_extension
            )));
        }
        Ok(())
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

/// Blog source and routing settings. `permalink` and `sources` are the
/// URL and source-file naming schemes the generator expands per
/// article.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogConfig {
    pub prefix: String,
    pub permalink: String,
    pub sources: String,
    pub layout: String,
    pub tag_template: String,
    pub calendar_template: String,
    pub default_extension: String,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            prefix: "blog".to_string(),
            permalink: "{year}/{month}/{day}/{title}".to_string(),
            sources: "{year}/{year}-{month}-{day}-{title}".to_string(),
            layout: "post".to_string(),
            tag_template: "tag.html".to_string(),
            calendar_template: "calendar.html".to_string(),
            default_extension: ".markdown".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_conventional_layout() {
        let config = SiteConfig::default();
        assert_eq!(config.css_dir, "stylesheets");
        assert_eq!(config.js_dir, "javascripts");
        assert_eq!(config.images_dir, "images");
        assert_eq!(config.blog.prefix, "blog");
        assert_eq!(config.blog.permalink, "{year}/{month}/{day}/{title}");
        assert_eq!(config.blog.layout, "post");
    }

    #[test]
    fn test_partial_json_overrides_keep_defaults() {
        let config = SiteConfig::from_json(
            r#"{
                "name": "Field Notes",
                "base_url": "https://example.net",
                "blog": { "prefix": "posts" }
            }"#,
        )
        .unwrap();
        assert_eq!(config.name, "Field Notes");
        assert_eq!(config.blog.prefix, "posts");
        assert_eq!(config.blog.layout, "post");
        assert_eq!(config.css_dir, "stylesheets");
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(SiteConfig::from_json("{ not json").is_err());
    }

    #[test]
    fn test_bad_extension_is_rejected() {
        let result = SiteConfig::from_json(r#"{ "blog": { "default_extension": "markdown" } }"#);
        assert!(result.is_err());
    }
}
