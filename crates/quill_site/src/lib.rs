//! Declarative site configuration and the template-facing helpers the
//! external generator calls while rendering pages: permalink expansion,
//! date formatting, navigation links, page titles, and the per-page
//! render context.

pub mod config;
pub mod helpers;
pub mod permalink;

pub use config::{BlogConfig, SiteConfig};
pub use helpers::RenderContext;
pub use permalink::PermalinkTemplate;

pub mod prelude {
    pub use super::config::{BlogConfig, SiteConfig};
    pub use super::helpers::RenderContext;
    pub use super::permalink::PermalinkTemplate;
    pub use quill_core::{Article, Error, Result};
}
