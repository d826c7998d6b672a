pub mod error;
pub mod store;
pub mod types;

pub use error::Error;
pub use store::{ArticleStore, InMemoryStore};
pub use types::Article;

pub type Result<T> = std::result::Result<T, Error>;
