pub mod catalog;
pub mod config;
pub mod error;
pub mod session;
pub mod similarity;
pub mod text;

pub use catalog::{Catalog, Product, load_catalog, sample_one, search};
pub use config::AppConfig;
pub use error::{Error, Result};
pub use session::Session;
pub use similarity::{TextVectorizer, TfidfVectorizer, cosine_similarity, recommend, recommend_with};
pub use text::clean_description;
