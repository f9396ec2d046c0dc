pub mod cleaner;
pub mod stopwords;

pub use cleaner::clean_description;
pub use stopwords::StopWords;
