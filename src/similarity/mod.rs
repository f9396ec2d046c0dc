pub mod recommender;
pub mod tfidf;

pub use recommender::{cosine_similarity, recommend, recommend_with};
pub use tfidf::{TextVectorizer, TfidfVectorizer};
