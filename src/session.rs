use tracing::info;

use crate::catalog::{self, Catalog, Product, load_catalog};
use crate::config::AppConfig;
use crate::error::{Error, Result};
use crate::similarity::{TextVectorizer, TfidfVectorizer, recommend_with};
use crate::text::clean_description;

/// Session-scoped state: one catalog loaded up front, read-only afterwards,
/// plus the vectorization strategy used for recommendations. Each user
/// session owns its own `Session`; nothing is shared across sessions.
pub struct Session {
    catalog: Catalog,
    vectorizer: Box<dyn TextVectorizer>,
    top_n: usize,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("catalog", &self.catalog)
            .field("top_n", &self.top_n)
            .finish_non_exhaustive()
    }
}

impl Session {
    /// Load the catalog and start a session. Loader failures
    /// (`DataUnavailable`, `EmptyCatalog`) are terminal: no session exists
    /// if this fails.
    pub fn start(config: &AppConfig) -> Result<Self> {
        let catalog = load_catalog(&config.catalog.source)?;

        info!("Session started with {} products", catalog.len());

        Ok(Session {
            catalog,
            vectorizer: Box::new(TfidfVectorizer::new()),
            top_n: config.recommend.top_n,
        })
    }

    /// Swap in an alternative similarity strategy.
    pub fn with_vectorizer(mut self, vectorizer: Box<dyn TextVectorizer>) -> Self {
        self.vectorizer = vectorizer;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Cleaned, render-ready description for one product.
    pub fn describe(&self, id: &str) -> Result<String> {
        let product = self
            .catalog
            .get(id)
            .ok_or_else(|| Error::ProductNotFound(id.to_string()))?;

        Ok(clean_description(product.description_text()))
    }

    /// Similar products using the configured neighbor count.
    pub fn recommend(&self, id: &str) -> Result<Vec<Product>> {
        self.recommend_n(id, self.top_n)
    }

    pub fn recommend_n(&self, id: &str, top_n: usize) -> Result<Vec<Product>> {
        recommend_with(self.vectorizer.as_ref(), id, &self.catalog, top_n)
    }

    pub fn search(&self, query: &str) -> Vec<&Product> {
        catalog::search(&self.catalog, query)
    }

    pub fn sample(&self) -> Option<&Product> {
        catalog::sample_one(&self.catalog)
    }
}
