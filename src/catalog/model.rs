use serde::{Deserialize, Serialize};

/// A single catalog entry. Only `id` and `description` matter to the core;
/// any other source columns are dropped at load time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    pub id: String,
    pub description: Option<String>,
}

impl Product {
    pub fn new(id: impl Into<String>, description: Option<String>) -> Self {
        Product {
            id: id.into(),
            description,
        }
    }

    /// Description text, empty string when the source row had none.
    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

/// Ordered, read-only collection of products for one session.
///
/// Duplicate ids are tolerated; lookups always resolve to the first match in
/// source order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Catalog { products }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// First product with the given id, in source order.
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Index of the first product with the given id.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.products.iter().position(|p| p.id == id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.products.iter().map(|p| p.id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> Catalog {
        Catalog::new(vec![
            Product::new("A", Some("red shoe".to_string())),
            Product::new("B", Some("red shirt".to_string())),
            Product::new("A", Some("duplicate".to_string())),
            Product::new("C", None),
        ])
    }

    #[test]
    fn test_first_match_wins_on_duplicate_ids() {
        let catalog = sample_catalog();

        assert_eq!(catalog.get("A").unwrap().description_text(), "red shoe");
        assert_eq!(catalog.position("A"), Some(0));
    }

    #[test]
    fn test_missing_description_reads_as_empty() {
        let catalog = sample_catalog();

        assert_eq!(catalog.get("C").unwrap().description_text(), "");
    }

    #[test]
    fn test_unknown_id_is_none() {
        let catalog = sample_catalog();

        assert!(catalog.get("Z").is_none());
        assert!(catalog.position("Z").is_none());
    }
}
