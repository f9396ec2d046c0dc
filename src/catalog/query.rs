use rand::seq::SliceRandom;

use crate::catalog::model::{Catalog, Product};

/// Case-insensitive substring search over product descriptions.
///
/// Results keep catalog order. An empty query matches nothing, and products
/// without a description never match.
pub fn search<'a>(catalog: &'a Catalog, query: &str) -> Vec<&'a Product> {
    if query.is_empty() {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    catalog
        .products()
        .iter()
        .filter(|p| p.description_text().to_lowercase().contains(&needle))
        .collect()
}

/// Pick one product uniformly at random. `None` only for an empty catalog.
pub fn sample_one(catalog: &Catalog) -> Option<&Product> {
    catalog.products().choose(&mut rand::thread_rng())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> Catalog {
        Catalog::new(vec![
            Product::new("A", Some("Red running shoe".to_string())),
            Product::new("B", Some("red cotton shirt".to_string())),
            Product::new("C", Some("blue hat".to_string())),
            Product::new("D", None),
        ])
    }

    #[test]
    fn test_search_is_case_insensitive_and_ordered() {
        let catalog = sample_catalog();

        let results = search(&catalog, "RED");
        let ids: Vec<&str> = results.iter().map(|p| p.id.as_str()).collect();

        assert_eq!(ids, vec!["A", "B"]);
    }

    #[test]
    fn test_empty_query_matches_nothing() {
        let catalog = sample_catalog();

        assert!(search(&catalog, "").is_empty());
    }

    #[test]
    fn test_missing_descriptions_never_match() {
        let catalog = Catalog::new(vec![Product::new("D", None)]);

        assert!(search(&catalog, "anything").is_empty());
    }

    #[test]
    fn test_sample_one_draws_from_catalog() {
        let catalog = sample_catalog();

        for _ in 0..20 {
            let picked = sample_one(&catalog).unwrap();
            assert!(catalog.get(&picked.id).is_some());
        }
    }

    #[test]
    fn test_sample_one_empty_catalog_is_none() {
        let catalog = Catalog::new(Vec::new());

        assert!(sample_one(&catalog).is_none());
    }
}
