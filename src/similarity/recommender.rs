use std::cmp::Ordering;

use ndarray::ArrayView1;
use tracing::debug;

use crate::catalog::{Catalog, Product};
use crate::error::{Error, Result};
use crate::similarity::tfidf::{TextVectorizer, TfidfVectorizer};

/// Cosine similarity `dot(u, v) / (|u| * |v|)`, defined as 0.0 when either
/// vector has zero magnitude.
pub fn cosine_similarity(u: ArrayView1<'_, f64>, v: ArrayView1<'_, f64>) -> f64 {
    let norm_u = u.dot(&u).sqrt();
    let norm_v = v.dot(&v).sqrt();

    if norm_u == 0.0 || norm_v == 0.0 {
        return 0.0;
    }

    u.dot(&v) / (norm_u * norm_v)
}

/// Top-`top_n` products most similar to `target_id`, using TF-IDF weighting
/// over the catalog descriptions.
pub fn recommend(target_id: &str, catalog: &Catalog, top_n: usize) -> Result<Vec<Product>> {
    recommend_with(&TfidfVectorizer::new(), target_id, catalog, top_n)
}

/// Same as [`recommend`] with a caller-supplied vectorization strategy.
///
/// The target is resolved to the first product with a matching id and is
/// excluded from the candidate set before ranking. Candidates are ordered by
/// descending similarity; ties keep catalog order, so the result is
/// deterministic for a fixed catalog and target. Returns fewer than `top_n`
/// products only when the catalog has fewer other products.
pub fn recommend_with(
    vectorizer: &dyn TextVectorizer,
    target_id: &str,
    catalog: &Catalog,
    top_n: usize,
) -> Result<Vec<Product>> {
    let target = catalog
        .position(target_id)
        .ok_or_else(|| Error::ProductNotFound(target_id.to_string()))?;

    let documents: Vec<String> = catalog
        .products()
        .iter()
        .map(|p| p.description_text().to_string())
        .collect();

    let matrix = vectorizer.vectorize(&documents);
    let target_row = matrix.row(target);

    let mut scored: Vec<(usize, f64)> = (0..catalog.len())
        .filter(|&idx| idx != target)
        .map(|idx| (idx, cosine_similarity(target_row, matrix.row(idx))))
        .collect();

    // Stable sort keeps catalog order on score ties
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    scored.truncate(top_n);

    debug!(
        "Ranked {} candidates for {}, returning {}",
        catalog.len() - 1,
        target_id,
        scored.len()
    );

    Ok(scored
        .into_iter()
        .map(|(idx, _)| catalog.products()[idx].clone())
        .collect())
}
