use thiserror::Error;

/// Result type alias for catalog and recommendation operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the catalog loader and the recommender.
///
/// `DataUnavailable` and `EmptyCatalog` are terminal for a session: the
/// caller must stop and report them rather than retry silently.
/// `ProductNotFound` is local to a single request and recoverable.
#[derive(Debug, Error)]
pub enum Error {
    /// Source could not be fetched or parsed
    #[error("catalog source unavailable: {0}")]
    DataUnavailable(String),

    /// Source parsed fine but contained zero product rows
    #[error("the catalog is empty")]
    EmptyCatalog,

    /// Requested product id is not in the catalog
    #[error("product not found: {0}")]
    ProductNotFound(String),
}
