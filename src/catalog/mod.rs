pub mod loader;
pub mod model;
pub mod query;

pub use loader::load_catalog;
pub use model::{Catalog, Product};
pub use query::{sample_one, search};
