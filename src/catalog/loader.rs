use std::io::Cursor;

use anyhow::Context;
use polars::prelude::*;
use tracing::{info, warn};

use crate::catalog::model::{Catalog, Product};
use crate::error::{Error, Result};

/// Load a product catalog from a CSV file path or http(s) URL.
///
/// The source must be headered CSV with `id` and `description` columns;
/// extra columns are ignored and source row order is preserved. A row with a
/// null description yields a product with no description. On success the
/// returned catalog is never empty.
pub fn load_catalog(source: &str) -> Result<Catalog> {
    info!("Loading catalog from {}", source);

    let bytes = fetch_source(source)?;
    let df = parse_csv(bytes).map_err(|e| Error::DataUnavailable(format!("{}: {}", source, e)))?;

    let products =
        extract_products(&df).map_err(|e| Error::DataUnavailable(format!("{}: {}", source, e)))?;

    if products.is_empty() {
        return Err(Error::EmptyCatalog);
    }

    info!("Loaded {} products from {}", products.len(), source);
    Ok(Catalog::new(products))
}

fn fetch_source(source: &str) -> Result<Vec<u8>> {
    if source.starts_with("http://") || source.starts_with("https://") {
        fetch_url(source)
    } else {
        std::fs::read(source).map_err(|e| Error::DataUnavailable(format!("{}: {}", source, e)))
    }
}

fn fetch_url(url: &str) -> Result<Vec<u8>> {
    let response = reqwest::blocking::get(url)
        .map_err(|e| Error::DataUnavailable(format!("{}: {}", url, e)))?;

    if !response.status().is_success() {
        return Err(Error::DataUnavailable(format!(
            "{}: HTTP {}",
            url,
            response.status()
        )));
    }

    let body = response
        .bytes()
        .map_err(|e| Error::DataUnavailable(format!("{}: {}", url, e)))?;

    Ok(body.to_vec())
}

fn parse_csv(bytes: Vec<u8>) -> anyhow::Result<DataFrame> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .into_reader_with_file_handle(Cursor::new(bytes))
        .finish()?;

    Ok(df)
}

fn extract_products(df: &DataFrame) -> anyhow::Result<Vec<Product>> {
    let ids = df
        .column("id")
        .context("missing required column: id")?
        .cast(&DataType::String)?;
    let ids = ids.str()?;

    let descriptions = df
        .column("description")
        .context("missing required column: description")?
        .cast(&DataType::String)?;
    let descriptions = descriptions.str()?;

    let mut products = Vec::with_capacity(df.height());
    let mut skipped = 0usize;

    for (id_opt, desc_opt) in ids.into_iter().zip(descriptions.into_iter()) {
        match id_opt {
            Some(id) if !id.trim().is_empty() => {
                products.push(Product::new(id.trim(), desc_opt.map(|d| d.to_string())));
            }
            _ => skipped += 1,
        }
    }

    if skipped > 0 {
        warn!("Skipped {} rows without an id", skipped);
    }

    Ok(products)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_preserves_order_and_extra_columns_ignored() {
        let file = write_csv(
            "id,price,description\n\
             A,10,red shoe\n\
             B,20,red shirt\n\
             C,30,blue hat\n",
        );

        let catalog = load_catalog(file.path().to_str().unwrap()).unwrap();

        assert_eq!(catalog.len(), 3);
        let ids: Vec<&str> = catalog.ids().collect();
        assert_eq!(ids, vec!["A", "B", "C"]);
        assert_eq!(catalog.get("B").unwrap().description_text(), "red shirt");
    }

    #[test]
    fn test_missing_description_cell_becomes_none() {
        let file = write_csv("id,description\nA,red shoe\nB,\n");

        let catalog = load_catalog(file.path().to_str().unwrap()).unwrap();

        assert_eq!(catalog.len(), 2);
        assert!(catalog.get("B").unwrap().description.is_none());
        assert_eq!(catalog.get("B").unwrap().description_text(), "");
    }

    #[test]
    fn test_header_only_file_is_empty_catalog() {
        let file = write_csv("id,description\n");

        let err = load_catalog(file.path().to_str().unwrap()).unwrap_err();

        assert!(matches!(err, Error::EmptyCatalog));
    }

    #[test]
    fn test_unreadable_path_is_data_unavailable() {
        let err = load_catalog("/no/such/file.csv").unwrap_err();

        assert!(matches!(err, Error::DataUnavailable(_)));
    }

    #[test]
    fn test_missing_required_column_is_data_unavailable() {
        let file = write_csv("name,description\nA,red shoe\n");

        let err = load_catalog(file.path().to_str().unwrap()).unwrap_err();

        match err {
            Error::DataUnavailable(msg) => assert!(msg.contains("id")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_numeric_ids_are_read_as_strings() {
        let file = write_csv("id,description\n101,red shoe\n102,red shirt\n");

        let catalog = load_catalog(file.path().to_str().unwrap()).unwrap();

        assert!(catalog.get("101").is_some());
        assert_eq!(catalog.get("102").unwrap().description_text(), "red shirt");
    }
}
