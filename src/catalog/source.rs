//! Product sources
//!
//! The filtering core never reaches for ambient storage. Callers hand it a
//! [`ProductSource`] (or the products themselves), which keeps the engine
//! testable without files.

use super::error::CatalogError;
use super::types::Product;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Anything that can supply the current product set
pub trait ProductSource {
    /// Load every product, in catalog order
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the products cannot be read or a record is invalid.
    fn products(&self) -> Result<Vec<Product>, CatalogError>;
}

/// Products held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    products: Vec<Product>,
}

impl InMemoryCatalog {
    #[must_use]
    pub const fn new(products: Vec<Product>) -> Self {
        Self { products }
    }
}

impl ProductSource for InMemoryCatalog {
    fn products(&self) -> Result<Vec<Product>, CatalogError> {
        validate_all(&self.products)?;
        Ok(self.products.clone())
    }
}

/// JSON catalog file
///
/// Accepts either a bare array of products or an object with a `products`
/// array.
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    path: PathBuf,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    Bare(Vec<Product>),
    Wrapped { products: Vec<Product> },
}

impl JsonCatalog {
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse catalog JSON text
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Format` on malformed JSON and
    /// `CatalogError::InvalidProduct`/`DuplicateId` on bad records.
    pub fn parse(contents: &str) -> Result<Vec<Product>, CatalogError> {
        let products = match serde_json::from_str::<CatalogFile>(contents)? {
            CatalogFile::Bare(products) | CatalogFile::Wrapped { products } => products,
        };
        validate_all(&products)?;
        Ok(products)
    }
}

impl ProductSource for JsonCatalog {
    fn products(&self) -> Result<Vec<Product>, CatalogError> {
        if !self.path.exists() {
            return Err(CatalogError::NotFound(self.path.clone()));
        }
        let contents = fs::read_to_string(&self.path)?;
        let products = Self::parse(&contents)?;
        log::debug!(
            "loaded {} products from {}",
            products.len(),
            self.path.display()
        );
        Ok(products)
    }
}

fn validate_all(products: &[Product]) -> Result<(), CatalogError> {
    let mut seen = HashSet::with_capacity(products.len());
    for product in products {
        product.validate()?;
        if !seen.insert(product.id.as_str()) {
            return Err(CatalogError::DuplicateId(product.id.clone()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_bare_array() {
        let products = JsonCatalog::parse(r#"[{"id": "1", "price": 10}, {"id": "2", "price": 20}]"#)
            .unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[1].id, "2");
    }

    #[test]
    fn test_parse_wrapped_object() {
        let products =
            JsonCatalog::parse(r#"{"products": [{"_id": "a", "price": 499}]}"#).unwrap();
        assert_eq!(products[0].id, "a");
        assert!((products[0].price - 499.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_rejects_duplicate_ids() {
        let result = JsonCatalog::parse(r#"[{"id": "1", "price": 10}, {"id": "1", "price": 20}]"#);
        assert!(matches!(result, Err(CatalogError::DuplicateId(id)) if id == "1"));
    }

    #[test]
    fn test_parse_rejects_negative_price() {
        let result = JsonCatalog::parse(r#"[{"id": "1", "price": -5}]"#);
        assert!(matches!(result, Err(CatalogError::InvalidProduct { .. })));
    }

    #[test]
    fn test_json_catalog_reads_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"[{{"id": "x", "price": 1299, "colors": ["Light Blue"]}}]"#).unwrap();

        let catalog = JsonCatalog::new(file.path());
        let products = catalog.products().unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].colors, vec!["Light Blue".to_string()]);
    }

    #[test]
    fn test_json_catalog_missing_file() {
        let catalog = JsonCatalog::new("/definitely/not/here/catalog.json");
        assert!(matches!(catalog.products(), Err(CatalogError::NotFound(_))));
    }

    #[test]
    fn test_in_memory_catalog_validates() {
        let catalog = InMemoryCatalog::new(vec![Product::new("ok", 5.0), Product::new("bad", -1.0)]);
        assert!(catalog.products().is_err());
    }
}
