//! Caller-supplied product catalog.
//!
//! The catalog is a JSON array of products loaded once at startup from
//! `SHOPFRONT_CATALOG_PATH`. When no path is configured the showcase falls
//! back to its built-in demonstration set.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use shopfront_core::Product;

/// Errors that can occur while loading a catalog file.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed catalog {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Products loaded from a catalog file, shared across requests.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Arc<Vec<Product>>,
}

impl Catalog {
    /// Wrap an already-loaded product list.
    #[must_use]
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products: Arc::new(products),
        }
    }

    /// Load a catalog from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a JSON array of
    /// products.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json(&content).map_err(|source| CatalogError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(
            path = %path.display(),
            products = catalog.products.len(),
            "Loaded catalog"
        );
        Ok(catalog)
    }

    /// Parse a catalog from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a JSON array of products.
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        let products: Vec<Product> = serde_json::from_str(content)?;

        let mut seen = std::collections::HashSet::new();
        for product in &products {
            if !seen.insert(&product.id) {
                tracing::warn!(product_id = %product.id, "Duplicate product id in catalog");
            }
        }

        Ok(Self::new(products))
    }

    /// All products in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use shopfront_core::ProductId;

    use super::*;

    const CATALOG_JSON: &str = r#"[
        {"id": 10, "title": "Mug", "description": "Ceramic", "price": 12.5,
         "image": "https://images.example.com/mug.jpg", "inStock": true},
        {"id": "poster", "title": "Poster", "description": "A2", "price": 20,
         "image": "https://images.example.com/poster.jpg", "inStock": false}
    ]"#;

    #[test]
    fn test_from_json_keeps_order() {
        let catalog = Catalog::from_json(CATALOG_JSON).unwrap();
        let ids: Vec<_> = catalog.products().iter().map(|p| p.id.clone()).collect();
        assert_eq!(ids, vec![ProductId::Number(10), ProductId::from("poster")]);
    }

    #[test]
    fn test_from_json_empty_array() {
        let catalog = Catalog::from_json("[]").unwrap();
        assert!(catalog.products().is_empty());
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        let err = Catalog::from_json(r#"{"not": "an array"}"#).unwrap_err();
        assert!(err.is_data());
    }

    #[test]
    fn test_load_missing_file_keeps_io_source() {
        let err = Catalog::load(Path::new("/nonexistent/catalog.json")).unwrap_err();
        assert!(matches!(
            &err,
            CatalogError::Io { path, .. } if path == Path::new("/nonexistent/catalog.json")
        ));
        assert_eq!(err.to_string(), "failed to read catalog /nonexistent/catalog.json");

        let source = std::error::Error::source(&err).unwrap();
        let io = source.downcast_ref::<std::io::Error>().unwrap();
        assert_eq!(io.kind(), std::io::ErrorKind::NotFound);
    }

    #[test]
    fn test_load_malformed_file_keeps_parse_source() {
        let path = std::env::temp_dir().join(format!("catalog-{}.json", uuid::Uuid::new_v4()));
        std::fs::write(&path, "[{\"id\": 1}]").unwrap();

        let err = Catalog::load(&path).unwrap_err();
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(&err, CatalogError::Parse { path: p, .. } if p == &path));
        let source = std::error::Error::source(&err).unwrap();
        assert!(source.downcast_ref::<serde_json::Error>().is_some());
    }
}
