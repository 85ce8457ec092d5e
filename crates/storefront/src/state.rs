//! Application state shared across handlers.

use std::sync::Arc;

use crate::catalog::{Catalog, CatalogError};
use crate::config::StorefrontConfig;
use crate::showcase::ProductShowcase;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// configuration and the showcase built at startup.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    showcase: ProductShowcase,
}

impl AppState {
    /// Create a new application state.
    ///
    /// Loads the catalog named by `config.catalog_path`, or uses the
    /// showcase's built-in products when none is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured catalog cannot be loaded.
    pub fn new(config: StorefrontConfig) -> Result<Self, CatalogError> {
        let catalog = config
            .catalog_path
            .as_deref()
            .map(Catalog::load)
            .transpose()?;

        let mut showcase = ProductShowcase::new();
        if let Some(catalog) = catalog {
            showcase = showcase.with_products(catalog.products().to_vec());
        }
        if let Some(title) = &config.showcase.title {
            showcase = showcase.with_title(title.clone());
        }
        if let Some(subtitle) = &config.showcase.subtitle {
            showcase = showcase.with_subtitle(subtitle.clone());
        }

        Ok(Self::with_showcase(config, showcase))
    }

    /// Create a state around an already-built showcase.
    #[must_use]
    pub fn with_showcase(config: StorefrontConfig, showcase: ProductShowcase) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, showcase }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the product showcase.
    #[must_use]
    pub fn showcase(&self) -> &ProductShowcase {
        &self.inner.showcase
    }
}
