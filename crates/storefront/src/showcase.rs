//! Product showcase: a titled grid of product cards.
//!
//! The showcase renders whatever products it is given, in order. When it is
//! given none at all it shows a small built-in demonstration set; an
//! explicitly empty list renders an empty grid.

use std::sync::LazyLock;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use rust_decimal::Decimal;
use shopfront_core::{CartLine, Product, ProductId, Variant};
use url::Url;

use crate::card::{BuyNowHandler, ProductCard};
use crate::navigation::Navigator;

/// Heading used when no title is supplied.
pub const DEFAULT_TITLE: &str = "Featured Products";

/// Subheading used when no subtitle is supplied.
pub const DEFAULT_SUBTITLE: &str = "Discover our latest collection of premium products";

static FALLBACK_PRODUCTS: LazyLock<Vec<Product>> = LazyLock::new(build_fallback_products);

/// The built-in demonstration products.
#[must_use]
pub fn fallback_products() -> &'static [Product] {
    &FALLBACK_PRODUCTS
}

#[allow(clippy::expect_used)]
fn image(url: &str) -> Url {
    Url::parse(url).expect("built-in image URLs are valid")
}

fn build_fallback_products() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::Number(1),
            title: "Wireless Bluetooth Headphones Premium Quality Sound".to_string(),
            description: "High-quality wireless headphones with noise cancellation and premium \
                          sound quality for an immersive audio experience."
                .to_string(),
            price: Decimal::new(9999, 2),
            image: image(
                "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?w=400&h=300&fit=crop",
            ),
            in_stock: true,
            variants: Vec::new(),
        },
        Product {
            id: ProductId::Number(2),
            title: "Smart Fitness Watch with Health Monitoring".to_string(),
            description: "Advanced fitness tracking with heart rate monitoring, GPS, and smart \
                          notifications."
                .to_string(),
            price: Decimal::new(24999, 2),
            image: image(
                "https://images.unsplash.com/photo-1523275335684-37898b6baf30?w=400&h=300&fit=crop",
            ),
            in_stock: false,
            variants: Vec::new(),
        },
        Product {
            id: ProductId::Number(3),
            title: "Organic Cotton T-Shirt Comfortable Fit".to_string(),
            description: "Premium organic cotton t-shirt with sustainable materials and \
                          comfortable fit for daily wear."
                .to_string(),
            price: Decimal::new(2999, 2),
            image: image(
                "https://images.unsplash.com/photo-1521572163474-6864f9cf17ab?w=400&h=300&fit=crop",
            ),
            in_stock: true,
            variants: vec![
                Variant::new("small", "Small", Decimal::ZERO),
                Variant::new("medium", "Medium", Decimal::ZERO),
                Variant::new("large", "Large", Decimal::new(2, 0)),
                Variant::new("xl", "Extra Large", Decimal::new(5, 0)),
            ],
        },
    ]
}

/// Characters left as-is in a path segment (RFC 3986 unreserved).
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// `id` encoded for use as a single URL path segment.
#[must_use]
pub fn path_segment(id: &ProductId) -> String {
    utf8_percent_encode(&id.to_string(), PATH_SEGMENT).to_string()
}

/// Path of the product page for `id`.
#[must_use]
pub fn product_path(id: &ProductId) -> String {
    format!("/product/{}", path_segment(id))
}

/// Default buy-now handler: navigate to the product's page.
pub struct NavigateToProduct<'n> {
    navigator: &'n mut dyn Navigator,
}

impl<'n> NavigateToProduct<'n> {
    pub fn new(navigator: &'n mut dyn Navigator) -> Self {
        Self { navigator }
    }
}

impl BuyNowHandler for NavigateToProduct<'_> {
    fn buy_now(&mut self, line: &CartLine) {
        tracing::info!(product_id = %line.product.id, "Buy now");
        self.navigator.navigate_to(&product_path(&line.product.id));
    }
}

/// A titled grid of product cards.
#[derive(Debug, Clone, Default)]
pub struct ProductShowcase {
    products: Option<Vec<Product>>,
    title: Option<String>,
    subtitle: Option<String>,
}

impl ProductShowcase {
    /// A showcase of the built-in demonstration products.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `products` instead of the built-in set.
    #[must_use]
    pub fn with_products(mut self, products: Vec<Product>) -> Self {
        self.products = Some(products);
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    #[must_use]
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(DEFAULT_TITLE)
    }

    #[must_use]
    pub fn subtitle(&self) -> &str {
        self.subtitle.as_deref().unwrap_or(DEFAULT_SUBTITLE)
    }

    /// Products to display, in order.
    #[must_use]
    #[allow(clippy::redundant_closure)]
    pub fn products(&self) -> &[Product] {
        self.products
            .as_deref()
            .unwrap_or_else(|| fallback_products())
    }

    /// First displayed product with `id`.
    #[must_use]
    pub fn find(&self, id: &ProductId) -> Option<&Product> {
        self.products().iter().find(|p| &p.id == id)
    }

    /// One fresh card per displayed product.
    pub fn cards(&self) -> impl Iterator<Item = ProductCard<'_>> {
        self.products().iter().map(ProductCard::new)
    }
}
