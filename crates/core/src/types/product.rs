//! Catalog product and variant records.
//!
//! Products are supplied by a caller (a JSON catalog or the storefront's
//! built-in showcase set) and are never mutated by the UI.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use url::Url;

use super::id::{ProductId, VariantId};

/// A purchasable sub-option of a product, e.g. a size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    pub id: VariantId,
    pub name: String,
    /// Additive surcharge on top of the product price.
    #[serde(default)]
    pub price: Decimal,
}

impl Variant {
    /// Create a variant.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            id: VariantId::new(id),
            name: name.into(),
            price,
        }
    }

    /// Whether selecting this variant changes the price.
    #[must_use]
    pub fn has_surcharge(&self) -> bool {
        !self.price.is_zero()
    }
}

/// A catalog product.
///
/// Identity is [`Product::id`]. An absent `variants` list and an empty one
/// are treated the same.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub description: String,
    pub price: Decimal,
    pub image: Url,
    pub in_stock: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variants: Vec<Variant>,
}

impl Product {
    /// Whether the product offers a variant choice.
    #[must_use]
    pub fn has_variants(&self) -> bool {
        !self.variants.is_empty()
    }

    /// The variant selected when a card is first shown.
    #[must_use]
    pub fn default_variant(&self) -> Option<&Variant> {
        self.variants.first()
    }

    /// Look up a variant by id.
    #[must_use]
    pub fn variant(&self, id: &str) -> Option<&Variant> {
        self.variants.iter().find(|v| v.id == *id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const TEE_JSON: &str = r#"{
        "id": 3,
        "title": "Organic Cotton T-Shirt",
        "description": "Soft.",
        "price": 29.99,
        "image": "https://images.example.com/tee.jpg",
        "inStock": true,
        "variants": [
            { "id": "small", "name": "Small", "price": 0 },
            { "id": "large", "name": "Large", "price": 2 },
            { "id": "xl", "name": "Extra Large" }
        ]
    }"#;

    #[test]
    fn test_product_deserializes_camel_case() {
        let product: Product = serde_json::from_str(TEE_JSON).unwrap();
        assert_eq!(product.id, ProductId::Number(3));
        assert!(product.in_stock);
        assert_eq!(product.variants.len(), 3);
    }

    #[test]
    fn test_variant_price_defaults_to_zero() {
        let product: Product = serde_json::from_str(TEE_JSON).unwrap();
        let xl = product.variant("xl").unwrap();
        assert!(xl.price.is_zero());
        assert!(!xl.has_surcharge());
        assert!(product.variant("large").unwrap().has_surcharge());
    }

    #[test]
    fn test_missing_variants_is_empty() {
        let product: Product = serde_json::from_str(
            r#"{"id":"a","title":"A","description":"","price":1,"image":"https://x.test/a.png","inStock":false}"#,
        )
        .unwrap();
        assert!(!product.has_variants());
        assert!(product.default_variant().is_none());

        let json = serde_json::to_value(&product).unwrap();
        assert!(json.get("variants").is_none());
        assert_eq!(json["inStock"], serde_json::Value::Bool(false));
    }

    #[test]
    fn test_default_variant_is_first() {
        let product: Product = serde_json::from_str(TEE_JSON).unwrap();
        assert_eq!(product.default_variant().unwrap().id.as_str(), "small");
        assert!(product.variant("medium").is_none());
    }
}
