//! Cart line type and the duplicate-line rule.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::product::{Product, Variant};

/// A product optionally paired with a chosen variant.
///
/// Serialized as the product's own fields plus a `selectedVariant` key, which
/// is the shape stored in the visitor's cart mirror.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    #[serde(flatten)]
    pub product: Product,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_variant: Option<Variant>,
}

impl CartLine {
    /// Pair a product with an optional variant.
    #[must_use]
    pub const fn new(product: Product, selected_variant: Option<Variant>) -> Self {
        Self {
            product,
            selected_variant,
        }
    }

    /// Whether `other` is the same cart entry as `self`.
    ///
    /// Product ids must match. Variant ids are compared only when both lines
    /// carry a variant; a line without one matches on product id alone.
    #[must_use]
    pub fn is_same_line(&self, other: &Self) -> bool {
        if self.product.id != other.product.id {
            return false;
        }
        match (&self.selected_variant, &other.selected_variant) {
            (Some(a), Some(b)) => a.id == b.id,
            _ => true,
        }
    }

    /// Product price plus the selected variant's surcharge.
    #[must_use]
    pub fn unit_price(&self) -> Decimal {
        self.selected_variant
            .as_ref()
            .map_or(self.product.price, |v| self.product.price + v.price)
    }
}
