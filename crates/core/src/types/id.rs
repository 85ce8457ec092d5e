//! Identifier types for catalog entities.
//!
//! Catalogs arrive as JSON from callers that are free to key products by
//! number or by string, so [`ProductId`] accepts both. Variant ids are always
//! strings.

use core::convert::Infallible;
use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identity of a product within a catalog.
///
/// Serialized as a bare JSON number or string. Equality is strict: the
/// number `5` and the string `"5"` are different products.
///
/// # Example
///
/// ```rust
/// # use shopfront_core::ProductId;
/// let numeric: ProductId = "42".parse().unwrap();
/// assert_eq!(numeric, ProductId::Number(42));
///
/// let slug: ProductId = "organic-tee".parse().unwrap();
/// assert_eq!(slug, ProductId::Text("organic-tee".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    /// Numeric id, e.g. `7`.
    Number(i64),
    /// String id, e.g. `"sku-123"`.
    Text(String),
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl FromStr for ProductId {
    type Err = Infallible;

    /// Parse a path segment into a product id.
    ///
    /// Canonical integers (no sign prefix, no leading zeros) become
    /// [`ProductId::Number`]; everything else is kept as text so that
    /// `"007"` still round-trips through `Display`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.parse::<i64>() {
            Ok(n) if n.to_string() == s => Self::Number(n),
            _ => Self::Text(s.to_string()),
        })
    }
}

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        Self::Number(id)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_string())
    }
}

/// Identity of a variant, unique within its product's variant list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariantId(String);

impl VariantId {
    /// Create a variant id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the underlying string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VariantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for VariantId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl PartialEq<str> for VariantId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}
