//! Client-side cart mirror and the cart store seam.
//!
//! Cards never own the cart. They read it and request additions through
//! [`CartStore`], so any backend can be substituted (the session-backed
//! [`CartMirror`] in production, in-memory fakes in tests).
//!
//! Reading the cart fails open: a mirror that cannot be parsed is treated as
//! an empty cart so a corrupted mirror never blocks an add.

use shopfront_core::CartLine;

/// Errors reading the cart mirror.
#[derive(Debug, thiserror::Error)]
pub enum CartReadError {
    #[error("malformed cart mirror: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Read/add access to the visitor's cart.
pub trait CartStore {
    /// Current cart lines in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored cart cannot be decoded.
    fn read(&self) -> Result<Vec<CartLine>, CartReadError>;

    /// Request that `line` be appended. Fire-and-forget.
    fn add(&mut self, line: CartLine);
}

/// Read the cart, collapsing any read error to an empty cart.
pub fn lines_or_empty(store: &dyn CartStore) -> Vec<CartLine> {
    store.read().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Cart mirror unreadable, treating as empty");
        Vec::new()
    })
}

/// Whether `candidate` duplicates any line already in `lines`.
#[must_use]
pub fn contains_line(lines: &[CartLine], candidate: &CartLine) -> bool {
    lines.iter().any(|line| line.is_same_line(candidate))
}

/// Cart contents mirrored as JSON text under the visitor's session.
///
/// Holds the raw text exactly as stored so that malformed content is
/// observed at read time rather than at load time. Additions are applied in
/// memory; the HTTP layer writes [`CartMirror::to_json`] back when
/// [`CartMirror::is_dirty`] is set.
#[derive(Debug, Clone, Default)]
pub struct CartMirror {
    raw: Option<String>,
    dirty: bool,
}

impl CartMirror {
    /// Wrap the stored mirror text, if any.
    #[must_use]
    pub const fn new(raw: Option<String>) -> Self {
        Self { raw, dirty: false }
    }

    /// Whether an addition happened since the mirror was loaded.
    #[must_use]
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// The mirror text to persist.
    #[must_use]
    pub fn to_json(&self) -> String {
        self.raw.clone().unwrap_or_else(|| "[]".to_string())
    }

    /// Number of readable lines, zero when the mirror is malformed.
    #[must_use]
    pub fn len(&self) -> usize {
        lines_or_empty(self).len()
    }

    /// Whether the mirror holds no readable lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CartStore for CartMirror {
    fn read(&self) -> Result<Vec<CartLine>, CartReadError> {
        match self.raw.as_deref() {
            None => Ok(Vec::new()),
            Some(raw) if raw.trim().is_empty() => Ok(Vec::new()),
            Some(raw) => Ok(serde_json::from_str(raw)?),
        }
    }

    fn add(&mut self, line: CartLine) {
        // A malformed mirror is replaced rather than appended to.
        let mut lines = lines_or_empty(self);
        lines.push(line);
        match serde_json::to_string(&lines) {
            Ok(raw) => {
                self.raw = Some(raw);
                self.dirty = true;
            }
            Err(e) => tracing::error!(error = %e, "Failed to encode cart mirror"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;
    use shopfront_core::{Product, ProductId, Variant};
    use url::Url;

    use super::*;

    fn line(id: i64, variant: Option<&str>) -> CartLine {
        let product = Product {
            id: ProductId::Number(id),
            title: format!("Product {id}"),
            description: String::new(),
            price: Decimal::new(500, 2),
            image: Url::parse("https://images.example.com/p.jpg").unwrap(),
            in_stock: true,
            variants: Vec::new(),
        };
        CartLine::new(
            product,
            variant.map(|v| Variant::new(v, v, Decimal::ZERO)),
        )
    }

    #[test]
    fn test_missing_mirror_reads_empty() {
        let mirror = CartMirror::new(None);
        assert!(mirror.read().unwrap().is_empty());
        assert!(mirror.is_empty());
    }

    #[test]
    fn test_blank_mirror_reads_empty() {
        let mirror = CartMirror::new(Some("  ".to_string()));
        assert!(mirror.read().unwrap().is_empty());
    }

    #[test]
    fn test_malformed_mirror_errors_but_fails_open() {
        let mirror = CartMirror::new(Some("{not json".to_string()));
        assert!(matches!(mirror.read(), Err(CartReadError::Malformed(_))));
        assert!(lines_or_empty(&mirror).is_empty());
    }

    #[test]
    fn test_wrong_shape_mirror_fails_open() {
        let mirror = CartMirror::new(Some(r#"[{"id": 5}]"#.to_string()));
        assert!(mirror.read().is_err());
        assert_eq!(mirror.len(), 0);
    }

    #[test]
    fn test_add_appends_and_marks_dirty() {
        let mut mirror = CartMirror::default();
        assert!(!mirror.is_dirty());

        mirror.add(line(1, None));
        mirror.add(line(2, Some("m")));

        assert!(mirror.is_dirty());
        let lines = mirror.read().unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].product.id, ProductId::Number(1));
        assert_eq!(
            lines[1].selected_variant.as_ref().unwrap().id.as_str(),
            "m"
        );
    }

    #[test]
    fn test_add_replaces_malformed_mirror() {
        let mut mirror = CartMirror::new(Some("garbage".to_string()));
        mirror.add(line(3, None));
        assert_eq!(mirror.read().unwrap().len(), 1);
    }

    #[test]
    fn test_to_json_round_trips_through_new() {
        let mut mirror = CartMirror::default();
        mirror.add(line(4, Some("l")));
        let reloaded = CartMirror::new(Some(mirror.to_json()));
        assert_eq!(reloaded.read().unwrap(), mirror.read().unwrap());
        assert!(!reloaded.is_dirty());
    }

    #[test]
    fn test_contains_line_scans_all_entries() {
        let lines = vec![line(1, None), line(5, Some("m"))];
        assert!(contains_line(&lines, &line(5, Some("m"))));
        assert!(!contains_line(&lines, &line(5, Some("l"))));
        assert!(contains_line(&lines, &line(1, Some("x"))));
        assert!(!contains_line(&lines, &line(9, None)));
        assert!(!contains_line(&[], &line(1, None)));
    }
}
