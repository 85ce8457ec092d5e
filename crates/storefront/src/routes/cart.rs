//! Cart route handlers.
//!
//! The cart lives in the visitor's session as a JSON mirror (see
//! [`CartMirror`]). These handlers only read it; additions go through the
//! product cards.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;
use rust_decimal::Decimal;
use shopfront_core::{CartLine, Price};
use tower_sessions::Session;
use tracing::instrument;

use crate::cart::{CartMirror, lines_or_empty};
use crate::filters;
use crate::models::session_keys;
use crate::showcase::path_segment;

/// Cart item display data for templates.
#[derive(Clone)]
pub struct CartItemView {
    pub id: String,
    pub path_id: String,
    pub title: String,
    pub variant_title: Option<String>,
    pub price: String,
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub item_count: usize,
}

impl CartView {
    /// Create an empty cart.
    #[must_use]
    pub fn empty() -> Self {
        Self::from(&[][..])
    }
}

impl From<&[CartLine]> for CartView {
    fn from(lines: &[CartLine]) -> Self {
        let subtotal: Decimal = lines.iter().map(CartLine::unit_price).sum();
        Self {
            items: lines.iter().map(CartItemView::from).collect(),
            subtotal: Price::usd(subtotal).display(),
            item_count: lines.len(),
        }
    }
}

impl From<&CartLine> for CartItemView {
    fn from(line: &CartLine) -> Self {
        Self {
            id: line.product.id.to_string(),
            path_id: path_segment(&line.product.id),
            title: line.product.title.clone(),
            variant_title: line.selected_variant.as_ref().map(|v| v.name.clone()),
            price: Price::usd(line.unit_price()).display(),
        }
    }
}

// =============================================================================
// Session Helpers
// =============================================================================

/// Load the cart mirror from the session.
///
/// A session value that cannot be decoded is treated as no cart at all.
pub async fn load_cart_mirror(session: &Session) -> CartMirror {
    let raw = session
        .get::<String>(session_keys::CART)
        .await
        .unwrap_or_else(|e| {
            tracing::warn!("Failed to read cart mirror from session: {e}");
            None
        });
    CartMirror::new(raw)
}

/// Write the cart mirror back to the session.
pub async fn save_cart_mirror(
    session: &Session,
    mirror: &CartMirror,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::CART, mirror.to_json()).await
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub cart: CartView,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: usize,
}

/// Display cart page.
#[instrument(skip(session))]
pub async fn show(session: Session) -> impl IntoResponse {
    let mirror = load_cart_mirror(&session).await;
    let lines = lines_or_empty(&mirror);

    CartShowTemplate {
        cart: CartView::from(lines.as_slice()),
    }
}

/// Get cart count badge (HTMX).
#[instrument(skip(session))]
pub async fn count(session: Session) -> impl IntoResponse {
    let count = load_cart_mirror(&session).await.len();
    CartCountTemplate { count }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::showcase::fallback_products;

    #[test]
    fn test_cart_view_subtotal_includes_surcharges() {
        let products = fallback_products();
        let tee = &products[2];
        let lines = vec![
            CartLine::new(products[0].clone(), None),
            CartLine::new(tee.clone(), tee.variant("xl").cloned()),
        ];

        let view = CartView::from(lines.as_slice());
        assert_eq!(view.item_count, 2);
        // 99.99 + 29.99 + 5
        assert_eq!(view.subtotal, "$134.98");
        assert_eq!(view.items[1].variant_title.as_deref(), Some("Extra Large"));
        assert_eq!(view.items[1].price, "$34.99");
    }

    #[test]
    fn test_empty_cart_view() {
        let view = CartView::empty();
        assert_eq!(view.item_count, 0);
        assert_eq!(view.subtotal, "$0.00");
    }

    #[test]
    fn test_cart_page_lists_lines() {
        let products = fallback_products();
        let lines = vec![CartLine::new(products[0].clone(), None)];
        let html = CartShowTemplate {
            cart: CartView::from(lines.as_slice()),
        }
        .render()
        .unwrap();
        assert!(html.contains("Wireless Bluetooth Headphones"));
        assert!(html.contains("$99.99"));
    }
}
