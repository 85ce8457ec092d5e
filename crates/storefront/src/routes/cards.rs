//! Product card route handlers (HTMX).
//!
//! Each handler rebuilds the card from the submitted form state, applies one
//! event and answers with the re-rendered card fragment. Card state is never
//! stored server-side.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
    http::StatusCode,
    response::{AppendHeaders, IntoResponse, Response},
};
use serde::Deserialize;
use shopfront_core::{Price, Product, ProductId};
use tower_sessions::Session;
use tracing::instrument;

use crate::card::{AddToCart, BuyNow, CardState, ProductCard};
use crate::error::{AppError, Result, add_breadcrumb};
use crate::icons::Icon;
use crate::navigation::HxNavigator;
use crate::notify::{Toast, Toasts};
use crate::routes::cart::{load_cart_mirror, save_cart_mirror};
use crate::showcase::{NavigateToProduct, path_segment};
use crate::state::AppState;

/// Card display data for templates.
#[derive(Clone)]
pub struct CardView {
    pub id: String,
    /// `id` encoded for use in URL paths.
    pub path_id: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub in_stock: bool,
    pub price: String,
    /// Selected variant's surcharge, when it has one.
    pub surcharge: Option<String>,
    pub variants: Vec<VariantOption>,
    /// Empty when the product has no variants.
    pub selected_variant: String,
    pub is_wishlisted: bool,
    pub image_loading: bool,
    pub heart_icon: String,
    pub cart_icon: String,
}

/// One entry of the variant dropdown.
#[derive(Clone)]
pub struct VariantOption {
    pub id: String,
    pub label: String,
    pub selected: bool,
}

impl From<&ProductCard<'_>> for CardView {
    fn from(card: &ProductCard<'_>) -> Self {
        let product = card.product();
        let state = card.state();
        let selected = card.selected_variant();

        let variants = product
            .variants
            .iter()
            .map(|variant| VariantOption {
                id: variant.id.to_string(),
                label: if variant.has_surcharge() {
                    format!("{} (+{})", variant.name, Price::usd(variant.price).display())
                } else {
                    variant.name.clone()
                },
                selected: selected.is_some_and(|s| s.id == variant.id),
            })
            .collect();

        Self {
            id: product.id.to_string(),
            path_id: path_segment(&product.id),
            title: product.title.clone(),
            description: product.description.clone(),
            image_url: product.image.to_string(),
            in_stock: product.in_stock,
            price: Price::usd(product.price).display(),
            surcharge: selected
                .filter(|v| v.has_surcharge())
                .map(|v| Price::usd(v.price).display()),
            variants,
            selected_variant: selected.map(|v| v.id.to_string()).unwrap_or_default(),
            is_wishlisted: state.is_wishlisted,
            image_loading: state.image_loading,
            heart_icon: Icon::Heart.render(&Icon::Heart.props().filled(state.is_wishlisted)),
            cart_icon: Icon::ShoppingCart.render_default(),
        }
    }
}

/// Card state as submitted by the card's form.
#[derive(Debug, Default, Deserialize)]
pub struct CardForm {
    pub selected_variant: Option<String>,
    #[serde(default)]
    pub wishlisted: bool,
    #[serde(default)]
    pub image_loading: bool,
    /// Variant requested from the dropdown.
    pub variant: Option<String>,
    /// Set when the image failed to load rather than finished loading.
    #[serde(default)]
    pub failed: bool,
}

impl CardForm {
    fn state_for(&self, product: &Product) -> CardState {
        CardState::restore(
            product,
            self.selected_variant.as_deref(),
            self.wishlisted,
            self.image_loading,
        )
    }
}

/// Card fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/product_card.html")]
pub struct CardTemplate {
    pub card: CardView,
}

/// Card fragment plus out-of-band notices (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/card_action.html")]
pub struct CardActionTemplate {
    pub card: CardView,
    pub toasts: Vec<Toast>,
}

/// Look up a showcased product by its path segment.
pub(crate) fn find_product<'s>(state: &'s AppState, id: &str) -> Result<&'s Product> {
    let Ok(product_id) = id.parse::<ProductId>();
    state
        .showcase()
        .find(&product_id)
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))
}

/// Select a variant from the dropdown.
#[instrument(skip(state, form))]
pub async fn select_variant(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<CardForm>,
) -> Result<CardTemplate> {
    let product = find_product(&state, &id)?;
    let mut card = ProductCard::new(product).with_state(form.state_for(product));

    if let Some(variant) = form.variant.as_deref() {
        if !card.select_variant(variant) {
            tracing::debug!(variant, "Ignoring unknown variant");
        }
    }

    Ok(CardTemplate {
        card: CardView::from(&card),
    })
}

/// Toggle the wishlist heart.
#[instrument(skip(state, form))]
pub async fn toggle_wishlist(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<CardForm>,
) -> Result<CardTemplate> {
    let product = find_product(&state, &id)?;
    let mut card = ProductCard::new(product).with_state(form.state_for(product));
    card.toggle_wishlist();

    Ok(CardTemplate {
        card: CardView::from(&card),
    })
}

/// The card image finished loading or failed to load.
#[instrument(skip(state, form))]
pub async fn image_settled(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<CardForm>,
) -> Result<CardTemplate> {
    let product = find_product(&state, &id)?;
    let mut card = ProductCard::new(product).with_state(form.state_for(product));

    if form.failed {
        tracing::debug!(product_id = %product.id, "Card image failed to load");
        card.image_failed();
    } else {
        card.image_loaded();
    }

    Ok(CardTemplate {
        card: CardView::from(&card),
    })
}

/// Add the card's product to the visitor's cart.
///
/// Returns the card fragment with notices, plus an `HX-Trigger` so the cart
/// badge refreshes when a line was added.
#[instrument(skip(state, session, form))]
pub async fn add_to_cart(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
    Form(form): Form<CardForm>,
) -> Result<Response> {
    let product = find_product(&state, &id)?;
    let mut mirror = load_cart_mirror(&session).await;
    let mut toasts = Toasts::default();

    // The card must not live across an await point.
    let (outcome, view) = {
        let card = ProductCard::new(product).with_state(form.state_for(product));
        let outcome = card.add_to_cart(&mut mirror, &mut toasts);
        (outcome, CardView::from(&card))
    };

    if mirror.is_dirty() {
        save_cart_mirror(&session, &mirror).await?;
    }

    let template = CardActionTemplate {
        card: view,
        toasts: toasts.into_vec(),
    };

    Ok(match outcome {
        AddToCart::Added => {
            add_breadcrumb("cart", "Added to cart", Some(&[("product_id", id.as_str())]));
            (AppendHeaders([("HX-Trigger", "cart-updated")]), template).into_response()
        }
        AddToCart::AlreadyInCart | AddToCart::OutOfStock => template.into_response(),
    })
}

/// Go straight to the product page with the current selection.
#[instrument(skip(state, form))]
pub async fn buy_now(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<CardForm>,
) -> Result<Response> {
    let product = find_product(&state, &id)?;
    let card_state = form.state_for(product);
    let mut navigator = HxNavigator::default();

    let outcome = {
        let mut handler = NavigateToProduct::new(&mut navigator);
        let mut card = ProductCard::new(product)
            .with_state(card_state.clone())
            .on_buy_now(&mut handler);
        card.buy_now()
    };

    match (outcome, navigator.redirect_header()) {
        (BuyNow::Dispatched, Some(header)) => {
            Ok((StatusCode::NO_CONTENT, [header]).into_response())
        }
        _ => {
            let card = ProductCard::new(product).with_state(card_state);
            Ok(CardTemplate {
                card: CardView::from(&card),
            }
            .into_response())
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::showcase::fallback_products;

    use super::*;

    #[test]
    fn test_card_view_for_variant_product() {
        let product = &fallback_products()[2];
        let mut card = ProductCard::new(product);
        card.select_variant("large");
        let view = CardView::from(&card);

        assert_eq!(view.id, "3");
        assert_eq!(view.price, "$29.99");
        assert_eq!(view.surcharge.as_deref(), Some("$2.00"));
        assert_eq!(view.selected_variant, "large");
        assert_eq!(view.variants.len(), 4);
        assert_eq!(view.variants[0].label, "Small");
        assert_eq!(view.variants[2].label, "Large (+$2.00)");
        assert!(view.variants[2].selected);
        assert!(!view.variants[0].selected);
    }

    #[test]
    fn test_card_view_zero_surcharge_hidden() {
        let product = &fallback_products()[2];
        let view = CardView::from(&ProductCard::new(product));
        assert_eq!(view.selected_variant, "small");
        assert!(view.surcharge.is_none());
    }

    #[test]
    fn test_card_view_without_variants() {
        let product = &fallback_products()[0];
        let view = CardView::from(&ProductCard::new(product));
        assert!(view.variants.is_empty());
        assert!(view.selected_variant.is_empty());
        assert!(view.image_loading);
        assert!(view.heart_icon.contains(r#"fill="none""#));
    }

    #[test]
    fn test_card_view_filled_heart_when_wishlisted() {
        let product = &fallback_products()[0];
        let mut card = ProductCard::new(product);
        card.toggle_wishlist();
        let view = CardView::from(&card);
        assert!(view.heart_icon.contains(r#"fill="currentColor""#));
    }

    #[test]
    fn test_out_of_stock_card_renders_disabled() {
        let product = &fallback_products()[1];
        let html = CardTemplate {
            card: CardView::from(&ProductCard::new(product)),
        }
        .render()
        .unwrap();

        assert!(html.contains("Out of Stock"));
        assert!(!html.contains("add-to-cart"));
        assert!(!html.contains("buy-now"));
        assert!(html.contains("/wishlist"));
    }

    #[test]
    fn test_variant_select_disabled_when_out_of_stock() {
        let mut product = fallback_products()[2].clone();
        product.in_stock = false;
        let html = CardTemplate {
            card: CardView::from(&ProductCard::new(&product)),
        }
        .render()
        .unwrap();

        assert!(html.contains("<select"));
        assert!(html.contains("disabled"));
    }

    #[test]
    fn test_loading_image_waits_for_dom_events() {
        let product = &fallback_products()[0];
        let html = CardTemplate {
            card: CardView::from(&ProductCard::new(product)),
        }
        .render()
        .unwrap();

        assert!(html.contains("data-card-image"));
        assert!(html.contains(r#"hx-trigger="image-loaded""#));
        assert!(html.contains(r#"hx-trigger="image-failed""#));
        assert!(!html.contains(r#"hx-trigger="load""#));
    }

    #[test]
    fn test_settled_image_has_no_triggers() {
        let product = &fallback_products()[0];
        let mut card = ProductCard::new(product);
        card.image_loaded();
        let html = CardTemplate {
            card: CardView::from(&card),
        }
        .render()
        .unwrap();

        assert!(!html.contains("data-card-image"));
        assert!(!html.contains("/cards/1/image"));
    }

    #[test]
    fn test_card_urls_encode_text_ids() {
        let mut product = fallback_products()[0].clone();
        product.id = ProductId::from("tees/organic");
        let view = CardView::from(&ProductCard::new(&product));
        assert_eq!(view.id, "tees/organic");
        assert_eq!(view.path_id, "tees%2Forganic");

        let html = CardTemplate { card: view }.render().unwrap();
        assert!(html.contains(r#"hx-post="/cards/tees%2Forganic/wishlist""#));
        assert!(html.contains(r#"href="/product/tees%2Forganic""#));
        assert!(!html.contains("/cards/tees/organic"));
    }
}
