//! Product card state and user intents.
//!
//! A card shows one [`Product`] and owns three independent pieces of
//! ephemeral state ([`CardState`]): the selected variant, the wishlist flag
//! and whether the image is still loading. Each changes only through its own
//! transition. The card exposes two purchase intents:
//!
//! - **Add to cart** builds a [`CartLine`], rejects it if the cart already
//!   holds the same line and otherwise hands it to the [`CartStore`].
//! - **Buy now** builds the same line and passes it to a [`BuyNowHandler`]
//!   without touching the cart.
//!
//! Both intents are inert for out-of-stock products.
//!
//! Cards are rendered server-side, so the state travels with each HTMX
//! request as form fields and is rebuilt with [`CardState::restore`].

use serde::{Deserialize, Serialize};
use shopfront_core::{CartLine, Product, Variant, VariantId};

use crate::cart::{CartStore, contains_line, lines_or_empty};
use crate::notify::Notifier;

/// Ephemeral per-card UI state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardState {
    /// Always an element of the product's variants when set.
    pub selected_variant: Option<VariantId>,
    pub is_wishlisted: bool,
    pub image_loading: bool,
}

impl CardState {
    /// Initial state for a freshly shown card.
    #[must_use]
    pub fn for_product(product: &Product) -> Self {
        Self {
            selected_variant: product.default_variant().map(|v| v.id.clone()),
            is_wishlisted: false,
            image_loading: true,
        }
    }

    /// Rebuild a state submitted back by the browser.
    ///
    /// A submitted variant that does not belong to `product` is replaced by
    /// the product's default variant.
    #[must_use]
    pub fn restore(
        product: &Product,
        selected_variant: Option<&str>,
        is_wishlisted: bool,
        image_loading: bool,
    ) -> Self {
        let selected_variant = selected_variant
            .and_then(|id| product.variant(id))
            .or_else(|| product.default_variant())
            .map(|v| v.id.clone());

        Self {
            selected_variant,
            is_wishlisted,
            image_loading,
        }
    }

    /// Select the variant with `id`.
    ///
    /// Returns `false` and leaves the state unchanged when `product` has no
    /// such variant.
    pub fn select_variant(&mut self, product: &Product, id: &str) -> bool {
        match product.variant(id) {
            Some(variant) => {
                self.selected_variant = Some(variant.id.clone());
                true
            }
            None => false,
        }
    }

    pub const fn toggle_wishlist(&mut self) {
        self.is_wishlisted = !self.is_wishlisted;
    }

    pub const fn image_loaded(&mut self) {
        self.image_loading = false;
    }

    /// Load failures are not surfaced; the placeholder is simply dropped.
    pub const fn image_failed(&mut self) {
        self.image_loading = false;
    }
}

/// Result of an add-to-cart intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddToCart {
    Added,
    AlreadyInCart,
    OutOfStock,
}

/// Result of a buy-now intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuyNow {
    Dispatched,
    NoHandler,
    OutOfStock,
}

/// Receives the candidate line when the visitor chooses "Buy now".
pub trait BuyNowHandler {
    fn buy_now(&mut self, line: &CartLine);
}

impl<F> BuyNowHandler for F
where
    F: FnMut(&CartLine),
{
    fn buy_now(&mut self, line: &CartLine) {
        self(line);
    }
}

/// A product card: one product, its UI state and an optional buy-now handler.
pub struct ProductCard<'a> {
    product: &'a Product,
    state: CardState,
    on_buy_now: Option<&'a mut dyn BuyNowHandler>,
}

impl std::fmt::Debug for ProductCard<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProductCard")
            .field("product", &self.product.id)
            .field("state", &self.state)
            .field("on_buy_now", &self.on_buy_now.is_some())
            .finish()
    }
}

impl<'a> ProductCard<'a> {
    /// A card in its initial state.
    #[must_use]
    pub fn new(product: &'a Product) -> Self {
        Self {
            product,
            state: CardState::for_product(product),
            on_buy_now: None,
        }
    }

    /// Resume from a previously rendered state.
    #[must_use]
    pub fn with_state(mut self, state: CardState) -> Self {
        self.state = state;
        self
    }

    /// Attach the buy-now handler.
    #[must_use]
    pub fn on_buy_now(mut self, handler: &'a mut dyn BuyNowHandler) -> Self {
        self.on_buy_now = Some(handler);
        self
    }

    #[must_use]
    pub const fn product(&self) -> &'a Product {
        self.product
    }

    #[must_use]
    pub const fn state(&self) -> &CardState {
        &self.state
    }

    #[must_use]
    pub fn into_state(self) -> CardState {
        self.state
    }

    /// The currently selected variant record.
    #[must_use]
    pub fn selected_variant(&self) -> Option<&'a Variant> {
        let id = self.state.selected_variant.as_ref()?;
        self.product.variant(id.as_str())
    }

    /// See [`CardState::select_variant`].
    pub fn select_variant(&mut self, id: &str) -> bool {
        self.state.select_variant(self.product, id)
    }

    pub const fn toggle_wishlist(&mut self) {
        self.state.toggle_wishlist();
    }

    pub const fn image_loaded(&mut self) {
        self.state.image_loaded();
    }

    pub const fn image_failed(&mut self) {
        self.state.image_failed();
    }

    /// The product merged with the selected variant, if any.
    #[must_use]
    pub fn candidate_line(&self) -> CartLine {
        CartLine::new(self.product.clone(), self.selected_variant().cloned())
    }

    /// Add the candidate line to `cart` unless it is already there.
    ///
    /// An unreadable cart counts as empty, so the add proceeds.
    pub fn add_to_cart(
        &self,
        cart: &mut dyn CartStore,
        notifier: &mut dyn Notifier,
    ) -> AddToCart {
        if !self.product.in_stock {
            return AddToCart::OutOfStock;
        }

        let candidate = self.candidate_line();
        if contains_line(&lines_or_empty(cart), &candidate) {
            notifier.notify_error(&format!(
                "{} is already in your cart!",
                self.product.title
            ));
            return AddToCart::AlreadyInCart;
        }

        tracing::info!(
            product_id = %self.product.id,
            variant_id = ?candidate.selected_variant.as_ref().map(|v| v.id.as_str()),
            "Adding to cart"
        );
        cart.add(candidate);
        notifier.notify_success(&format!("{} added to cart!", self.product.title));
        AddToCart::Added
    }

    /// Pass the candidate line to the buy-now handler.
    pub fn buy_now(&mut self) -> BuyNow {
        if !self.product.in_stock {
            return BuyNow::OutOfStock;
        }
        let line = self.candidate_line();
        match self.on_buy_now.as_deref_mut() {
            Some(handler) => {
                handler.buy_now(&line);
                BuyNow::Dispatched
            }
            None => BuyNow::NoHandler,
        }
    }
}
