//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                            - Product showcase
//! GET  /health                      - Health check
//! GET  /product/{id}                - Product detail ("Buy now" target)
//! GET  /static/card-image.js        - Card image load/error bridge
//!
//! # Product cards (HTMX fragments)
//! POST /cards/{id}/variant          - Select a variant
//! POST /cards/{id}/wishlist         - Toggle wishlist heart
//! POST /cards/{id}/image            - Image finished loading or failed
//! POST /cards/{id}/add-to-cart      - Add to cart (triggers cart-updated)
//! POST /cards/{id}/buy-now          - Navigate to the product (HX-Redirect)
//!
//! # Cart
//! GET  /cart                        - Cart page
//! GET  /cart/count                  - Cart count badge (fragment)
//! ```
//!
//! Product ids appear percent-encoded as a single path segment.

pub mod cards;
pub mod cart;
pub mod home;
pub mod products;

use std::time::Duration;

use axum::{
    Router,
    http::{Request, Response, header},
    middleware::from_fn,
    response::IntoResponse,
    routing::{get, post},
};
use tower_http::trace::{DefaultOnResponse, OnResponse, TraceLayer};
use tracing::Span;

use crate::middleware::{
    create_session_layer, request_id_middleware, security_headers_middleware,
};
use crate::state::AppState;

/// Create the product card routes router.
pub fn card_routes() -> Router<AppState> {
    Router::new()
        .route("/{id}/variant", post(cards::select_variant))
        .route("/{id}/wishlist", post(cards::toggle_wishlist))
        .route("/{id}/image", post(cards::image_settled))
        .route("/{id}/add-to-cart", post(cards::add_to_cart))
        .route("/{id}/buy-now", post(cards::buy_now))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/count", get(cart::count))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/health", get(health))
        .route("/static/card-image.js", get(card_image_script))
        .route("/product/{id}", get(products::show))
        .nest("/cards", card_routes())
        .nest("/cart", cart_routes())
}

/// Build the full application with middleware and state applied.
///
/// Sentry layers are added by the binary on top of this.
pub fn app(state: AppState) -> Router {
    let session_layer = create_session_layer(state.config());

    routes()
        .layer(session_layer)
        .layer(from_fn(security_headers_middleware))
        .layer(from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = tracing::field::Empty,
                        status = tracing::field::Empty,
                        latency_ms = tracing::field::Empty,
                    )
                })
                .on_response(
                    |response: &Response<_>, latency: Duration, span: &Span| {
                        span.record("status", response.status().as_u16());
                        span.record(
                            "latency_ms",
                            u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
                        );
                        DefaultOnResponse::default().on_response(response, latency, span);
                    },
                ),
        )
        .with_state(state)
}

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Script forwarding card image `load`/`error` events to htmx.
async fn card_image_script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/javascript; charset=utf-8")],
        include_str!("../../static/card-image.js"),
    )
}
