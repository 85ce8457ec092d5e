//! Product route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use tracing::instrument;

use crate::card::ProductCard;
use crate::error::Result;
use crate::filters;
use crate::routes::cards::{CardView, find_product};
use crate::state::AppState;

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub card: CardView,
}

/// Display product detail page.
///
/// This is where "Buy now" navigates to.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let product = find_product(&state, &id)?;

    Ok(ProductShowTemplate {
        card: CardView::from(&ProductCard::new(product)),
    })
}
