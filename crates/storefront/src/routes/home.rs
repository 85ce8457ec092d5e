//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use crate::filters;
use crate::routes::cards::CardView;
use crate::showcase::ProductShowcase;
use crate::state::AppState;

/// Showcase page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub title: String,
    pub subtitle: String,
    pub cards: Vec<CardView>,
}

impl From<&ProductShowcase> for HomeTemplate {
    fn from(showcase: &ProductShowcase) -> Self {
        Self {
            title: showcase.title().to_string(),
            subtitle: showcase.subtitle().to_string(),
            cards: showcase.cards().map(|card| CardView::from(&card)).collect(),
        }
    }
}

/// Display the product showcase.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> impl IntoResponse {
    HomeTemplate::from(state.showcase())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::showcase::DEFAULT_TITLE;

    #[test]
    fn test_fallback_showcase_renders_three_cards() {
        let page = HomeTemplate::from(&ProductShowcase::new());
        assert_eq!(page.cards.len(), 3);
        assert_eq!(page.title, DEFAULT_TITLE);

        let html = page.render().unwrap();
        assert_eq!(html.matches("class=\"product-card-slot\"").count(), 3);
    }

    #[test]
    fn test_empty_showcase_renders_no_cards() {
        let page = HomeTemplate::from(&ProductShowcase::new().with_products(Vec::new()));
        assert!(page.cards.is_empty());

        let html = page.render().unwrap();
        assert!(!html.contains("class=\"product-card-slot\""));
    }
}
