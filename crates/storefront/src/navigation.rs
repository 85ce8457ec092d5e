//! Page navigation requested by UI actions.
//!
//! Handlers run inside an HTMX request, so "navigate" means telling the
//! browser where to go next via the `HX-Redirect` response header.

use axum::http::{HeaderName, HeaderValue};

/// Response header HTMX follows with a full page navigation.
pub const HX_REDIRECT: HeaderName = HeaderName::from_static("hx-redirect");

/// Navigation sink.
pub trait Navigator {
    fn navigate_to(&mut self, path: &str);
}

/// Records the last requested navigation for the current request.
#[derive(Debug, Clone, Default)]
pub struct HxNavigator {
    target: Option<String>,
}

impl HxNavigator {
    /// The path navigation was requested to, if any.
    #[must_use]
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    /// `HX-Redirect` header for the recorded target.
    ///
    /// Returns `None` when nothing was requested or the path is not a valid
    /// header value.
    #[must_use]
    pub fn redirect_header(&self) -> Option<(HeaderName, HeaderValue)> {
        let target = self.target.as_deref()?;
        HeaderValue::from_str(target)
            .ok()
            .map(|value| (HX_REDIRECT, value))
    }
}

impl Navigator for HxNavigator {
    fn navigate_to(&mut self, path: &str) {
        tracing::debug!(path, "navigation requested");
        self.target = Some(path.to_string());
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_no_navigation_no_header() {
        let nav = HxNavigator::default();
        assert!(nav.target().is_none());
        assert!(nav.redirect_header().is_none());
    }

    #[test]
    fn test_navigation_becomes_hx_redirect() {
        let mut nav = HxNavigator::default();
        nav.navigate_to("/product/3");

        let (name, value) = nav.redirect_header().unwrap();
        assert_eq!(name, HX_REDIRECT);
        assert_eq!(value.to_str().unwrap(), "/product/3");
    }

    #[test]
    fn test_invalid_header_value_is_dropped() {
        let mut nav = HxNavigator::default();
        nav.navigate_to("/product/bad\nid");
        assert_eq!(nav.target(), Some("/product/bad\nid"));
        assert!(nav.redirect_header().is_none());
    }
}
