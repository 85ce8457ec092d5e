//! Inline SVG icon set.
//!
//! Stroke icons on a 24x24 grid drawn in `currentColor`, so they inherit the
//! surrounding text color. Heart and Star can be drawn filled.

use askama::Template;

/// Available icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    ShoppingCart,
    ChevronDown,
    Heart,
    Star,
    Eye,
    Plus,
    Minus,
    Check,
    X,
    Search,
    Filter,
    User,
    CreditCard,
    Truck,
    Package,
}

/// Size, fill and CSS class for a rendered icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconProps {
    pub width: u32,
    pub height: u32,
    /// Only honored by [`Icon::Heart`] and [`Icon::Star`].
    pub filled: bool,
    pub class: String,
}

impl IconProps {
    /// Square icon of `size` pixels.
    #[must_use]
    pub fn sized(size: u32) -> Self {
        Self {
            width: size,
            height: size,
            filled: false,
            class: String::new(),
        }
    }

    #[must_use]
    pub const fn filled(mut self, filled: bool) -> Self {
        self.filled = filled;
        self
    }

    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }
}

#[derive(Template)]
#[template(path = "partials/icon.html")]
struct IconTemplate<'a> {
    width: u32,
    height: u32,
    fill: &'static str,
    class: &'a str,
    shapes: &'static str,
}

impl Icon {
    /// Every icon in the set.
    pub const ALL: [Self; 15] = [
        Self::ShoppingCart,
        Self::ChevronDown,
        Self::Heart,
        Self::Star,
        Self::Eye,
        Self::Plus,
        Self::Minus,
        Self::Check,
        Self::X,
        Self::Search,
        Self::Filter,
        Self::User,
        Self::CreditCard,
        Self::Truck,
        Self::Package,
    ];

    /// Default edge length in pixels.
    #[must_use]
    pub const fn default_size(self) -> u32 {
        match self {
            Self::Heart => 18,
            _ => 16,
        }
    }

    /// Default props for this icon.
    #[must_use]
    pub fn props(self) -> IconProps {
        IconProps::sized(self.default_size())
    }

    /// Whether the icon honors [`IconProps::filled`].
    #[must_use]
    pub const fn supports_fill(self) -> bool {
        matches!(self, Self::Heart | Self::Star)
    }

    /// SVG child elements.
    const fn shapes(self) -> &'static str {
        match self {
            Self::ShoppingCart => {
                r#"<circle cx="9" cy="21" r="1"></circle><circle cx="20" cy="21" r="1"></circle><path d="m1 1 4 4 2 14h12"></path>"#
            }
            Self::ChevronDown => r#"<path d="m6 9 6 6 6-6"></path>"#,
            Self::Heart => {
                r#"<path d="M20.84 4.61a5.5 5.5 0 0 0-7.78 0L12 5.67l-1.06-1.06a5.5 5.5 0 0 0-7.78 7.78l1.06 1.06L12 21.23l7.78-7.78 1.06-1.06a5.5 5.5 0 0 0 0-7.78z"></path>"#
            }
            Self::Star => {
                r#"<polygon points="12,2 15.09,8.26 22,9.27 17,14.14 18.18,21.02 12,17.77 5.82,21.02 7,14.14 2,9.27 8.91,8.26"></polygon>"#
            }
            Self::Eye => {
                r#"<path d="M1 12s4-8 11-8 11 8 11 8-4 8-11 8-11-8-11-8z"></path><circle cx="12" cy="12" r="3"></circle>"#
            }
            Self::Plus => r#"<path d="M12 5v14m-7-7h14"></path>"#,
            Self::Minus => r#"<path d="M5 12h14"></path>"#,
            Self::Check => r#"<path d="M20 6L9 17l-5-5"></path>"#,
            Self::X => r#"<path d="M18 6L6 18M6 6l12 12"></path>"#,
            Self::Search => {
                r#"<circle cx="11" cy="11" r="8"></circle><path d="m21 21-4.35-4.35"></path>"#
            }
            Self::Filter => {
                r#"<polygon points="22,3 2,3 10,12.46 10,19 14,21 14,12.46"></polygon>"#
            }
            Self::User => {
                r#"<path d="M20 21v-2a4 4 0 0 0-4-4H8a4 4 0 0 0-4 4v2"></path><circle cx="12" cy="7" r="4"></circle>"#
            }
            Self::CreditCard => {
                r#"<rect x="1" y="4" width="22" height="16" rx="2" ry="2"></rect><line x1="1" y1="10" x2="23" y2="10"></line>"#
            }
            Self::Truck => {
                r#"<rect x="1" y="3" width="15" height="13"></rect><polygon points="16,8 20,8 23,11 23,16 16,16"></polygon><circle cx="5.5" cy="18.5" r="2.5"></circle><circle cx="18.5" cy="18.5" r="2.5"></circle>"#
            }
            Self::Package => {
                r#"<line x1="16.5" y1="9.4" x2="7.5" y2="4.21"></line><path d="M21 16V8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73l7 4a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16z"></path><polyline points="3.27,6.96 12,12.01 20.73,6.96"></polyline><line x1="12" y1="22.08" x2="12" y2="12"></line>"#
            }
        }
    }

    /// Render the icon as inline SVG markup.
    #[must_use]
    pub fn render(self, props: &IconProps) -> String {
        let fill = if props.filled && self.supports_fill() {
            "currentColor"
        } else {
            "none"
        };

        IconTemplate {
            width: props.width,
            height: props.height,
            fill,
            class: &props.class,
            shapes: self.shapes(),
        }
        .render()
        .unwrap_or_else(|e| {
            tracing::warn!(icon = ?self, error = %e, "Failed to render icon");
            String::new()
        })
    }

    /// Render with default props.
    #[must_use]
    pub fn render_default(self) -> String {
        self.render(&self.props())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_icon_renders_svg() {
        for icon in Icon::ALL {
            let svg = icon.render_default();
            assert!(svg.starts_with("<svg"), "{icon:?}: {svg}");
            assert!(svg.contains(r#"viewBox="0 0 24 24""#));
            assert!(svg.trim_end().ends_with("</svg>"));
        }
    }

    #[test]
    fn test_default_sizes() {
        assert!(Icon::Heart.render_default().contains(r#"width="18""#));
        assert!(Icon::ShoppingCart.render_default().contains(r#"height="16""#));
    }

    #[test]
    fn test_filled_only_applies_to_heart_and_star() {
        let filled = IconProps::sized(16).filled(true);
        assert!(Icon::Heart.render(&filled).contains(r#"fill="currentColor""#));
        assert!(Icon::Star.render(&filled).contains(r#"fill="currentColor""#));
        assert!(Icon::Check.render(&filled).contains(r#"fill="none""#));
        assert!(Icon::Heart.render_default().contains(r#"fill="none""#));
    }

    #[test]
    fn test_class_is_escaped() {
        let props = IconProps::sized(16).class(r#"x" onload="alert(1)"#);
        let svg = Icon::Eye.render(&props);
        assert!(!svg.contains(r#"onload="alert"#));
    }
}
