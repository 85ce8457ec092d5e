//! Session-related types.

/// Session keys.
pub mod keys {
    /// Key for the visitor's cart mirror (JSON text of `CartLine`s).
    pub const CART: &str = "cart";
}
