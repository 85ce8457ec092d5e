//! Core types for Shopfront.
//!
//! This module provides type-safe wrappers for catalog and cart concepts.

pub mod cart;
pub mod id;
pub mod price;
pub mod product;

pub use cart::CartLine;
pub use id::{ProductId, VariantId};
pub use price::{CurrencyCode, Price};
pub use product::{Product, Variant};
