//! Shopfront Core - Shared types library.
//!
//! This crate provides the catalog and cart types used by the storefront:
//! - [`Product`] and [`Variant`] as supplied by a catalog
//! - [`CartLine`], a product paired with an optional chosen variant
//! - [`Price`] for display formatting
//!
//! # Architecture
//!
//! The core crate contains only types and pure logic - no I/O, no HTTP, no
//! session access. The cart-line equality rule lives here so every cart
//! backend applies the same duplicate check.
//!
//! # Modules
//!
//! - [`types`] - Ids, prices, products and cart lines

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
