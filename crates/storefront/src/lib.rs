//! Shopfront storefront library.
//!
//! This crate provides the product showcase as a library, allowing it to be
//! tested and reused. The binary in `main.rs` only wires up observability and
//! serves [`routes::app`].

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod card;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod filters;
pub mod icons;
pub mod middleware;
pub mod models;
pub mod navigation;
pub mod notify;
pub mod routes;
pub mod showcase;
pub mod state;
