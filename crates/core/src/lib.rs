//! Royal Biryani Core - Shared types library.
//!
//! This crate provides the common types used across the Royal Biryani Co.
//! storefront: menu items, the shopping cart and its mutation rules, and
//! validated customer-detail fields.
//!
//! # Architecture
//!
//! The core crate contains only types and their pure operations - no I/O,
//! no HTTP, no session access. Persistence of these types is owned by the
//! storefront crate, which serializes them as JSON snapshots.
//!
//! # Modules
//!
//! - [`types`] - Prices, menu items, the cart model, spice levels, and
//!   validated phone/pincode wrappers

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
