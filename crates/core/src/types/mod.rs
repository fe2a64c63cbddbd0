//! Core types for the Royal Biryani Co. storefront.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod cart;
pub mod id;
pub mod item;
pub mod phone;
pub mod pincode;
pub mod price;
pub mod spice;

pub use cart::{Cart, CartLine};
pub use id::OrderId;
pub use item::CatalogItem;
pub use phone::{Phone, PhoneError};
pub use pincode::{Pincode, PincodeError};
pub use price::Price;
pub use spice::{SpiceLevel, SpiceLevelError};
