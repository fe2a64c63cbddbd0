//! Domain models for the storefront.

pub mod location;
pub mod order;
pub mod session;

pub use location::LocationPreference;
pub use order::{
    Charges, ConfirmedOrder, CustomerForm, DELIVERY_TAX, DraftNotReady, DraftOrder, DraftSnapshot,
    OrderLine,
};
