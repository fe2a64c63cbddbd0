//! Session persistence for shopper state.
//!
//! The session is the shopper's durable key-value store. Three keys hold
//! JSON snapshots: the cart, the checkout draft, and the location
//! preference. Every mutation writes the whole snapshot back (write-through),
//! so handlers always operate on a fresh read of persisted state.
//!
//! Reads degrade: a missing or unparsable snapshot yields the default value
//! and a warning, never an error response. Writes propagate errors.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tower_sessions::Session;

/// Session keys for shopper state.
pub mod keys {
    /// Cart snapshot: a JSON array of cart lines.
    pub const CART: &str = "rbcart";

    /// Checkout draft snapshot: in-progress `{items, form}` or a confirmed
    /// order.
    pub const ORDER_DRAFT: &str = "rborder_draft";

    /// Location preference: `{label, lat?, lon?}`.
    pub const LOCATION: &str = "rblocation";
}

/// Load a snapshot, or `None` if absent or unreadable.
///
/// Deserialization failures are logged and treated as absence.
pub async fn load<T: DeserializeOwned>(session: &Session, key: &str) -> Option<T> {
    match session.get::<T>(key).await {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(key, "Failed to read session snapshot: {e}");
            None
        }
    }
}

/// Load a snapshot, falling back to the type's default.
pub async fn load_or_default<T: DeserializeOwned + Default>(session: &Session, key: &str) -> T {
    load(session, key).await.unwrap_or_default()
}

/// Write a snapshot back to the session.
///
/// # Errors
///
/// Returns an error if the session store rejects the write.
pub async fn save<T: Serialize>(
    session: &Session,
    key: &str,
    value: &T,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(key, value).await
}
