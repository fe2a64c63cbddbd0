//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page (popular items, location widget)
//! GET  /menu                   - Full menu by category
//! GET  /offers                 - Offers page (BOGO, combos, discounts)
//! GET  /health                 - Health check
//!
//! # Cart (HTMX fragments)
//! GET  /cart                   - Cart page
//! POST /cart/add               - Add item by name, redirect to /cart
//! POST /cart/increment         - Quantity +1 (returns cart_items fragment)
//! POST /cart/decrement         - Quantity -1, floored at 1 (fragment)
//! POST /cart/update            - Set quantity, clamped to 1 (fragment)
//! POST /cart/remove            - Remove line (fragment)
//! GET  /cart/count             - Cart count badge (fragment)
//!
//! # Checkout (HTMX fragments against the draft snapshot)
//! GET  /checkout               - Checkout page, draft rebuilt from cart
//! POST /checkout/details       - Save delivery details (order_panel fragment)
//! POST /checkout/spice         - Set line spice level (fragment)
//! POST /checkout/quantity      - Adjust line quantity; <= 0 removes (fragment)
//! POST /checkout/remove        - Remove line (fragment)
//! POST /checkout/confirm       - Finalize, redirect to /checkout/confirmed
//! GET  /checkout/confirmed     - Order acknowledgement page
//!
//! # Location
//! POST /location               - Reverse-geocode posted coordinates (fragment)
//! POST /location/manual        - Save a manually entered label (fragment)
//! ```

pub mod cart;
pub mod checkout;
pub mod home;
pub mod location;
pub mod menu;
pub mod offers;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/increment", post(cart::increment))
        .route("/decrement", post(cart::decrement))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/count", get(cart::count))
}

/// Create the checkout routes router.
pub fn checkout_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(checkout::show))
        .route("/details", post(checkout::details))
        .route("/spice", post(checkout::spice))
        .route("/quantity", post(checkout::quantity))
        .route("/remove", post(checkout::remove))
        .route("/confirm", post(checkout::confirm))
        .route("/confirmed", get(checkout::confirmed))
}

/// Create the location routes router.
pub fn location_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(location::locate))
        .route("/manual", post(location::manual))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/menu", get(menu::show))
        .route("/offers", get(offers::show))
        .nest("/cart", cart_routes())
        .nest("/checkout", checkout_routes())
        .nest("/location", location_routes())
}
