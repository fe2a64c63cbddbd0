//! Cart route handlers.
//!
//! Cart mutations use HTMX fragments: each POST persists the updated cart
//! snapshot to the session (write-through), then returns the cart items
//! fragment plus an `HX-Trigger: cart-updated` header so the count badge
//! refreshes. Adding is the one exception - it is a plain form POST that
//! redirects to the cart page, matching the storefront's navigation flow.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    response::{AppendHeaders, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use royal_biryani_core::{Cart, CartLine};

use crate::catalog;
use crate::error::AppError;
use crate::filters;
use crate::models::session::{self, keys};

/// Cart line display data for templates.
#[derive(Clone)]
pub struct CartLineView {
    pub name: String,
    pub image: String,
    pub veg: bool,
    pub qty: u32,
    pub price: String,
    pub line_total: String,
}

impl From<&CartLine> for CartLineView {
    fn from(line: &CartLine) -> Self {
        Self {
            name: line.item.name.clone(),
            image: line.item.image.clone(),
            veg: line.item.veg,
            qty: line.qty,
            price: line.item.price.to_string(),
            line_total: line.line_total().to_string(),
        }
    }
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    pub subtotal: String,
    pub item_count: u32,
}

impl CartView {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            lines: cart.lines().iter().map(CartLineView::from).collect(),
            subtotal: cart.subtotal().to_string(),
            item_count: cart.item_count(),
        }
    }
}

/// Add-to-cart form data.
#[derive(Debug, Deserialize)]
pub struct AddForm {
    pub name: String,
}

/// Named-line form data (increment, decrement, remove).
#[derive(Debug, Deserialize)]
pub struct LineForm {
    pub name: String,
}

/// Set-quantity form data.
#[derive(Debug, Deserialize)]
pub struct UpdateForm {
    pub name: String,
    pub qty: u32,
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub cart: CartView,
}

/// Cart items fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_items.html")]
pub struct CartItemsTemplate {
    pub cart: CartView,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u32,
}

async fn load_cart(session: &Session) -> Cart {
    session::load_or_default(session, keys::CART).await
}

/// Display the cart page.
#[instrument(skip(session))]
pub async fn show(session: Session) -> impl IntoResponse {
    let cart = load_cart(&session).await;
    CartShowTemplate {
        cart: CartView::from(&cart),
    }
}

/// Add an item to the cart and redirect to the cart page.
///
/// The posted name is resolved against the catalog so the stored price is
/// server-authoritative. Unknown names are a 404.
#[instrument(skip(session))]
pub async fn add(session: Session, Form(form): Form<AddForm>) -> Result<Response, AppError> {
    let item = catalog::find(&form.name).ok_or_else(|| AppError::NotFound(form.name.clone()))?;

    let mut cart = load_cart(&session).await;
    cart.add(item);
    session::save(&session, keys::CART, &cart).await?;

    Ok(Redirect::to("/cart").into_response())
}

/// Render the items fragment with the cart-updated trigger.
fn cart_fragment(cart: &Cart) -> Response {
    (
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartItemsTemplate {
            cart: CartView::from(cart),
        },
    )
        .into_response()
}

/// Increment a line's quantity (HTMX).
#[instrument(skip(session))]
pub async fn increment(
    session: Session,
    Form(form): Form<LineForm>,
) -> Result<Response, AppError> {
    let mut cart = load_cart(&session).await;
    cart.increment(&form.name);
    session::save(&session, keys::CART, &cart).await?;
    Ok(cart_fragment(&cart))
}

/// Decrement a line's quantity, floored at 1 (HTMX).
#[instrument(skip(session))]
pub async fn decrement(
    session: Session,
    Form(form): Form<LineForm>,
) -> Result<Response, AppError> {
    let mut cart = load_cart(&session).await;
    cart.decrement(&form.name);
    session::save(&session, keys::CART, &cart).await?;
    Ok(cart_fragment(&cart))
}

/// Set a line's quantity, clamped to a minimum of 1 (HTMX).
#[instrument(skip(session))]
pub async fn update(session: Session, Form(form): Form<UpdateForm>) -> Result<Response, AppError> {
    let mut cart = load_cart(&session).await;
    cart.set_quantity(&form.name, form.qty);
    session::save(&session, keys::CART, &cart).await?;
    Ok(cart_fragment(&cart))
}

/// Remove a line from the cart (HTMX).
#[instrument(skip(session))]
pub async fn remove(session: Session, Form(form): Form<LineForm>) -> Result<Response, AppError> {
    let mut cart = load_cart(&session).await;
    cart.remove(&form.name);
    session::save(&session, keys::CART, &cart).await?;
    Ok(cart_fragment(&cart))
}

/// Get the cart count badge (HTMX).
#[instrument(skip(session))]
pub async fn count(session: Session) -> impl IntoResponse {
    let cart = load_cart(&session).await;
    CartCountTemplate {
        count: cart.item_count(),
    }
}
