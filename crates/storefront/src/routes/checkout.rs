//! Checkout route handlers.
//!
//! Entering checkout rebuilds the draft from the cart: spice resets to the
//! default and the details form starts empty. Every edit after that is an
//! HTMX fragment POST that mutates the persisted draft snapshot and returns
//! the order panel, so the validity gate and bill summary stay current.
//!
//! Confirming swaps the in-progress snapshot for a final one under the same
//! key; a repeated confirm just re-shows the acknowledgement.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use royal_biryani_core::{Cart, SpiceLevel};

use crate::error::AppError;
use crate::filters;
use crate::models::order::{ConfirmedOrder, CustomerForm, DraftOrder, DraftSnapshot, OrderLine};
use crate::models::session::{self, keys};

/// One spice option in a line's select control.
pub struct SpiceOption {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// Draft line display data for templates.
pub struct OrderLineView {
    pub name: String,
    pub image: String,
    pub qty: u32,
    pub price: String,
    pub spice_options: Vec<SpiceOption>,
}

impl From<&OrderLine> for OrderLineView {
    fn from(line: &OrderLine) -> Self {
        Self {
            name: line.item.name.clone(),
            image: line.item.image.clone(),
            qty: line.qty,
            price: line.item.price.to_string(),
            spice_options: SpiceLevel::ALL
                .iter()
                .map(|level| SpiceOption {
                    value: level.as_str(),
                    label: level.label(),
                    selected: *level == line.spice,
                })
                .collect(),
        }
    }
}

/// Order panel display data: lines, bill summary, and the confirm gate.
pub struct OrderPanelView {
    pub lines: Vec<OrderLineView>,
    pub subtotal: String,
    pub tax: String,
    pub total: String,
    pub valid: bool,
}

impl OrderPanelView {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl From<&DraftOrder> for OrderPanelView {
    fn from(draft: &DraftOrder) -> Self {
        let charges = draft.charges();
        Self {
            lines: draft.lines.iter().map(OrderLineView::from).collect(),
            subtotal: charges.subtotal.to_string(),
            tax: charges.tax.to_string(),
            total: charges.total.to_string(),
            valid: draft.is_valid(),
        }
    }
}

/// Confirmed line display data.
pub struct ConfirmedLineView {
    pub name: String,
    pub qty: u32,
    pub spice: &'static str,
    pub line_total: String,
}

/// Acknowledgement page display data.
pub struct ConfirmedView {
    pub id: String,
    pub lines: Vec<ConfirmedLineView>,
    pub customer_name: String,
    pub address: String,
    pub subtotal: String,
    pub tax: String,
    pub total: String,
    pub placed_at: String,
}

impl From<&ConfirmedOrder> for ConfirmedView {
    fn from(order: &ConfirmedOrder) -> Self {
        let mut address = order.customer.address1.trim().to_owned();
        for part in [
            order.customer.address2.trim(),
            order.customer.city.trim(),
            order.customer.state.trim(),
            order.customer.pincode.trim(),
        ] {
            if !part.is_empty() {
                address.push_str(", ");
                address.push_str(part);
            }
        }

        Self {
            id: order.id.to_string(),
            lines: order
                .lines
                .iter()
                .map(|line| ConfirmedLineView {
                    name: line.item.name.clone(),
                    qty: line.qty,
                    spice: line.spice.label(),
                    line_total: line.line_total().to_string(),
                })
                .collect(),
            customer_name: order.customer.name.trim().to_owned(),
            address,
            subtotal: order.charges.subtotal.to_string(),
            tax: order.charges.tax.to_string(),
            total: order.charges.total.to_string(),
            placed_at: order.created_at.format("%d %b %Y, %H:%M UTC").to_string(),
        }
    }
}

/// Set-spice form data.
#[derive(Debug, Deserialize)]
pub struct SpiceForm {
    pub name: String,
    pub spice: SpiceLevel,
}

/// Adjust-quantity form data.
#[derive(Debug, Deserialize)]
pub struct QuantityForm {
    pub name: String,
    pub delta: i32,
}

/// Remove-line form data.
#[derive(Debug, Deserialize)]
pub struct RemoveForm {
    pub name: String,
}

/// Checkout page template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/show.html")]
pub struct CheckoutTemplate {
    pub panel: OrderPanelView,
    pub form: CustomerForm,
}

/// Order panel fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/order_panel.html")]
pub struct OrderPanelTemplate {
    pub panel: OrderPanelView,
}

/// Acknowledgement page template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/confirmed.html")]
pub struct ConfirmedTemplate {
    pub order: ConfirmedView,
}

/// Load the draft only if it is still in progress.
async fn load_in_progress(session: &Session) -> Option<DraftOrder> {
    match session::load::<DraftSnapshot>(session, keys::ORDER_DRAFT).await {
        Some(DraftSnapshot::InProgress(draft)) => Some(draft),
        _ => None,
    }
}

async fn save_draft(
    session: &Session,
    draft: DraftOrder,
) -> Result<OrderPanelTemplate, AppError> {
    let panel = OrderPanelView::from(&draft);
    session::save(session, keys::ORDER_DRAFT, &DraftSnapshot::InProgress(draft)).await?;
    Ok(OrderPanelTemplate { panel })
}

/// Display the checkout page.
///
/// The draft is rebuilt from the cart on every entry and persisted
/// immediately when non-empty, replacing whatever the draft key held.
#[instrument(skip(session))]
pub async fn show(session: Session) -> Result<Response, AppError> {
    let cart: Cart = session::load_or_default(&session, keys::CART).await;
    let draft = DraftOrder::from_cart(&cart);

    if !draft.is_empty() {
        session::save(
            &session,
            keys::ORDER_DRAFT,
            &DraftSnapshot::InProgress(draft.clone()),
        )
        .await?;
    }

    Ok(CheckoutTemplate {
        panel: OrderPanelView::from(&draft),
        form: draft.customer,
    }
    .into_response())
}

/// Save delivery details into the draft (HTMX).
#[instrument(skip(session, form))]
pub async fn details(
    session: Session,
    Form(form): Form<CustomerForm>,
) -> Result<OrderPanelTemplate, AppError> {
    let Some(mut draft) = load_in_progress(&session).await else {
        return Ok(OrderPanelTemplate {
            panel: OrderPanelView::from(&DraftOrder::default()),
        });
    };

    draft.set_customer(form);
    save_draft(&session, draft).await
}

/// Set a line's spice level (HTMX).
#[instrument(skip(session))]
pub async fn spice(
    session: Session,
    Form(form): Form<SpiceForm>,
) -> Result<OrderPanelTemplate, AppError> {
    let Some(mut draft) = load_in_progress(&session).await else {
        return Ok(OrderPanelTemplate {
            panel: OrderPanelView::from(&DraftOrder::default()),
        });
    };

    draft.set_spice(&form.name, form.spice);
    save_draft(&session, draft).await
}

/// Adjust a line's quantity; a result of zero or below removes it (HTMX).
#[instrument(skip(session))]
pub async fn quantity(
    session: Session,
    Form(form): Form<QuantityForm>,
) -> Result<OrderPanelTemplate, AppError> {
    let Some(mut draft) = load_in_progress(&session).await else {
        return Ok(OrderPanelTemplate {
            panel: OrderPanelView::from(&DraftOrder::default()),
        });
    };

    draft.adjust_quantity(&form.name, form.delta);
    save_draft(&session, draft).await
}

/// Remove a line from the draft (HTMX).
#[instrument(skip(session))]
pub async fn remove(
    session: Session,
    Form(form): Form<RemoveForm>,
) -> Result<OrderPanelTemplate, AppError> {
    let Some(mut draft) = load_in_progress(&session).await else {
        return Ok(OrderPanelTemplate {
            panel: OrderPanelView::from(&DraftOrder::default()),
        });
    };

    draft.remove_line(&form.name);
    save_draft(&session, draft).await
}

/// Finalize the draft.
///
/// A confirm against an already-confirmed snapshot re-shows the
/// acknowledgement without rewriting anything.
#[instrument(skip(session))]
pub async fn confirm(session: Session) -> Result<Response, AppError> {
    match session::load::<DraftSnapshot>(&session, keys::ORDER_DRAFT).await {
        Some(DraftSnapshot::Confirmed(_)) => Ok(Redirect::to("/checkout/confirmed").into_response()),
        Some(DraftSnapshot::InProgress(draft)) => match draft.confirm() {
            Ok(order) => {
                session::save(&session, keys::ORDER_DRAFT, &DraftSnapshot::Confirmed(order))
                    .await?;
                Ok(Redirect::to("/checkout/confirmed").into_response())
            }
            Err(e) => {
                // The confirm button is gated client-side; a direct POST with
                // an invalid draft just lands back on the checkout page.
                tracing::warn!("Rejected confirm: {e}");
                Ok(Redirect::to("/checkout").into_response())
            }
        },
        None => Ok(Redirect::to("/cart").into_response()),
    }
}

/// Display the acknowledgement page for a confirmed order.
#[instrument(skip(session))]
pub async fn confirmed(session: Session) -> Response {
    match session::load::<DraftSnapshot>(&session, keys::ORDER_DRAFT).await {
        Some(DraftSnapshot::Confirmed(order)) => ConfirmedTemplate {
            order: ConfirmedView::from(&order),
        }
        .into_response(),
        _ => Redirect::to("/checkout").into_response(),
    }
}
