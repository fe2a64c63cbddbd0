//! The checkout draft and the confirmed order it becomes.
//!
//! The draft is built from the cart when the shopper enters checkout and is
//! persisted after every edit (write-through under the draft key). Cart and
//! draft deliberately diverge on one rule: decrementing a cart line floors
//! at 1, while decrementing a draft line to zero removes it.
//!
//! Confirming replaces the in-progress snapshot with a final one under the
//! same key; [`DraftSnapshot`] models the two shapes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use royal_biryani_core::{Cart, CatalogItem, OrderId, Phone, Pincode, Price, SpiceLevel};

/// Flat delivery tax added to every order, in rupees.
pub const DELIVERY_TAX: Price = Price::new(200);

/// One draft line: a cart line plus a spice preference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    #[serde(flatten)]
    pub item: CatalogItem,
    pub qty: u32,
    /// Defaults to Medium for lines carried over from older snapshots
    /// that predate spice selection.
    #[serde(default)]
    pub spice: SpiceLevel,
}

impl OrderLine {
    /// Price times quantity for this line.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.item.price * self.qty
    }
}

/// Delivery details entered on the checkout page.
///
/// All fields are free text until validated; `is_complete` is the gate for
/// the confirm action. Field names match the persisted `form` object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address1: String,
    #[serde(default)]
    pub address2: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub pincode: String,
    #[serde(default)]
    pub allergies: String,
}

impl CustomerForm {
    /// Whether the form satisfies the confirm gate.
    ///
    /// Name, address line 1, city, and state must be non-blank after
    /// trimming; phone must be a valid Indian mobile number; pincode must
    /// be six digits. Email, address line 2, and allergies are optional.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && Phone::parse(&self.phone).is_ok()
            && !self.address1.trim().is_empty()
            && !self.city.trim().is_empty()
            && !self.state.trim().is_empty()
            && Pincode::parse(&self.pincode).is_ok()
    }
}

/// Itemized charges on the bill summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Charges {
    pub subtotal: Price,
    pub tax: Price,
    pub total: Price,
}

/// Why a draft cannot be confirmed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DraftNotReady {
    #[error("the order has no items")]
    Empty,
    #[error("delivery details are incomplete")]
    IncompleteDetails,
}

/// An in-progress checkout draft.
///
/// Serialized as `{"items": [...], "form": {...}}`, the in-progress shape
/// of the draft snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftOrder {
    #[serde(rename = "items")]
    pub lines: Vec<OrderLine>,
    #[serde(rename = "form", default)]
    pub customer: CustomerForm,
}

impl DraftOrder {
    /// Build a fresh draft from the cart.
    ///
    /// Every line starts at the default spice level and the form starts
    /// empty; entering checkout does not resume a previous draft.
    #[must_use]
    pub fn from_cart(cart: &Cart) -> Self {
        Self {
            lines: cart
                .lines()
                .iter()
                .map(|line| OrderLine {
                    item: line.item.clone(),
                    qty: line.qty,
                    spice: SpiceLevel::default(),
                })
                .collect(),
            customer: CustomerForm::default(),
        }
    }

    /// Whether the draft holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Set the spice level of the named line. Unknown names are ignored.
    pub fn set_spice(&mut self, name: &str, spice: SpiceLevel) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.item.name == name) {
            line.spice = spice;
        }
    }

    /// Adjust the named line's quantity by `delta`.
    ///
    /// A result of zero or below removes the line. This is the opposite of
    /// the cart page, which floors decrements at 1.
    pub fn adjust_quantity(&mut self, name: &str, delta: i32) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.item.name == name) {
            let next = i64::from(line.qty) + i64::from(delta);
            if next <= 0 {
                self.lines.retain(|l| l.item.name != name);
            } else {
                line.qty = u32::try_from(next).unwrap_or(u32::MAX);
            }
        }
    }

    /// Remove the named line unconditionally.
    pub fn remove_line(&mut self, name: &str) {
        self.lines.retain(|l| l.item.name != name);
    }

    /// Replace the delivery details.
    pub fn set_customer(&mut self, customer: CustomerForm) {
        self.customer = customer;
    }

    /// Sum of price times quantity over all lines.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.lines.iter().map(OrderLine::line_total).sum()
    }

    /// The bill summary: subtotal, flat tax, grand total.
    #[must_use]
    pub fn charges(&self) -> Charges {
        let subtotal = self.subtotal();
        Charges {
            subtotal,
            tax: DELIVERY_TAX,
            total: subtotal + DELIVERY_TAX,
        }
    }

    /// Whether the confirm gate is satisfied.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.lines.is_empty() && self.customer.is_complete()
    }

    /// Finalize the draft into a confirmed order.
    ///
    /// # Errors
    ///
    /// Returns [`DraftNotReady`] if the draft is empty or the delivery
    /// details do not pass validation.
    pub fn confirm(self) -> Result<ConfirmedOrder, DraftNotReady> {
        if self.lines.is_empty() {
            return Err(DraftNotReady::Empty);
        }
        if !self.customer.is_complete() {
            return Err(DraftNotReady::IncompleteDetails);
        }

        let charges = self.charges();
        Ok(ConfirmedOrder {
            id: OrderId::new(),
            lines: self.lines,
            customer: self.customer,
            charges,
            created_at: Utc::now(),
        })
    }
}

/// A confirmed order, the final shape under the draft key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfirmedOrder {
    pub id: OrderId,
    #[serde(rename = "items")]
    pub lines: Vec<OrderLine>,
    pub customer: CustomerForm,
    pub charges: Charges,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// The two shapes the draft key can hold.
///
/// `Confirmed` must stay first: a confirmed snapshot also satisfies the
/// in-progress shape (its extra fields would be ignored and the missing
/// `form` defaulted), so untagged matching tries the stricter shape first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DraftSnapshot {
    Confirmed(ConfirmedOrder),
    InProgress(DraftOrder),
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn cart_with(name: &str, price: i64, qty: u32) -> Cart {
        let mut cart = Cart::default();
        for _ in 0..qty {
            cart.add(CatalogItem::new(name, price, "/static/images/test.jpg", false));
        }
        cart
    }

    fn complete_form() -> CustomerForm {
        CustomerForm {
            name: "Asha Rao".to_owned(),
            phone: "9876543210".to_owned(),
            address1: "12 MG Road".to_owned(),
            city: "Bengaluru".to_owned(),
            state: "Karnataka".to_owned(),
            pincode: "560001".to_owned(),
            ..CustomerForm::default()
        }
    }

    #[test]
    fn test_from_cart_defaults_spice_to_medium() {
        let draft = DraftOrder::from_cart(&cart_with("Haleem Special", 299, 2));
        assert_eq!(draft.lines.len(), 1);
        assert_eq!(draft.lines[0].qty, 2);
        assert_eq!(draft.lines[0].spice, SpiceLevel::Medium);
        assert_eq!(draft.customer, CustomerForm::default());
    }

    #[test]
    fn test_adjust_quantity_removes_at_zero() {
        let mut draft = DraftOrder::from_cart(&cart_with("Raita", 49, 1));
        draft.adjust_quantity("Raita", -1);
        assert!(draft.is_empty());
    }

    #[test]
    fn test_adjust_quantity_up_and_down() {
        let mut draft = DraftOrder::from_cart(&cart_with("Butter Naan", 69, 1));
        draft.adjust_quantity("Butter Naan", 2);
        assert_eq!(draft.lines[0].qty, 3);
        draft.adjust_quantity("Butter Naan", -1);
        assert_eq!(draft.lines[0].qty, 2);
    }

    #[test]
    fn test_charges_add_flat_tax() {
        let draft = DraftOrder::from_cart(&cart_with("Dum Gosht Biryani", 329, 2));
        let charges = draft.charges();
        assert_eq!(charges.subtotal, Price::new(658));
        assert_eq!(charges.tax, Price::new(200));
        assert_eq!(charges.total, Price::new(858));
    }

    #[test]
    fn test_validation_rejects_bad_phone_and_pincode() {
        let mut draft = DraftOrder::from_cart(&cart_with("Phirni", 99, 1));

        let mut form = complete_form();
        form.phone = "1234567890".to_owned();
        draft.set_customer(form);
        assert!(!draft.is_valid());

        let mut form = complete_form();
        form.pincode = "5600".to_owned();
        draft.set_customer(form);
        assert!(!draft.is_valid());

        draft.set_customer(complete_form());
        assert!(draft.is_valid());
    }

    #[test]
    fn test_empty_draft_is_never_valid() {
        let mut draft = DraftOrder::default();
        draft.set_customer(complete_form());
        assert!(!draft.is_valid());
        assert_eq!(draft.confirm(), Err(DraftNotReady::Empty));
    }

    #[test]
    fn test_confirm_requires_complete_details() {
        let draft = DraftOrder::from_cart(&cart_with("Raita", 49, 1));
        assert_eq!(draft.confirm(), Err(DraftNotReady::IncompleteDetails));
    }

    #[test]
    fn test_confirm_captures_charges_and_timestamp() {
        let mut draft = DraftOrder::from_cart(&cart_with("Masala Chaas", 79, 3));
        draft.set_customer(complete_form());

        let order = draft.confirm().unwrap();
        assert_eq!(order.charges.subtotal, Price::new(237));
        assert_eq!(order.charges.total, Price::new(437));
        assert_eq!(order.customer.name, "Asha Rao");
    }

    #[test]
    fn test_in_progress_snapshot_shape() {
        let draft = DraftOrder::from_cart(&cart_with("Papad (2)", 29, 1));
        let json = serde_json::to_value(&draft).unwrap();

        assert!(json["items"].is_array());
        assert_eq!(json["items"][0]["name"], "Papad (2)");
        assert_eq!(json["items"][0]["spice"], "Medium");
        assert!(json["form"].is_object());
    }

    #[test]
    fn test_confirmed_snapshot_shape() {
        let mut draft = DraftOrder::from_cart(&cart_with("Raita", 49, 1));
        draft.set_customer(complete_form());
        let order = draft.confirm().unwrap();

        let json = serde_json::to_value(&order).unwrap();
        assert!(json["items"].is_array());
        assert!(json["customer"].is_object());
        assert_eq!(json["charges"]["tax"], 200);
        assert!(json["createdAt"].is_string());
    }

    #[test]
    fn test_snapshot_enum_distinguishes_shapes() {
        let draft = DraftOrder::from_cart(&cart_with("Raita", 49, 1));
        let json = serde_json::to_string(&DraftSnapshot::InProgress(draft)).unwrap();
        let back: DraftSnapshot = serde_json::from_str(&json).unwrap();
        assert!(matches!(back, DraftSnapshot::InProgress(_)));

        let mut draft = DraftOrder::from_cart(&cart_with("Raita", 49, 1));
        draft.set_customer(complete_form());
        let order = draft.confirm().unwrap();
        let json = serde_json::to_string(&DraftSnapshot::Confirmed(order)).unwrap();
        let back: DraftSnapshot = serde_json::from_str(&json).unwrap();
        assert!(matches!(back, DraftSnapshot::Confirmed(_)));
    }

    #[test]
    fn test_spice_defaults_when_missing_from_snapshot() {
        let json = r#"{"items":[{"name":"Raita","price":49,"img":"/i.jpg","veg":true,"qty":1}],"form":{}}"#;
        let draft: DraftOrder = serde_json::from_str(json).unwrap();
        assert_eq!(draft.lines[0].spice, SpiceLevel::Medium);
    }
}
