//! The shopping cart model and its mutation rules.
//!
//! The cart is a short list of lines keyed by item name - at most one line
//! per distinct name, quantity always at least 1. Lookup, update, and
//! removal are linear scans; carts never hold more than a few dozen lines.
//!
//! These operations are pure. The storefront persists the cart as a JSON
//! snapshot after every mutation (write-through), so the in-memory value is
//! always a read of the persisted state.

use serde::{Deserialize, Serialize};

use crate::types::item::CatalogItem;
use crate::types::price::Price;

/// One cart line: a catalog item plus a quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// The catalog item, flattened into the line so the snapshot stores
    /// `{name, price, img, veg, ..., qty}` as a single object.
    #[serde(flatten)]
    pub item: CatalogItem,
    /// Quantity, never less than 1 while the line exists.
    pub qty: u32,
}

impl CartLine {
    /// New line for a freshly added item.
    #[must_use]
    pub const fn new(item: CatalogItem) -> Self {
        Self { item, qty: 1 }
    }

    /// Price times quantity for this line.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.item.price * self.qty
    }
}

/// The shopper's cart: an ordered list of lines keyed by item name.
///
/// Serialized transparently as a JSON array of lines, which is the shape
/// the `rbcart` snapshot has always had.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// The lines currently in the cart.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Consume the cart, yielding its lines.
    #[must_use]
    pub fn into_lines(self) -> Vec<CartLine> {
        self.lines
    }

    /// Whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add one unit of `item`.
    ///
    /// If a line with the same name exists its quantity is incremented;
    /// otherwise a new line with quantity 1 is appended.
    pub fn add(&mut self, item: CatalogItem) {
        match self.lines.iter_mut().find(|l| l.item.name == item.name) {
            Some(line) => line.qty += 1,
            None => self.lines.push(CartLine::new(item)),
        }
    }

    /// Set the quantity of the named line, clamped to a minimum of 1.
    ///
    /// Removal is a separate, explicit action on the cart page - setting
    /// quantity never deletes a line. Unknown names are ignored.
    pub fn set_quantity(&mut self, name: &str, qty: u32) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.item.name == name) {
            line.qty = qty.max(1);
        }
    }

    /// Increment the named line's quantity by 1.
    pub fn increment(&mut self, name: &str) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.item.name == name) {
            line.qty += 1;
        }
    }

    /// Decrement the named line's quantity by 1, flooring at 1.
    ///
    /// The checkout draft has the opposite policy (decrementing to zero
    /// removes the line); see the order model in the storefront crate.
    pub fn decrement(&mut self, name: &str) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.item.name == name) {
            line.qty = line.qty.saturating_sub(1).max(1);
        }
    }

    /// Remove the named line unconditionally.
    pub fn remove(&mut self, name: &str) {
        self.lines.retain(|l| l.item.name != name);
    }

    /// Sum of price times quantity over all lines. Always recomputed.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Sum of quantities over all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.qty).sum()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn item(name: &str, price: i64) -> CatalogItem {
        CatalogItem::new(name, price, "/static/images/test.jpg", false)
    }

    #[test]
    fn test_adding_same_item_twice_merges_lines() {
        let mut cart = Cart::default();
        cart.add(item("Dum Gosht Biryani", 329));
        cart.add(item("Dum Gosht Biryani", 329));

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].qty, 2);
    }

    #[test]
    fn test_add_distinct_items_appends() {
        let mut cart = Cart::default();
        cart.add(item("Raita", 49));
        cart.add(item("Butter Naan", 69));

        assert_eq!(cart.lines().len(), 2);
        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.subtotal(), Price::new(118));
    }

    #[test]
    fn test_decrement_floors_at_one() {
        let mut cart = Cart::default();
        cart.add(item("Phirni", 99));

        cart.decrement("Phirni");
        cart.decrement("Phirni");

        assert_eq!(cart.lines()[0].qty, 1);
        assert!(cart.lines().iter().all(|l| l.qty >= 1));
    }

    #[test]
    fn test_set_quantity_clamps_to_one() {
        let mut cart = Cart::default();
        cart.add(item("Paneer Tikka", 279));

        cart.set_quantity("Paneer Tikka", 0);
        assert_eq!(cart.lines()[0].qty, 1);

        cart.set_quantity("Paneer Tikka", 4);
        assert_eq!(cart.lines()[0].qty, 4);
    }

    #[test]
    fn test_mutations_on_unknown_name_are_ignored() {
        let mut cart = Cart::default();
        cart.add(item("Raita", 49));

        cart.increment("Masala Chaas");
        cart.decrement("Masala Chaas");
        cart.set_quantity("Masala Chaas", 5);
        cart.remove("Masala Chaas");

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].qty, 1);
    }

    #[test]
    fn test_full_cart_scenario() {
        // empty -> add X(100) -> inc -> dec twice -> remove
        let mut cart = Cart::default();
        assert!(cart.is_empty());

        cart.add(item("X", 100));
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].qty, 1);
        assert_eq!(cart.subtotal(), Price::new(100));

        cart.increment("X");
        assert_eq!(cart.lines()[0].qty, 2);
        assert_eq!(cart.subtotal(), Price::new(200));

        cart.decrement("X");
        cart.decrement("X");
        assert_eq!(cart.lines()[0].qty, 1);
        assert_eq!(cart.subtotal(), Price::new(100));

        cart.remove("X");
        assert!(cart.is_empty());
        assert_eq!(cart.subtotal(), Price::ZERO);
    }

    #[test]
    fn test_snapshot_shape_is_array_of_flat_lines() {
        let mut cart = Cart::default();
        cart.add(item("Gulab Jamun (2 pc)", 89));

        let json = serde_json::to_value(&cart).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["name"], "Gulab Jamun (2 pc)");
        assert_eq!(json[0]["qty"], 1);
        assert_eq!(json[0]["price"], 89);
    }

    #[test]
    fn test_unparsable_snapshot_is_an_error_callers_default() {
        // The storefront treats this Err as an empty cart.
        let parsed: Result<Cart, _> = serde_json::from_str("{\"not\":\"a cart\"}");
        assert!(parsed.is_err());
    }
}
