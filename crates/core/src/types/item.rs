//! Menu item as defined in the static catalog.

use serde::{Deserialize, Serialize};

use crate::types::price::Price;

/// A purchasable menu item.
///
/// The item name is the identity key: the catalog guarantees names are
/// unique and the cart holds at most one line per name. Serde field names
/// match the persisted snapshot format (`img`, `originalPrice`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Unique display name; used as the cart identity key.
    pub name: String,
    /// Price in whole rupees, inclusive of taxes shown on the menu.
    pub price: Price,
    /// Image path under `/static/images`.
    #[serde(rename = "img")]
    pub image: String,
    /// Vegetarian flag for the veg/non-veg badge.
    pub veg: bool,
    /// Promotional tag, e.g. "Best Seller" or "₹50 OFF".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    /// Buy-one-get-one offer flag.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub bogo: bool,
    /// Pre-discount price, shown struck through on offer cards.
    #[serde(
        rename = "originalPrice",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub original_price: Option<Price>,
}

impl CatalogItem {
    /// Plain item with no promotional metadata.
    #[must_use]
    pub fn new(name: &str, price: i64, image: &str, veg: bool) -> Self {
        Self {
            name: name.to_owned(),
            price: Price::new(price),
            image: image.to_owned(),
            veg,
            tag: None,
            bogo: false,
            original_price: None,
        }
    }

    /// Attach a promotional tag.
    #[must_use]
    pub fn tagged(mut self, tag: &str) -> Self {
        self.tag = Some(tag.to_owned());
        self
    }

    /// Mark as a buy-one-get-one offer.
    #[must_use]
    pub const fn buy_one_get_one(mut self) -> Self {
        self.bogo = true;
        self
    }

    /// Attach a struck-through original price.
    #[must_use]
    pub const fn discounted_from(mut self, original: i64) -> Self {
        self.original_price = Some(Price::new(original));
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_field_names() {
        let item = CatalogItem::new("Raita", 49, "/static/images/menu-side-raita.jpg", true);
        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(json["img"], "/static/images/menu-side-raita.jpg");
        assert_eq!(json["price"], 49);
        assert_eq!(json["veg"], true);
        // Absent promo fields are omitted entirely
        assert!(json.get("tag").is_none());
        assert!(json.get("originalPrice").is_none());
        assert!(json.get("bogo").is_none());
    }

    #[test]
    fn test_discounted_item_keeps_original_price() {
        let item = CatalogItem::new("Shahi Biryani (Serves 2)", 529, "/img.jpg", false)
            .tagged("₹50 OFF")
            .discounted_from(579);

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["originalPrice"], 579);

        let back: CatalogItem = serde_json::from_value(json).unwrap();
        assert_eq!(back, item);
    }
}
