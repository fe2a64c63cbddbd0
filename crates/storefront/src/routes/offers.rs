//! Offers page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;
use tracing::instrument;

use royal_biryani_core::CatalogItem;

use crate::catalog;
use crate::filters;

/// Offer card display data: an item card plus promotional badges.
pub struct OfferCardView {
    pub name: String,
    pub price: String,
    pub image: String,
    pub veg: bool,
    pub bogo: bool,
    pub tag: Option<String>,
    /// Struck-through pre-discount price.
    pub original_price: Option<String>,
}

impl From<&CatalogItem> for OfferCardView {
    fn from(item: &CatalogItem) -> Self {
        Self {
            name: item.name.clone(),
            price: item.price.to_string(),
            image: item.image.clone(),
            veg: item.veg,
            bogo: item.bogo,
            tag: item.tag.clone(),
            original_price: item.original_price.map(|p| p.to_string()),
        }
    }
}

/// Offers page template.
#[derive(Template, WebTemplate)]
#[template(path = "offers.html")]
pub struct OffersTemplate {
    pub offers: Vec<OfferCardView>,
}

/// Display the offers page.
#[instrument]
pub async fn show() -> impl IntoResponse {
    OffersTemplate {
        offers: catalog::offers().iter().map(OfferCardView::from).collect(),
    }
}
