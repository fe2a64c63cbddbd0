//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;
use tower_sessions::Session;
use tracing::instrument;

use royal_biryani_core::CatalogItem;

use crate::catalog;
use crate::filters;
use crate::models::LocationPreference;
use crate::models::session::{self, keys};
use crate::routes::menu::ItemCardView;

/// A hero stat tile (cities, rating, hygiene, delivery time).
pub struct StatTile {
    pub value: &'static str,
    pub label: &'static str,
}

/// A unique-selling-point tile.
pub struct UspTile {
    pub title: &'static str,
    pub detail: &'static str,
    pub image: &'static str,
}

/// An FAQ entry.
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
    pub image: &'static str,
}

fn stat_tiles() -> Vec<StatTile> {
    vec![
        StatTile { value: "> 50", label: "Cities" },
        StatTile { value: "4.4★", label: "Rating" },
        StatTile { value: "100%", label: "Hygiene" },
        StatTile { value: "30–40m", label: "Delivery" },
    ]
}

fn usp_tiles() -> Vec<UspTile> {
    vec![
        UspTile {
            title: "Dum-Pukht",
            detail: "Sealed handi, slow-cooked for depth",
            image: "/static/images/usp-dum.jpg",
        },
        UspTile {
            title: "Aged Basmati",
            detail: "Long grains, airy & aromatic",
            image: "/static/images/usp-rice.jpg",
        },
        UspTile {
            title: "No Added Colors",
            detail: "Only saffron & spice",
            image: "/static/images/usp-natural.jpg",
        },
        UspTile {
            title: "Tamper-proof",
            detail: "Sealed, spill-safe packaging",
            image: "/static/images/usp-packaging.jpg",
        },
    ]
}

fn faq_entries() -> Vec<FaqEntry> {
    vec![
        FaqEntry {
            question: "Do you deliver to my area?",
            answer: "We deliver across most neighborhoods in major cities. Use 'Locate Me' to auto-detect coverage.",
            image: "/static/images/faq-delivery.jpg",
        },
        FaqEntry {
            question: "Is packaging spill-proof?",
            answer: "Yes. Every handi is sealed and boxed to arrive hot and intact.",
            image: "/static/images/faq-packaging.jpg",
        },
        FaqEntry {
            question: "Can I customize spice levels?",
            answer: "Absolutely. Choose Mild, Medium, or Royal (spicy) on the item before adding to cart.",
            image: "/static/images/faq-customize.jpg",
        },
    ]
}

/// Cities listed in the locations section.
const CITIES: [&str; 12] = [
    "Mumbai",
    "Delhi NCR",
    "Bengaluru",
    "Hyderabad",
    "Chennai",
    "Pune",
    "Kolkata",
    "Jaipur",
    "Lucknow",
    "Ahmedabad",
    "Indore",
    "Surat",
];

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    /// "Popular This Week" grid.
    pub popular: Vec<ItemCardView>,
    /// Saved delivery location, if any.
    pub location: Option<LocationPreference>,
    /// Inline error slot for the location widget partial.
    pub error: Option<&'static str>,
    pub stats: Vec<StatTile>,
    pub usps: Vec<UspTile>,
    pub faqs: Vec<FaqEntry>,
    pub cities: Vec<&'static str>,
}

/// Display the home page.
#[instrument(skip(session))]
pub async fn home(session: Session) -> impl IntoResponse {
    let location: Option<LocationPreference> = session::load(&session, keys::LOCATION).await;

    HomeTemplate {
        popular: catalog::popular().iter().map(ItemCardView::from).collect(),
        location,
        error: None,
        stats: stat_tiles(),
        usps: usp_tiles(),
        faqs: faq_entries(),
        cities: CITIES.to_vec(),
    }
}

impl From<&CatalogItem> for ItemCardView {
    fn from(item: &CatalogItem) -> Self {
        Self {
            name: item.name.clone(),
            price: item.price.to_string(),
            image: item.image.clone(),
            veg: item.veg,
            tag: item.tag.clone(),
        }
    }
}
