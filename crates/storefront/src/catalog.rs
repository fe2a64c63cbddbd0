//! Static menu catalog.
//!
//! The menu is hard-coded data, not database-backed. Item names are unique
//! across the catalog and serve as the cart identity key. The add-to-cart
//! handler resolves posted names against this catalog, so prices are always
//! server-authoritative.

use royal_biryani_core::CatalogItem;

/// A menu category with its anchor key and display title.
pub struct Category {
    /// Anchor id used for in-page navigation chips.
    pub key: &'static str,
    pub title: &'static str,
    pub items: Vec<CatalogItem>,
}

/// The full menu, in display order.
#[must_use]
pub fn categories() -> Vec<Category> {
    vec![
        Category {
            key: "recommended",
            title: "Recommended For You",
            items: vec![
                CatalogItem::new("Dum Gosht Biryani", 329, "/static/images/menu-gosht.jpg", false),
                CatalogItem::new("Subz-e-Biryani", 269, "/static/images/menu-veg.jpg", true),
                CatalogItem::new(
                    "Shahi Biryani (Serves 2)",
                    529,
                    "/static/images/menu-shahi.jpg",
                    false,
                ),
            ],
        },
        Category {
            key: "classic",
            title: "Classic Biryani",
            items: vec![
                CatalogItem::new(
                    "Chicken Dum Biryani",
                    299,
                    "/static/images/menu-chicken.jpg",
                    false,
                ),
                CatalogItem::new("Veg Dum Biryani", 259, "/static/images/menu-veg.jpg", true),
            ],
        },
        Category {
            key: "hyderabadi",
            title: "Hyderabadi Biryani",
            items: vec![
                CatalogItem::new(
                    "Hyderabadi Chicken Biryani",
                    319,
                    "/static/images/menu-hyd-chicken.jpg",
                    false,
                ),
                CatalogItem::new(
                    "Hyderabadi Mutton Biryani",
                    379,
                    "/static/images/menu-hyd-mutton.jpg",
                    false,
                ),
                CatalogItem::new(
                    "Hyderabadi Veg Biryani",
                    279,
                    "/static/images/menu-hyd-veg.jpg",
                    true,
                ),
            ],
        },
        Category {
            key: "thali",
            title: "Biryani and Kebab Thali",
            items: vec![
                CatalogItem::new(
                    "Chicken Biryani + Kebabs Thali",
                    399,
                    "/static/images/menu-thali-chicken.jpg",
                    false,
                ),
                CatalogItem::new(
                    "Veg Biryani + Kebabs Thali",
                    359,
                    "/static/images/menu-thali-veg.jpg",
                    true,
                ),
            ],
        },
        Category {
            key: "lto",
            title: "Limited Time Specials",
            items: vec![
                CatalogItem::new("Haleem Special", 299, "/static/images/menu-haleem.jpg", false),
                CatalogItem::new(
                    "Saffron Zafrani Biryani",
                    349,
                    "/static/images/menu-zafrani.jpg",
                    false,
                ),
            ],
        },
        Category {
            key: "curries",
            title: "Royal Curries & Breads",
            items: vec![
                CatalogItem::new(
                    "Murgh Makhani",
                    299,
                    "/static/images/menu-curry-butterchicken.jpg",
                    false,
                ),
                CatalogItem::new(
                    "Ghost Pepper Korma",
                    329,
                    "/static/images/menu-curry-korma.jpg",
                    false,
                ),
                CatalogItem::new(
                    "Tandoori Roti (2)",
                    49,
                    "/static/images/menu-bread-roti.jpg",
                    true,
                ),
                CatalogItem::new("Butter Naan", 69, "/static/images/menu-bread-naan.jpg", true),
            ],
        },
        Category {
            key: "metalhandi",
            title: "Metal Handi - Nawabi Biryani (Serves 2)",
            items: vec![
                CatalogItem::new(
                    "Nawabi Chicken Handi",
                    649,
                    "/static/images/menu-handi-chicken.jpg",
                    false,
                ),
                CatalogItem::new(
                    "Nawabi Mutton Handi",
                    749,
                    "/static/images/menu-handi-mutton.jpg",
                    false,
                ),
            ],
        },
        Category {
            key: "starters",
            title: "Starters",
            items: vec![
                CatalogItem::new("Murgh Seekh Kebab", 299, "/static/images/menu-kebab.jpg", false),
                CatalogItem::new(
                    "Paneer Tikka",
                    279,
                    "/static/images/menu-starter-paneer.jpg",
                    true,
                ),
                CatalogItem::new(
                    "Tandoori Chicken (Half)",
                    349,
                    "/static/images/menu-starter-tandoori.jpg",
                    false,
                ),
            ],
        },
        Category {
            key: "sides",
            title: "Sides",
            items: vec![
                CatalogItem::new("Raita", 49, "/static/images/menu-side-raita.jpg", true),
                CatalogItem::new(
                    "Mirchi Ka Salan",
                    69,
                    "/static/images/menu-side-salan.jpg",
                    true,
                ),
                CatalogItem::new("Papad (2)", 29, "/static/images/menu-side-papad.jpg", true),
            ],
        },
        Category {
            key: "desserts",
            title: "Desserts & Beverages",
            items: vec![
                CatalogItem::new(
                    "Gulab Jamun (2 pc)",
                    89,
                    "/static/images/menu-dessert.jpg",
                    true,
                ),
                CatalogItem::new("Phirni", 99, "/static/images/menu-dessert-phirni.jpg", true),
                CatalogItem::new("Masala Chaas", 79, "/static/images/menu-bev-chaas.jpg", true),
            ],
        },
        Category {
            key: "combos",
            title: "Combos",
            items: vec![
                CatalogItem::new(
                    "Chicken Biryani + Pepsi",
                    349,
                    "/static/images/menu-combo-chicken.jpg",
                    false,
                ),
                CatalogItem::new(
                    "Veg Biryani + Gulab Jamun",
                    329,
                    "/static/images/menu-combo-veg.jpg",
                    true,
                ),
                CatalogItem::new(
                    "Family Feast (Serves 4)",
                    1249,
                    "/static/images/menu-combo-family.jpg",
                    false,
                ),
            ],
        },
    ]
}

/// The "Popular This Week" list on the home page.
#[must_use]
pub fn popular() -> Vec<CatalogItem> {
    vec![
        CatalogItem::new("Subz-e-Biryani", 269, "/static/images/menu-veg.jpg", true).tagged("Veg"),
        CatalogItem::new("Dum Gosht Biryani", 329, "/static/images/menu-gosht.jpg", false)
            .tagged("Best Seller"),
        CatalogItem::new("Murgh Kebab Platter", 299, "/static/images/menu-kebab.jpg", false)
            .tagged("New"),
        CatalogItem::new(
            "Shahi Biryani (Serves 2)",
            529,
            "/static/images/menu-shahi.jpg",
            false,
        )
        .tagged("Combo"),
        CatalogItem::new("Haleem Special", 299, "/static/images/menu-haleem.jpg", false)
            .tagged("Seasonal"),
        CatalogItem::new("Gulab Jamun (2 pc)", 89, "/static/images/menu-dessert.jpg", true)
            .tagged("Dessert"),
    ]
}

/// The offers page list: BOGO items, combos, and discounted items.
#[must_use]
pub fn offers() -> Vec<CatalogItem> {
    vec![
        CatalogItem::new("Murgh Seekh Kebab", 299, "/static/images/menu-kebab.jpg", false)
            .buy_one_get_one(),
        CatalogItem::new("Paneer Tikka", 279, "/static/images/menu-starter-paneer.jpg", true)
            .buy_one_get_one(),
        CatalogItem::new("Gulab Jamun (2 pc)", 89, "/static/images/menu-dessert.jpg", true)
            .buy_one_get_one(),
        CatalogItem::new(
            "Chicken Biryani + Pepsi",
            349,
            "/static/images/menu-combo-chicken.jpg",
            false,
        )
        .tagged("Combo"),
        CatalogItem::new(
            "Veg Biryani + Gulab Jamun",
            329,
            "/static/images/menu-combo-veg.jpg",
            true,
        )
        .tagged("Combo"),
        CatalogItem::new("Haleem Special", 299, "/static/images/menu-haleem.jpg", false)
            .tagged("Limited Time"),
        CatalogItem::new(
            "Shahi Biryani (Serves 2)",
            529,
            "/static/images/menu-shahi.jpg",
            false,
        )
        .tagged("₹50 OFF")
        .discounted_from(579),
        CatalogItem::new(
            "Nawabi Chicken Handi",
            649,
            "/static/images/menu-handi-chicken.jpg",
            false,
        )
        .tagged("₹100 OFF")
        .discounted_from(749),
    ]
}

/// Resolve an item by name.
///
/// Searches the menu first, then the popular list (which has a few
/// home-page-only entries), then the offers list. Promotional metadata on
/// duplicate entries is presentation-only; price and identity are the same
/// everywhere a name appears.
#[must_use]
pub fn find(name: &str) -> Option<CatalogItem> {
    categories()
        .into_iter()
        .flat_map(|c| c.items)
        .chain(popular())
        .chain(offers())
        .find(|item| item.name == name)
}
