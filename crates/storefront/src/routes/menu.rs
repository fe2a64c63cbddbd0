//! Menu page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;
use tracing::instrument;

use crate::catalog;
use crate::filters;

/// Menu item display data for templates.
#[derive(Clone)]
pub struct ItemCardView {
    pub name: String,
    pub price: String,
    pub image: String,
    pub veg: bool,
    pub tag: Option<String>,
}

/// A menu category with its items.
pub struct CategoryView {
    pub key: &'static str,
    pub title: &'static str,
    pub items: Vec<ItemCardView>,
}

impl From<catalog::Category> for CategoryView {
    fn from(category: catalog::Category) -> Self {
        Self {
            key: category.key,
            title: category.title,
            items: category.items.iter().map(ItemCardView::from).collect(),
        }
    }
}

/// Menu page template.
#[derive(Template, WebTemplate)]
#[template(path = "menu.html")]
pub struct MenuTemplate {
    pub categories: Vec<CategoryView>,
}

/// Display the full menu.
#[instrument]
pub async fn show() -> impl IntoResponse {
    MenuTemplate {
        categories: catalog::categories()
            .into_iter()
            .map(CategoryView::from)
            .collect(),
    }
}
