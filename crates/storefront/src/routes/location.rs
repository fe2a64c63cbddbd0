//! Location widget route handlers.
//!
//! The browser posts coordinates from the Geolocation API; the server
//! resolves a label via the geocoder and persists the preference. A failed
//! resolution leaves the saved preference untouched and renders an inline
//! error in the widget fragment.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, extract::State};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::AppError;
use crate::models::LocationPreference;
use crate::models::session::{self, keys};
use crate::state::AppState;

/// Coordinates form data from the Geolocation API.
#[derive(Debug, Deserialize)]
pub struct LocateForm {
    pub lat: f64,
    pub lon: f64,
}

/// Manual-entry form data.
#[derive(Debug, Deserialize)]
pub struct ManualForm {
    pub label: String,
}

/// Location widget fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/location.html")]
pub struct LocationWidgetTemplate {
    pub location: Option<LocationPreference>,
    pub error: Option<&'static str>,
}

/// Resolve posted coordinates and save the preference (HTMX).
#[instrument(skip(state, session))]
pub async fn locate(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LocateForm>,
) -> Result<LocationWidgetTemplate, AppError> {
    match state.geocoder().reverse(form.lat, form.lon).await {
        Ok(label) => {
            let label = if label.is_empty() {
                LocationPreference::coordinate_label(form.lat, form.lon)
            } else {
                label
            };
            let location = LocationPreference::located(label, form.lat, form.lon);
            session::save(&session, keys::LOCATION, &location).await?;

            Ok(LocationWidgetTemplate {
                location: Some(location),
                error: None,
            })
        }
        Err(e) => {
            // Keep whatever was saved before; the widget shows the error inline.
            tracing::warn!("Reverse geocoding failed: {e}");
            let location = session::load(&session, keys::LOCATION).await;
            Ok(LocationWidgetTemplate {
                location,
                error: Some("Could not fetch place name"),
            })
        }
    }
}

/// Save a manually entered location label (HTMX).
///
/// A blank label is a no-op: the prior preference stays as it was.
#[instrument(skip(session))]
pub async fn manual(
    session: Session,
    Form(form): Form<ManualForm>,
) -> Result<LocationWidgetTemplate, AppError> {
    let label = form.label.trim();
    if label.is_empty() {
        let location = session::load(&session, keys::LOCATION).await;
        return Ok(LocationWidgetTemplate {
            location,
            error: None,
        });
    }

    let location = LocationPreference::manual(label);
    session::save(&session, keys::LOCATION, &location).await?;

    Ok(LocationWidgetTemplate {
        location: Some(location),
        error: None,
    })
}
