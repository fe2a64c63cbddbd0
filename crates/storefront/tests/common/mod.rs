//! Shared helpers for storefront HTTP flow tests.
//!
//! Tests run the router in-process via `tower::ServiceExt::oneshot`; the
//! session cookie from the first mutating response is threaded through
//! follow-up requests by hand.

#![allow(clippy::unwrap_used, dead_code)]

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, header};
use tower::ServiceExt;

use royal_biryani_storefront::config::StorefrontConfig;
use royal_biryani_storefront::services::geocode::{GeocodeError, Geocoder};
use royal_biryani_storefront::state::AppState;
use royal_biryani_storefront::{middleware, routes};

/// Canned geocoder for tests.
pub enum FakeGeocoder {
    /// Always resolves to the given label.
    Label(&'static str),
    /// Always fails with an upstream status error.
    Failing,
}

impl Geocoder for FakeGeocoder {
    fn reverse<'a>(
        &'a self,
        _lat: f64,
        _lon: f64,
    ) -> Pin<Box<dyn Future<Output = Result<String, GeocodeError>> + Send + 'a>> {
        Box::pin(async move {
            match self {
                Self::Label(label) => Ok((*label).to_owned()),
                Self::Failing => Err(GeocodeError::Status(
                    reqwest::StatusCode::SERVICE_UNAVAILABLE,
                )),
            }
        })
    }
}

/// Build the storefront router with a fresh in-memory session store.
pub fn app_with_geocoder(geocoder: Arc<dyn Geocoder>) -> Router {
    let config = StorefrontConfig::default();
    let state = AppState::with_geocoder(config.clone(), geocoder);
    let session_layer = middleware::create_session_layer(&config);

    Router::new()
        .merge(routes::routes())
        .layer(session_layer)
        .with_state(state)
}

/// Build the storefront router with a geocoder that never fails.
pub fn app() -> Router {
    app_with_geocoder(Arc::new(FakeGeocoder::Label("Bengaluru, Karnataka, IN")))
}

pub fn get(path: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(path);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

pub fn post_form(path: &str, body: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(body.to_owned())).unwrap()
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

/// Extract the session cookie pair from a response.
pub fn session_cookie(response: &Response<Body>) -> String {
    response
        .headers()
        .get(header::SET_COOKIE)
        .expect("response should set a session cookie")
        .to_str()
        .unwrap()
        .split(';')
        .next()
        .unwrap()
        .to_owned()
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Add an item to the cart and return the session cookie.
pub async fn add_to_cart(app: &Router, name_form: &str) -> String {
    let response = send(app, post_form("/cart/add", name_form, None)).await;
    assert_eq!(response.status(), axum::http::StatusCode::SEE_OTHER);
    session_cookie(&response)
}
