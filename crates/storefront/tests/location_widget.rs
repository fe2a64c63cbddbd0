//! HTTP flow tests for the delivery location widget.

#![allow(clippy::unwrap_used)]

mod common;

use std::sync::Arc;

use axum::http::StatusCode;

use common::{FakeGeocoder, app_with_geocoder, body_string, get, post_form, send, session_cookie};

const COORDS: &str = "lat=12.9716&lon=77.5946";

#[tokio::test]
async fn test_locate_saves_the_resolved_label() {
    let app = app_with_geocoder(Arc::new(FakeGeocoder::Label("Bengaluru, Karnataka, IN")));

    let response = send(&app, post_form("/location", COORDS, None)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let cookie = session_cookie(&response);

    let body = body_string(response).await;
    assert!(body.contains("Bengaluru, Karnataka, IN"));

    // The preference survives into the next page load
    let home = body_string(send(&app, get("/", Some(&cookie))).await).await;
    assert!(home.contains("Bengaluru, Karnataka, IN"));
}

#[tokio::test]
async fn test_empty_label_falls_back_to_coordinates() {
    let app = app_with_geocoder(Arc::new(FakeGeocoder::Label("")));

    let body = body_string(send(&app, post_form("/location", COORDS, None)).await).await;
    assert!(body.contains("12.972, 77.595"));
}

#[tokio::test]
async fn test_failed_lookup_keeps_the_saved_preference() {
    let app = app_with_geocoder(Arc::new(FakeGeocoder::Failing));

    let response = send(&app, post_form("/location/manual", "label=Indiranagar", None)).await;
    let cookie = session_cookie(&response);

    let response = send(&app, post_form("/location", COORDS, Some(&cookie))).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("Indiranagar"));
    assert!(body.contains("Could not fetch place name"));
}

#[tokio::test]
async fn test_failed_lookup_without_a_preference_shows_the_error() {
    let app = app_with_geocoder(Arc::new(FakeGeocoder::Failing));

    let body = body_string(send(&app, post_form("/location", COORDS, None)).await).await;
    assert!(body.contains("Could not fetch place name"));
    assert!(body.contains("Locate Me"));
}

#[tokio::test]
async fn test_manual_entry_saves_a_trimmed_label() {
    let app = app_with_geocoder(Arc::new(FakeGeocoder::Failing));

    let body = body_string(
        send(
            &app,
            post_form("/location/manual", "label=++Koramangala++", None),
        )
        .await,
    )
    .await;
    assert!(body.contains("Koramangala"));
    assert!(!body.contains("  Koramangala"));
}

#[tokio::test]
async fn test_blank_manual_entry_keeps_the_prior_label() {
    let app = app_with_geocoder(Arc::new(FakeGeocoder::Failing));

    let response = send(&app, post_form("/location/manual", "label=Indiranagar", None)).await;
    let cookie = session_cookie(&response);

    let body = body_string(
        send(
            &app,
            post_form("/location/manual", "label=+++", Some(&cookie)),
        )
        .await,
    )
    .await;
    assert!(body.contains("Indiranagar"));
}
