//! HTTP flow tests for the checkout draft and confirmation.

#![allow(clippy::unwrap_used)]

mod common;

use axum::http::{StatusCode, header};

use common::{add_to_cart, app, body_string, get, post_form, send};

const DETAILS: &str = "name=Asha+Rao&phone=9876543210&address1=12+MG+Road&city=Bengaluru&state=Karnataka&pincode=560001";

#[tokio::test]
async fn test_checkout_with_empty_cart_shows_empty_state() {
    let app = app();
    let body = body_string(send(&app, get("/checkout", None)).await).await;
    assert!(body.contains("Your cart is empty."));
}

#[tokio::test]
async fn test_checkout_rebuilds_draft_from_cart() {
    let app = app();
    let cookie = add_to_cart(&app, "name=Chicken+Dum+Biryani").await;

    let body = body_string(send(&app, get("/checkout", Some(&cookie))).await).await;
    assert!(body.contains("Chicken Dum Biryani"));
    // Flat tax on top of the 299 subtotal
    assert!(body.contains("₹200"));
    assert!(body.contains("₹499"));
    // Spice resets to the default on entry
    assert!(body.contains(r#"<option value="Medium" selected>"#));
    // Confirm stays gated until details are complete
    assert!(body.contains("disabled"));
}

#[tokio::test]
async fn test_details_unlock_the_confirm_gate() {
    let app = app();
    let cookie = add_to_cart(&app, "name=Chicken+Dum+Biryani").await;
    send(&app, get("/checkout", Some(&cookie))).await;

    let response = send(&app, post_form("/checkout/details", DETAILS, Some(&cookie))).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(!body.contains("disabled"));
}

#[tokio::test]
async fn test_details_with_bad_phone_keep_the_gate_closed() {
    let app = app();
    let cookie = add_to_cart(&app, "name=Chicken+Dum+Biryani").await;
    send(&app, get("/checkout", Some(&cookie))).await;

    let bad = DETAILS.replace("9876543210", "1234567890");
    let body = body_string(send(&app, post_form("/checkout/details", &bad, Some(&cookie))).await)
        .await;
    assert!(body.contains("disabled"));
}

#[tokio::test]
async fn test_spice_selection_sticks() {
    let app = app();
    let cookie = add_to_cart(&app, "name=Chicken+Dum+Biryani").await;
    send(&app, get("/checkout", Some(&cookie))).await;

    let body = body_string(
        send(
            &app,
            post_form(
                "/checkout/spice",
                "name=Chicken+Dum+Biryani&spice=Royal",
                Some(&cookie),
            ),
        )
        .await,
    )
    .await;
    assert!(body.contains(r#"<option value="Royal" selected>Royal (Spicy)</option>"#));
}

#[tokio::test]
async fn test_quantity_delta_below_one_removes_the_line() {
    let app = app();
    let cookie = add_to_cart(&app, "name=Raita").await;
    send(&app, get("/checkout", Some(&cookie))).await;

    let body = body_string(
        send(
            &app,
            post_form("/checkout/quantity", "name=Raita&delta=-1", Some(&cookie)),
        )
        .await,
    )
    .await;
    assert!(body.contains("Your cart is empty."));
}

#[tokio::test]
async fn test_confirm_without_a_draft_redirects_to_cart() {
    let app = app();
    let response = send(&app, post_form("/checkout/confirm", "", None)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/cart");
}

#[tokio::test]
async fn test_confirm_with_incomplete_details_bounces_back() {
    let app = app();
    let cookie = add_to_cart(&app, "name=Raita").await;
    send(&app, get("/checkout", Some(&cookie))).await;

    let response = send(&app, post_form("/checkout/confirm", "", Some(&cookie))).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/checkout");
}

#[tokio::test]
async fn test_full_checkout_flow_confirms_the_order() {
    let app = app();
    let cookie = add_to_cart(&app, "name=Chicken+Dum+Biryani").await;
    send(&app, get("/checkout", Some(&cookie))).await;
    send(&app, post_form("/checkout/details", DETAILS, Some(&cookie))).await;

    let response = send(&app, post_form("/checkout/confirm", "", Some(&cookie))).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/checkout/confirmed");

    let body = body_string(send(&app, get("/checkout/confirmed", Some(&cookie))).await).await;
    assert!(body.contains("Asha Rao"));
    assert!(body.contains("Chicken Dum Biryani"));
    assert!(body.contains("₹499"));
    assert!(body.contains("12 MG Road, Bengaluru, Karnataka, 560001"));
}

#[tokio::test]
async fn test_repeated_confirm_reuses_the_confirmed_order() {
    let app = app();
    let cookie = add_to_cart(&app, "name=Chicken+Dum+Biryani").await;
    send(&app, get("/checkout", Some(&cookie))).await;
    send(&app, post_form("/checkout/details", DETAILS, Some(&cookie))).await;
    send(&app, post_form("/checkout/confirm", "", Some(&cookie))).await;

    let first = body_string(send(&app, get("/checkout/confirmed", Some(&cookie))).await).await;

    let response = send(&app, post_form("/checkout/confirm", "", Some(&cookie))).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/checkout/confirmed");

    let second = body_string(send(&app, get("/checkout/confirmed", Some(&cookie))).await).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_confirmed_page_without_an_order_redirects() {
    let app = app();
    let response = send(&app, get("/checkout/confirmed", None)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/checkout");
}
