//! HTTP-level tests for the cart routes.

#![allow(clippy::unwrap_used)]

mod common;

use axum::http::StatusCode;

use common::{body_text, get, post_form, session_cookie, test_app};

#[tokio::test]
async fn health_is_ok() {
    let app = test_app();
    let response = get(&app, "/health", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "ok");
}

#[tokio::test]
async fn empty_cart_page_shows_empty_state() {
    let app = test_app();
    let response = get(&app, "/cart", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("Your cart is empty"));
}

#[tokio::test]
async fn add_to_cart_sets_session_and_returns_badge() {
    let app = test_app();

    let response = post_form(&app, "/cart/add", "product_id=1&size=", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("HX-Trigger")
            .and_then(|v| v.to_str().ok()),
        Some("cart-updated")
    );

    let cookie = session_cookie(&response).expect("session cookie set");
    let fragment = body_text(response).await;
    assert!(fragment.contains(">1</span>"));
    assert!(fragment.contains("Added to cart!"));

    let page = get(&app, "/cart", Some(&cookie)).await;
    let html = body_text(page).await;
    assert!(html.contains("FlexCore Pro - Pink Power"));
    assert!(html.contains("$89.00"));
}

#[tokio::test]
async fn adding_same_product_twice_merges_lines() {
    let app = test_app();

    let first = post_form(&app, "/cart/add", "product_id=1&size=", None).await;
    let cookie = session_cookie(&first).expect("session cookie set");
    post_form(&app, "/cart/add", "product_id=1&size=", Some(&cookie)).await;

    let page = get(&app, "/cart", Some(&cookie)).await;
    let html = body_text(page).await;
    // One line at quantity 2, not two lines
    assert_eq!(html.matches("<h3>FlexCore Pro - Pink Power</h3>").count(), 1);
    assert!(html.contains("class=\"cart-line-quantity\">2</span>"));
    assert!(html.contains("$178.00"));
}

#[tokio::test]
async fn update_quantity_recomputes_total() {
    let app = test_app();

    let first = post_form(&app, "/cart/add", "product_id=1&size=", None).await;
    let cookie = session_cookie(&first).expect("session cookie set");

    let response = post_form(
        &app,
        "/cart/update",
        "product_id=1&quantity=3",
        Some(&cookie),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let fragment = body_text(response).await;
    assert!(fragment.contains("$267.00"));
}

#[tokio::test]
async fn update_to_zero_removes_the_line() {
    let app = test_app();

    let first = post_form(&app, "/cart/add", "product_id=2&size=M", None).await;
    let cookie = session_cookie(&first).expect("session cookie set");

    let response = post_form(
        &app,
        "/cart/update",
        "product_id=2&quantity=0",
        Some(&cookie),
    )
    .await;
    let fragment = body_text(response).await;
    assert!(fragment.contains("Your cart is empty"));
}

#[tokio::test]
async fn remove_deletes_only_that_line() {
    let app = test_app();

    let first = post_form(&app, "/cart/add", "product_id=1&size=", None).await;
    let cookie = session_cookie(&first).expect("session cookie set");
    post_form(&app, "/cart/add", "product_id=3&size=", Some(&cookie)).await;

    let response = post_form(&app, "/cart/remove", "product_id=1", Some(&cookie)).await;
    let fragment = body_text(response).await;
    assert!(!fragment.contains("FlexCore Pro - Pink Power"));
    assert!(fragment.contains("FlexCore Active - Pure White"));
}

#[tokio::test]
async fn unknown_product_is_not_found() {
    let app = test_app();
    let response = post_form(&app, "/cart/add", "product_id=42&size=", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_size_is_bad_request() {
    let app = test_app();
    let response = post_form(&app, "/cart/add", "product_id=1&size=XXL", None).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn negative_quantity_is_rejected_by_deserialization() {
    let app = test_app();

    let first = post_form(&app, "/cart/add", "product_id=1&size=", None).await;
    let cookie = session_cookie(&first).expect("session cookie set");

    let response = post_form(
        &app,
        "/cart/update",
        "product_id=1&quantity=-1",
        Some(&cookie),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    // The cart is untouched
    let page = get(&app, "/cart", Some(&cookie)).await;
    assert!(body_text(page).await.contains("FlexCore Pro - Pink Power"));
}

#[tokio::test]
async fn count_fragment_reflects_cart() {
    let app = test_app();

    let response = get(&app, "/cart/count", None).await;
    assert!(body_text(response).await.contains(">0</span>"));

    let first = post_form(&app, "/cart/add", "product_id=1&size=", None).await;
    let cookie = session_cookie(&first).expect("session cookie set");
    post_form(&app, "/cart/add", "product_id=2&size=", Some(&cookie)).await;

    let response = get(&app, "/cart/count", Some(&cookie)).await;
    assert!(body_text(response).await.contains(">2</span>"));
}

#[tokio::test]
async fn products_page_lists_the_catalog() {
    let app = test_app();
    let response = get(&app, "/products", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("FlexCore Pro - Pink Power"));
    assert!(html.contains("FlexCore Sport - Ice White"));
    assert!(html.contains("$69.00"));
    assert!(html.contains("$99.00"));
}
