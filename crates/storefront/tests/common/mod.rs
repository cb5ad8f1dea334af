//! Shared helpers for HTTP-level tests.
//!
//! Tests drive the real router through `tower::ServiceExt::oneshot` with a
//! zero-delay checkout, threading the session cookie between requests by
//! hand.

#![allow(dead_code)]
#![allow(clippy::unwrap_used)]

use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, header};
use tower::ServiceExt;

use flexbra_storefront::build_app;
use flexbra_storefront::config::{CheckoutConfig, StorefrontConfig};
use flexbra_storefront::state::AppState;

/// Build the application with a zero-delay checkout.
pub fn test_app() -> Router {
    let config = StorefrontConfig {
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
        base_url: "http://localhost".to_string(),
        checkout: CheckoutConfig {
            processing_delay: Duration::ZERO,
        },
        sentry_dsn: None,
        sentry_environment: None,
    };

    build_app(AppState::new(config))
}

/// Issue a GET request, optionally with a session cookie.
pub async fn get(app: &Router, path: &str, cookie: Option<&str>) -> Response<Body> {
    let mut builder = Request::builder().method("GET").uri(path);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    let request = builder.body(Body::empty()).unwrap();

    app.clone().oneshot(request).await.unwrap()
}

/// Issue a form POST, optionally with a session cookie.
pub async fn post_form(
    app: &Router,
    path: &str,
    form: &str,
    cookie: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    let request = builder.body(Body::from(form.to_string())).unwrap();

    app.clone().oneshot(request).await.unwrap()
}

/// Extract the session cookie from a response, if one was set.
pub fn session_cookie(response: &Response<Body>) -> Option<String> {
    let set_cookie = response.headers().get(header::SET_COOKIE)?;
    let value = set_cookie.to_str().ok()?;
    Some(value.split(';').next().unwrap_or(value).to_string())
}

/// Collect the response body as a string.
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// The `Location` header of a redirect response.
pub fn location(response: &Response<Body>) -> String {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

/// A fully populated checkout form body.
pub fn checkout_form() -> String {
    [
        "first_name=Alex",
        "last_name=Rivera",
        "email=alex%40example.com",
        "phone=555-0100",
        "address=1+Court+St",
        "city=Springfield",
        "postal_code=12345",
        "country=United+States",
    ]
    .join("&")
}
