//! Checkout route handlers.
//!
//! The flow is a small state machine: Editing -> Submitting -> Completed,
//! with failures dropping back to Editing. The empty-cart guard keeps
//! empty orders impossible: `/checkout` redirects to `/cart` whenever
//! there is nothing to buy, which also blocks re-submitting after a
//! completed order has cleared the cart.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;
use tracing::instrument;

use flexbra_core::Cart;

use crate::error::Result;
use crate::filters;
use crate::models::Flash;
use crate::models::flash::{push_flash, take_flashes};
use crate::models::session::{load_cart, load_last_order, save_cart, save_last_order};
use crate::services::orders::{OrderConfirmation, OrderDetails};
use crate::state::AppState;

/// Checkout form template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/show.html")]
pub struct CheckoutShowTemplate {
    pub cart: Cart,
    pub form: OrderDetails,
    pub cart_count: u32,
    pub flashes: Vec<Flash>,
}

/// Order confirmation template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/complete.html")]
pub struct CheckoutCompleteTemplate {
    pub confirmation: OrderConfirmation,
    pub cart_count: u32,
    pub flashes: Vec<Flash>,
}

/// An unfilled delivery form; only the country is prefilled.
fn blank_form() -> OrderDetails {
    OrderDetails {
        first_name: String::new(),
        last_name: String::new(),
        email: String::new(),
        phone: String::new(),
        address: String::new(),
        city: String::new(),
        postal_code: String::new(),
        country: "United States".to_string(),
    }
}

/// Display the checkout form.
///
/// Guard: an empty cart redirects to the cart page, preventing empty
/// orders.
#[instrument(skip(session))]
pub async fn show(session: Session) -> Response {
    let cart = load_cart(&session).await;
    if cart.is_empty() {
        return Redirect::to("/cart").into_response();
    }

    CheckoutShowTemplate {
        cart_count: cart.item_count(),
        flashes: take_flashes(&session).await,
        form: blank_form(),
        cart,
    }
    .into_response()
}

/// Place the order.
///
/// Re-checks the empty-cart guard and the all-fields-present rule, then
/// hands off to the order processor (which sleeps for the simulated
/// processing delay). On success the cart is cleared and the client is
/// redirected to the confirmation page; on failure the form returns to an
/// editable state with the cart untouched.
#[instrument(skip_all)]
pub async fn submit(
    State(state): State<AppState>,
    session: Session,
    Form(details): Form<OrderDetails>,
) -> Result<Response> {
    let mut cart = load_cart(&session).await;
    if cart.is_empty() {
        return Ok(Redirect::to("/cart").into_response());
    }

    if !details.missing_fields().is_empty() {
        let cart_count = cart.item_count();
        return Ok(CheckoutShowTemplate {
            cart,
            form: details,
            cart_count,
            flashes: vec![Flash::error(
                "Missing information",
                "Please fill in every field before placing your order.",
            )],
        }
        .into_response());
    }

    match state.orders().place_order(&cart, &details).await {
        Ok(confirmation) => {
            cart.clear();
            save_cart(&session, &cart).await?;
            save_last_order(&session, &confirmation).await?;
            push_flash(
                &session,
                Flash::success(
                    "Order placed successfully!",
                    "Thank you for your purchase. You'll receive a confirmation email shortly.",
                ),
            )
            .await;

            Ok(Redirect::to("/checkout/complete").into_response())
        }
        Err(e) => {
            tracing::warn!(error = %e, "Order processing failed");
            let cart_count = cart.item_count();

            Ok(CheckoutShowTemplate {
                cart,
                form: details,
                cart_count,
                flashes: vec![Flash::error(
                    "Order failed",
                    "There was an error processing your order. Please try again.",
                )],
            }
            .into_response())
        }
    }
}

/// Display the order confirmation.
///
/// Without a placed order there is nothing to confirm; the visitor is sent
/// to the catalog instead (returning to the form is not supported).
#[instrument(skip(session))]
pub async fn complete(session: Session) -> Response {
    let Some(confirmation) = load_last_order(&session).await else {
        return Redirect::to("/products").into_response();
    };

    let cart = load_cart(&session).await;

    CheckoutCompleteTemplate {
        confirmation,
        cart_count: cart.item_count(),
        flashes: take_flashes(&session).await,
    }
    .into_response()
}
