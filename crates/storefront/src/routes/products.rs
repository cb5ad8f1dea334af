//! Product listing route handler.
//!
//! The catalog is static and small, so the page simply renders every
//! product. Add-to-cart forms on the cards post to `/cart/add`.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tower_sessions::Session;
use tracing::instrument;

use flexbra_core::Product;

use crate::filters;
use crate::models::Flash;
use crate::models::flash::take_flashes;
use crate::models::session::load_cart;
use crate::state::AppState;

/// Product listing template.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductsTemplate {
    pub products: Vec<Product>,
    pub cart_count: u32,
    pub flashes: Vec<Flash>,
}

/// Display the product listing.
#[instrument(skip(state, session))]
pub async fn index(State(state): State<AppState>, session: Session) -> impl IntoResponse {
    let cart = load_cart(&session).await;

    ProductsTemplate {
        products: state.catalog().iter().cloned().collect(),
        cart_count: cart.item_count(),
        flashes: take_flashes(&session).await,
    }
}
