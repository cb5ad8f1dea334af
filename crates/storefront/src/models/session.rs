//! Session storage for visitor state.
//!
//! The cart is stored as a value in the session and loaded/saved per
//! request. Session reads that fail degrade to an empty cart rather than
//! erroring the page; writes propagate, since losing a mutation would be
//! observable.

use tower_sessions::Session;

use flexbra_core::Cart;

use crate::services::orders::OrderConfirmation;

/// Session keys for visitor data.
pub mod keys {
    /// Key for the visitor's cart.
    pub const CART: &str = "cart";

    /// Key for queued flash messages.
    pub const FLASH: &str = "flash";

    /// Key for the confirmation of the most recently placed order.
    pub const LAST_ORDER: &str = "last_order";
}

/// Load the visitor's cart, or an empty one if none is stored.
pub async fn load_cart(session: &Session) -> Cart {
    session
        .get::<Cart>(keys::CART)
        .await
        .ok()
        .flatten()
        .unwrap_or_default()
}

/// Store the visitor's cart back into the session.
pub async fn save_cart(
    session: &Session,
    cart: &Cart,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(keys::CART, cart).await
}

/// Store the confirmation of a placed order.
pub async fn save_last_order(
    session: &Session,
    confirmation: &OrderConfirmation,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(keys::LAST_ORDER, confirmation).await
}

/// Load the confirmation of the most recently placed order, if any.
pub async fn load_last_order(session: &Session) -> Option<OrderConfirmation> {
    session
        .get::<OrderConfirmation>(keys::LAST_ORDER)
        .await
        .ok()
        .flatten()
}
