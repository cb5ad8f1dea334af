//! Session-backed models for the storefront.
//!
//! Everything a visitor "owns" lives in their session: the cart, queued
//! flash messages, and the confirmation of their last order.

pub mod flash;
pub mod session;

pub use flash::{Flash, FlashLevel};
