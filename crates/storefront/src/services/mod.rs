//! Business logic services for the storefront.
//!
//! # Services
//!
//! - `orders` - Simulated order placement (the stand-in for a real
//!   payment/order-processing integration)

pub mod orders;
