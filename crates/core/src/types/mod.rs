//! Core types for FlexBra.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod price;
pub mod size;

pub use id::*;
pub use price::{CurrencyCode, Price};
pub use size::Size;
