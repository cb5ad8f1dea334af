//! FlexBra Core - Shared domain types.
//!
//! This crate provides the domain model used by the storefront binary:
//! the product catalog, the shopping cart, and the newtype wrappers they
//! are built from.
//!
//! # Architecture
//!
//! The core crate contains only types and pure operations - no I/O, no
//! HTTP, no async. Everything here is a total function over in-memory
//! values, which keeps the cart semantics trivially unit-testable.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and prices
//! - [`catalog`] - The static, read-only product catalog
//! - [`cart`] - The ordered line-item collection and its operations

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod types;

pub use cart::{Cart, LineItem, NewItem};
pub use catalog::{Catalog, Product};
pub use types::*;
