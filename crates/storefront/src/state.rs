//! Application state shared across handlers.

use std::sync::Arc;

use flexbra_core::Catalog;

use crate::config::StorefrontConfig;
use crate::services::orders::OrderProcessor;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. The catalog and the order
/// processor are injected here rather than living in globals, so tests can
/// construct a state with whatever configuration they need.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Catalog,
    orders: OrderProcessor,
}

impl AppState {
    /// Create a new application state from configuration.
    ///
    /// Seeds the static catalog and wires the simulated order processor
    /// with the configured processing delay.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let orders = OrderProcessor::new(config.checkout.processing_delay);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog: Catalog::seed(),
                orders,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Get a reference to the order processor.
    #[must_use]
    pub fn orders(&self) -> &OrderProcessor {
        &self.inner.orders
    }
}
