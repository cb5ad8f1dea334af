//! The static product catalog.
//!
//! Products are authored in code at build time. There is no query, filter,
//! or pagination layer - the catalog is small enough to iterate directly.

use serde::{Deserialize, Serialize};

use crate::types::{Price, ProductId, Size};

/// A purchasable product. Immutable once the catalog is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    /// Path to the product image under `/static`.
    pub image: String,
    pub description: String,
    /// Sizes this product is offered in.
    pub sizes: Vec<Size>,
}

/// Read-only collection of [`Product`]s.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build the FlexBra product line.
    #[must_use]
    pub fn seed() -> Self {
        let entry = |id: &str, name: &str, dollars: i64, image: &str, description: &str| Product {
            id: ProductId::new(id),
            name: name.to_owned(),
            price: Price::from_dollars(dollars),
            image: format!("/static/images/products/{image}.jpg"),
            description: description.to_owned(),
            sizes: Size::ALL.to_vec(),
        };

        Self {
            products: vec![
                entry(
                    "1",
                    "FlexCore Pro - Pink Power",
                    89,
                    "sports-bra-pink",
                    "High-impact support with moisture-wicking technology",
                ),
                entry(
                    "2",
                    "FlexCore Elite - Navy Storm",
                    95,
                    "sports-bra-navy",
                    "Premium mesh panels for ultimate breathability",
                ),
                entry(
                    "3",
                    "FlexCore Active - Pure White",
                    79,
                    "sports-bra-white",
                    "Racerback design with coral accent details",
                ),
                entry(
                    "4",
                    "FlexCore Max - Coral Fusion",
                    99,
                    "sports-bra-pink",
                    "Maximum support for high-intensity workouts",
                ),
                entry(
                    "5",
                    "FlexCore Light - Midnight Navy",
                    69,
                    "sports-bra-navy",
                    "Lightweight support for yoga and pilates",
                ),
                entry(
                    "6",
                    "FlexCore Sport - Ice White",
                    85,
                    "sports-bra-white",
                    "Seamless construction for all-day comfort",
                ),
            ],
        }
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == *id)
    }

    /// Iterate over all products in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    /// Number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}
