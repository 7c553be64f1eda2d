//! In-memory shop data.
//!
//! The catalog, sample orders, and pickup points are fixed at startup and never
//! mutated. Views only ever read from a [`Catalog`].

mod filter;
mod seed;

use chrono::NaiveDate;
use serde::Serialize;

use shoe_shop_core::{OrderId, OrderStatus, PickupPointId, Price, ProductId, ShoeSize};

pub use filter::{
    CatalogQuery, CategorySelection, FilterModel, FilterModelError, SizeSelection,
    StructuralFilter, StructuralSelection, filter_catalog, matches_text,
};

/// Sizes offered as filter checkboxes.
pub const SIZE_OPTIONS: [ShoeSize; 8] = [
    ShoeSize::new(37),
    ShoeSize::new(38),
    ShoeSize::new(39),
    ShoeSize::new(40),
    ShoeSize::new(41),
    ShoeSize::new(42),
    ShoeSize::new(43),
    ShoeSize::new(44),
];

/// A catalog product.
#[derive(Debug, Clone, Serialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    /// Present only when `discount_percent` is non-zero.
    pub discounted_price: Option<Price>,
    /// Image path under `/static`.
    pub image: String,
    /// Sizes in stock.
    pub sizes: Vec<ShoeSize>,
    pub category: String,
    pub brand: String,
    pub description: String,
    /// Units in stock.
    pub stock: u32,
    pub discount_percent: u8,
    pub supplier: String,
}

/// A sample order shown to staff.
#[derive(Debug, Clone, Serialize)]
pub struct Order {
    pub id: OrderId,
    pub product_name: String,
    pub size: ShoeSize,
    pub quantity: u32,
    pub total: Price,
    pub status: OrderStatus,
    pub date: NaiveDate,
}

/// A store pickup point.
#[derive(Debug, Clone, Serialize)]
pub struct PickupPoint {
    pub id: PickupPointId,
    pub name: String,
    pub address: String,
    /// Opening hours, e.g. `9:00 - 21:00`.
    pub hours: String,
}

/// All static shop data.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    orders: Vec<Order>,
    pickup_points: Vec<PickupPoint>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seeded()
    }
}

impl Catalog {
    /// Build a catalog from explicit data.
    #[must_use]
    pub const fn new(
        products: Vec<Product>,
        orders: Vec<Order>,
        pickup_points: Vec<PickupPoint>,
    ) -> Self {
        Self {
            products,
            orders,
            pickup_points,
        }
    }

    /// The demo catalog.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(seed::products(), seed::orders(), seed::pickup_points())
    }

    /// Products in display order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Sample orders in display order.
    #[must_use]
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Pickup points in display order.
    #[must_use]
    pub fn pickup_points(&self) -> &[PickupPoint] {
        &self.pickup_points
    }

    /// Look up a product by ID.
    #[must_use]
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Distinct categories in the order they first appear in the catalog.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for product in &self.products {
            if !categories.contains(&product.category.as_str()) {
                categories.push(&product.category);
            }
        }
        categories
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_seeded_counts() {
        let catalog = Catalog::seeded();
        assert_eq!(catalog.products().len(), 6);
        assert_eq!(catalog.orders().len(), 2);
        assert_eq!(catalog.pickup_points().len(), 3);
    }

    #[test]
    fn test_product_ids_are_unique() {
        let catalog = Catalog::seeded();
        let ids: HashSet<_> = catalog.products().iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), catalog.products().len());
    }

    #[test]
    fn test_discounted_price_present_iff_discount() {
        for product in Catalog::seeded().products() {
            assert_eq!(
                product.discounted_price.is_some(),
                product.discount_percent > 0,
                "{}",
                product.name
            );
            if let Some(discounted) = product.discounted_price {
                assert_eq!(discounted, product.price.discounted(product.discount_percent));
            }
        }
    }

    #[test]
    fn test_product_lookup() {
        let catalog = Catalog::seeded();
        let product = catalog.product(ProductId::new(4));
        assert_eq!(product.map(|p| p.brand.as_str()), Some("Converse"));
        assert!(catalog.product(ProductId::new(99)).is_none());
    }

    #[test]
    fn test_categories_are_distinct_and_ordered() {
        let catalog = Catalog::seeded();
        assert_eq!(
            catalog.categories(),
            vec!["Кроссовки", "Туфли", "Ботинки", "Кеды", "Сандалии", "Слипоны"]
        );
    }
}
