//! Access and filter policy.
//!
//! Given a role and the current catalog query, decides what a page shows:
//! which tabs are listed, whether filter controls appear, which products
//! match, and whether each product offers the purchase action.
//!
//! Roles without `can_use_filters` never see the search box or structural
//! filter, so for them the query is inert and every product is listed.

use shoe_shop_core::{Capabilities, Role};

use crate::catalog::{CatalogQuery, Product, StructuralFilter, filter_catalog};
use crate::models::Tab;

/// A product as shown to one role.
#[derive(Debug, Clone, Copy)]
pub struct ProductCard<'a> {
    pub product: &'a Product,
    /// Whether the add-to-cart action is offered.
    pub can_purchase: bool,
}

/// Everything a catalog render needs to know about visibility.
#[derive(Debug, Clone)]
pub struct PolicyOutput<'a> {
    /// Navigation tabs, in display order.
    pub tabs: Vec<Tab>,
    /// Whether the search box and structural filter controls are rendered.
    pub show_filters: bool,
    /// Matching products, in catalog order.
    pub products: Vec<ProductCard<'a>>,
}

impl PolicyOutput<'_> {
    /// Whether no product matched (the empty state is rendered instead).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// Tabs listed for a session with these capabilities.
#[must_use]
pub fn visible_tabs(capabilities: Capabilities) -> Vec<Tab> {
    Tab::ALL
        .into_iter()
        .filter(|tab| tab.is_allowed(capabilities))
        .collect()
}

/// Apply the policy for a role to a product list and query.
#[must_use]
pub fn evaluate<'a, F: StructuralFilter>(
    role: Role,
    query: &CatalogQuery<F>,
    products: &'a [Product],
) -> PolicyOutput<'a> {
    let capabilities = role.capabilities();

    let matching: Vec<&Product> = if capabilities.can_use_filters {
        filter_catalog(products, query)
    } else {
        products.iter().collect()
    };

    PolicyOutput {
        tabs: visible_tabs(capabilities),
        show_filters: capabilities.can_use_filters,
        products: matching
            .into_iter()
            .map(|product| ProductCard {
                product,
                can_purchase: capabilities.can_purchase,
            })
            .collect(),
    }
}
