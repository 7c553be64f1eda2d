//! Catalog search and structural filters.
//!
//! A [`CatalogQuery`] combines a free-text term with one structural filter.
//! Two structural filters exist: a set of acceptable sizes, or a single
//! category. Both implement [`StructuralFilter`], and [`StructuralSelection`]
//! wraps whichever one the storefront is configured with so it can live in
//! the session.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use shoe_shop_core::ShoeSize;

use super::Product;

/// A non-text filter dimension over products.
pub trait StructuralFilter {
    /// Whether the product passes this filter. An empty filter passes everything.
    fn matches(&self, product: &Product) -> bool;

    /// Whether nothing is selected.
    fn is_empty(&self) -> bool;

    /// Deselect everything.
    fn clear(&mut self);
}

/// Products whose size list intersects the selected sizes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeSelection {
    sizes: BTreeSet<ShoeSize>,
}

impl SizeSelection {
    /// Select the given sizes.
    #[must_use]
    pub fn new(sizes: impl IntoIterator<Item = ShoeSize>) -> Self {
        Self {
            sizes: sizes.into_iter().collect(),
        }
    }

    /// Add the size if absent, remove it if present.
    pub fn toggle(&mut self, size: ShoeSize) {
        if !self.sizes.remove(&size) {
            self.sizes.insert(size);
        }
    }

    /// Whether the size is currently selected.
    #[must_use]
    pub fn contains(&self, size: ShoeSize) -> bool {
        self.sizes.contains(&size)
    }
}

impl StructuralFilter for SizeSelection {
    fn matches(&self, product: &Product) -> bool {
        self.sizes.is_empty() || product.sizes.iter().any(|s| self.sizes.contains(s))
    }

    fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    fn clear(&mut self) {
        self.sizes.clear();
    }
}

/// Products in exactly the selected category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySelection {
    category: Option<String>,
}

impl CategorySelection {
    /// Select a single category.
    #[must_use]
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
        }
    }

    /// Select a category; selecting the current one deselects it.
    pub fn select(&mut self, category: &str) {
        if self.category.as_deref() == Some(category) {
            self.category = None;
        } else {
            self.category = Some(category.to_owned());
        }
    }

    /// The selected category, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.category.as_deref()
    }
}

impl StructuralFilter for CategorySelection {
    fn matches(&self, product: &Product) -> bool {
        self.category
            .as_deref()
            .is_none_or(|category| product.category == category)
    }

    fn is_empty(&self) -> bool {
        self.category.is_none()
    }

    fn clear(&mut self) {
        self.category = None;
    }
}

/// Which structural filter the catalog offers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterModel {
    /// Checkbox set of shoe sizes.
    #[default]
    Sizes,
    /// Single category picker.
    Category,
}

/// Error returned when parsing an unknown filter model name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown filter model '{0}' (expected 'sizes' or 'category')")]
pub struct FilterModelError(pub String);

impl std::str::FromStr for FilterModel {
    type Err = FilterModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sizes" | "size" => Ok(Self::Sizes),
            "category" | "categories" => Ok(Self::Category),
            _ => Err(FilterModelError(s.to_owned())),
        }
    }
}

/// Session-storable structural filter of either model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum StructuralSelection {
    Sizes(SizeSelection),
    Category(CategorySelection),
}

impl Default for StructuralSelection {
    fn default() -> Self {
        Self::empty(FilterModel::default())
    }
}

impl StructuralSelection {
    /// An empty selection of the given model.
    #[must_use]
    pub fn empty(model: FilterModel) -> Self {
        match model {
            FilterModel::Sizes => Self::Sizes(SizeSelection::default()),
            FilterModel::Category => Self::Category(CategorySelection::default()),
        }
    }

    /// The model this selection belongs to.
    #[must_use]
    pub const fn model(&self) -> FilterModel {
        match self {
            Self::Sizes(_) => FilterModel::Sizes,
            Self::Category(_) => FilterModel::Category,
        }
    }

    /// Toggle a size. Returns `false` if this is not a size selection.
    pub fn toggle_size(&mut self, size: ShoeSize) -> bool {
        match self {
            Self::Sizes(sizes) => {
                sizes.toggle(size);
                true
            }
            Self::Category(_) => false,
        }
    }

    /// Select a category. Returns `false` if this is not a category selection.
    pub fn select_category(&mut self, category: &str) -> bool {
        match self {
            Self::Category(selection) => {
                selection.select(category);
                true
            }
            Self::Sizes(_) => false,
        }
    }

    /// Whether a size is selected (always `false` for category selections).
    #[must_use]
    pub fn has_size(&self, size: &ShoeSize) -> bool {
        match self {
            Self::Sizes(sizes) => sizes.contains(*size),
            Self::Category(_) => false,
        }
    }

    /// The selected category, if this is a category selection.
    #[must_use]
    pub fn category(&self) -> Option<&str> {
        match self {
            Self::Category(selection) => selection.selected(),
            Self::Sizes(_) => None,
        }
    }
}

impl StructuralFilter for StructuralSelection {
    fn matches(&self, product: &Product) -> bool {
        match self {
            Self::Sizes(sizes) => sizes.matches(product),
            Self::Category(category) => category.matches(product),
        }
    }

    fn is_empty(&self) -> bool {
        match self {
            Self::Sizes(sizes) => sizes.is_empty(),
            Self::Category(category) => category.is_empty(),
        }
    }

    fn clear(&mut self) {
        match self {
            Self::Sizes(sizes) => sizes.clear(),
            Self::Category(category) => category.clear(),
        }
    }
}

/// Search text plus one structural filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogQuery<F = StructuralSelection> {
    /// Free-text search term.
    pub search: String,
    /// Structural filter.
    pub structural: F,
}

impl<F: StructuralFilter> CatalogQuery<F> {
    /// A query with the given search text and structural filter.
    #[must_use]
    pub fn new(search: impl Into<String>, structural: F) -> Self {
        Self {
            search: search.into(),
            structural,
        }
    }

    /// Whether the query matches every product.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.search.trim().is_empty() && self.structural.is_empty()
    }

    /// Clear the search text and structural filter.
    pub fn reset(&mut self) {
        self.search.clear();
        self.structural.clear();
    }

    /// Whether a product passes both the text and structural filters.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        matches_text(&self.search, product) && self.structural.matches(product)
    }
}

impl CatalogQuery {
    /// An empty query whose structural filter uses the given model.
    #[must_use]
    pub fn for_model(model: FilterModel) -> Self {
        Self::new(String::new(), StructuralSelection::empty(model))
    }
}

/// Case-insensitive substring match on name, brand, and description.
///
/// Blank search text matches every product.
#[must_use]
pub fn matches_text(search: &str, product: &Product) -> bool {
    let needle = search.trim();
    if needle.is_empty() {
        return true;
    }
    let needle = needle.to_lowercase();

    [&product.name, &product.brand, &product.description]
        .into_iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Products matching the query, in catalog order.
#[must_use]
pub fn filter_catalog<'a, F: StructuralFilter>(
    products: &'a [Product],
    query: &CatalogQuery<F>,
) -> Vec<&'a Product> {
    products.iter().filter(|p| query.matches(p)).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn names(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.name.clone()).collect()
    }

    #[test]
    fn test_empty_query_returns_everything_in_order() {
        let catalog = Catalog::seeded();
        let query = CatalogQuery::<SizeSelection>::default();
        let result = filter_catalog(catalog.products(), &query);

        let expected: Vec<&Product> = catalog.products().iter().collect();
        assert_eq!(names(&result), names(&expected));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let catalog = Catalog::seeded();
        for term in ["nike", "NIKE", "NiKe"] {
            let query = CatalogQuery::new(term, SizeSelection::default());
            let result = filter_catalog(catalog.products(), &query);
            assert_eq!(names(&result), vec!["Кроссовки Nike Air Max"]);
        }
    }

    #[test]
    fn test_search_matches_exactly_name_or_brand_subset() {
        let catalog = Catalog::seeded();
        let query = CatalogQuery::new("nike", CategorySelection::default());
        let result = filter_catalog(catalog.products(), &query);

        let expected: Vec<&Product> = catalog
            .products()
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains("nike") || p.brand.to_lowercase().contains("nike")
            })
            .collect();
        assert_eq!(names(&result), names(&expected));
    }

    #[test]
    fn test_search_cyrillic_lowercases() {
        let catalog = Catalog::seeded();
        let query = CatalogQuery::new("БОТИНКИ", SizeSelection::default());
        let result = filter_catalog(catalog.products(), &query);
        assert_eq!(names(&result), vec!["Ботинки зимние"]);
    }

    #[test]
    fn test_search_matches_description() {
        let catalog = Catalog::seeded();
        let query = CatalogQuery::new("канвас", SizeSelection::default());
        let result = filter_catalog(catalog.products(), &query);
        assert_eq!(names(&result), vec!["Слипоны Vans"]);
    }

    #[test]
    fn test_blank_search_matches_everything() {
        let catalog = Catalog::seeded();
        let query = CatalogQuery::new("   ", SizeSelection::default());
        assert!(query.is_empty());
        assert_eq!(
            filter_catalog(catalog.products(), &query).len(),
            catalog.products().len()
        );
    }

    #[test]
    fn test_size_filter_intersects() {
        let catalog = Catalog::seeded();
        let query = CatalogQuery::new("", SizeSelection::new([ShoeSize::new(44)]));
        let result = filter_catalog(catalog.products(), &query);
        assert_eq!(names(&result), vec!["Ботинки зимние"]);

        let query = CatalogQuery::new(
            "",
            SizeSelection::new([ShoeSize::new(37), ShoeSize::new(44)]),
        );
        let result = filter_catalog(catalog.products(), &query);
        assert_eq!(names(&result), vec!["Ботинки зимние", "Кеды Converse"]);
    }

    #[test]
    fn test_size_toggle() {
        let mut sizes = SizeSelection::default();
        sizes.toggle(ShoeSize::new(40));
        assert!(sizes.contains(ShoeSize::new(40)));
        sizes.toggle(ShoeSize::new(40));
        assert!(StructuralFilter::is_empty(&sizes));
    }

    #[test]
    fn test_category_filter() {
        let catalog = Catalog::seeded();
        let query = CatalogQuery::new("", CategorySelection::new("Кеды"));
        let result = filter_catalog(catalog.products(), &query);
        assert_eq!(names(&result), vec!["Кеды Converse"]);
    }

    #[test]
    fn test_category_select_twice_deselects() {
        let mut category = CategorySelection::default();
        category.select("Туфли");
        assert_eq!(category.selected(), Some("Туфли"));
        category.select("Кеды");
        assert_eq!(category.selected(), Some("Кеды"));
        category.select("Кеды");
        assert_eq!(category.selected(), None);
    }

    #[test]
    fn test_text_and_structural_are_anded() {
        let catalog = Catalog::seeded();
        let query = CatalogQuery::new("converse", SizeSelection::new([ShoeSize::new(43)]));
        assert!(filter_catalog(catalog.products(), &query).is_empty());

        let query = CatalogQuery::new("converse", SizeSelection::new([ShoeSize::new(37)]));
        assert_eq!(filter_catalog(catalog.products(), &query).len(), 1);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut query = CatalogQuery::new("vans", CategorySelection::new("Слипоны"));
        assert!(!query.is_empty());
        query.reset();
        assert!(query.is_empty());
        assert_eq!(query, CatalogQuery::default());
    }

    #[test]
    fn test_selection_rejects_wrong_model() {
        let mut sizes = StructuralSelection::empty(FilterModel::Sizes);
        assert!(!sizes.select_category("Кеды"));
        assert!(sizes.toggle_size(ShoeSize::new(40)));
        assert!(sizes.has_size(&ShoeSize::new(40)));

        let mut category = StructuralSelection::empty(FilterModel::Category);
        assert!(!category.toggle_size(ShoeSize::new(40)));
        assert!(category.select_category("Кеды"));
        assert_eq!(category.category(), Some("Кеды"));
        assert_eq!(category.model(), FilterModel::Category);
    }

    #[test]
    fn test_filter_model_from_str() {
        assert_eq!("sizes".parse(), Ok(FilterModel::Sizes));
        assert_eq!(" Category ".parse(), Ok(FilterModel::Category));
        assert!("brand".parse::<FilterModel>().is_err());
    }

    #[test]
    fn test_selection_serde_is_tagged() {
        let mut selection = StructuralSelection::empty(FilterModel::Sizes);
        selection.toggle_size(ShoeSize::new(41));
        let json = serde_json::to_value(&selection).unwrap();
        assert_eq!(json["model"], "sizes");
        assert_eq!(json["sizes"], serde_json::json!([41]));
    }
}
