//! Catalog listing command.
//!
//! Runs the storefront's access policy for a role, so filters are ignored for
//! roles that cannot use them, exactly as the web catalog behaves.

use std::io::{self, Write};

use shoe_shop_core::{Role, ShoeSize};
use shoe_shop_storefront::catalog::{
    Catalog, CatalogQuery, CategorySelection, SizeSelection, StructuralSelection,
};
use shoe_shop_storefront::policy::{self, ProductCard};

/// Arguments for `shop-cli catalog`.
#[derive(Debug, Clone)]
pub struct CatalogArgs {
    pub role: Role,
    pub search: String,
    pub sizes: Vec<ShoeSize>,
    pub category: Option<String>,
}

impl CatalogArgs {
    fn query(&self) -> CatalogQuery {
        let structural = match &self.category {
            Some(category) => StructuralSelection::Category(CategorySelection::new(category)),
            None => StructuralSelection::Sizes(SizeSelection::new(self.sizes.iter().copied())),
        };
        CatalogQuery::new(self.search.clone(), structural)
    }
}

/// List the seeded catalog as `args.role` would see it.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn list(out: &mut impl Write, args: &CatalogArgs) -> io::Result<()> {
    let catalog = Catalog::seeded();
    let query = args.query();
    let output = policy::evaluate(args.role, &query, catalog.products());

    if !output.show_filters && !query.is_empty() {
        tracing::warn!(
            role = %args.role,
            "Role cannot use filters; listing every product"
        );
    }

    if output.is_empty() {
        writeln!(out, "Товары не найдены")?;
        return Ok(());
    }

    for card in &output.products {
        writeln!(out, "{}", format_card(card))?;
    }
    Ok(())
}

fn format_card(card: &ProductCard<'_>) -> String {
    let product = card.product;
    let sizes = product
        .sizes
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",");
    let price = match product.discounted_price {
        Some(discounted) => format!(
            "{discounted} (было {}, −{}%)",
            product.price, product.discount_percent
        ),
        None => product.price.to_string(),
    };
    let purchase = if card.can_purchase { "да" } else { "нет" };

    format!(
        "#{} {} [{}] {} | размеры: {} | в наличии: {} | купить: {}",
        product.id, product.name, product.brand, price, sizes, product.stock, purchase
    )
}
