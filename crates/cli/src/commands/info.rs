//! Reference listings: the role capability matrix and pickup points.

use std::io::{self, Write};

use shoe_shop_core::Role;
use shoe_shop_storefront::catalog::Catalog;
use shoe_shop_storefront::policy::visible_tabs;

/// Print capabilities and visible tabs for every role.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn roles(out: &mut impl Write) -> io::Result<()> {
    for role in Role::ALL {
        let caps = role.capabilities();
        let tabs = visible_tabs(caps)
            .iter()
            .map(|tab| tab.label())
            .collect::<Vec<_>>()
            .join(", ");

        writeln!(
            out,
            "{:<8} {:<14} фильтры: {} | заказы: {} | покупка: {} | вкладки: {}",
            role.as_str(),
            role.label(),
            yes_no(caps.can_use_filters),
            yes_no(caps.can_manage_orders),
            yes_no(caps.can_purchase),
            tabs
        )?;
    }
    Ok(())
}

/// List pickup points with their opening hours.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn pickup(out: &mut impl Write) -> io::Result<()> {
    let catalog = Catalog::seeded();
    for point in catalog.pickup_points() {
        writeln!(out, "{}: {}, {}", point.name, point.address, point.hours)?;
    }
    Ok(())
}

const fn yes_no(value: bool) -> &'static str {
    if value { "да" } else { "нет" }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn output(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_roles_matrix() {
        let text = output(|out| roles(out));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines.first().unwrap().starts_with("guest"));
        assert!(lines.first().unwrap().contains("покупка: нет"));
        assert!(lines.last().unwrap().contains("Заказы"));
    }

    #[test]
    fn test_pickup_listing() {
        let text = output(|out| pickup(out));
        assert_eq!(text.lines().count(), 3);
        assert!(text.contains("ул. Ленина, д. 45"));
    }
}
