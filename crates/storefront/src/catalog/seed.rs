//! Demo data for the shoe shop.

use chrono::NaiveDate;

use shoe_shop_core::{OrderId, OrderStatus, PickupPointId, Price, ProductId, ShoeSize};

use super::{Order, PickupPoint, Product};

const PLACEHOLDER_IMAGE: &str = "/static/img/placeholder.svg";

struct ProductSeed {
    id: i32,
    name: &'static str,
    price: i64,
    sizes: std::ops::RangeInclusive<u8>,
    category: &'static str,
    brand: &'static str,
    description: &'static str,
    stock: u32,
    discount_percent: u8,
    supplier: &'static str,
}

impl From<ProductSeed> for Product {
    fn from(seed: ProductSeed) -> Self {
        let price = Price::rub(seed.price);
        let discounted_price =
            (seed.discount_percent > 0).then(|| price.discounted(seed.discount_percent));

        Self {
            id: ProductId::new(seed.id),
            name: seed.name.to_owned(),
            price,
            discounted_price,
            image: PLACEHOLDER_IMAGE.to_owned(),
            sizes: seed.sizes.map(ShoeSize::new).collect(),
            category: seed.category.to_owned(),
            brand: seed.brand.to_owned(),
            description: seed.description.to_owned(),
            stock: seed.stock,
            discount_percent: seed.discount_percent,
            supplier: seed.supplier.to_owned(),
        }
    }
}

pub(super) fn products() -> Vec<Product> {
    [
        ProductSeed {
            id: 1,
            name: "Кроссовки Nike Air Max",
            price: 8999,
            sizes: 38..=43,
            category: "Кроссовки",
            brand: "Nike",
            description: "Лёгкие беговые кроссовки с амортизирующей подошвой",
            stock: 12,
            discount_percent: 10,
            supplier: "Спорт-Импорт",
        },
        ProductSeed {
            id: 2,
            name: "Туфли классические",
            price: 5499,
            sizes: 38..=42,
            category: "Туфли",
            brand: "Respect",
            description: "Кожаные туфли для офиса и торжественных случаев",
            stock: 7,
            discount_percent: 0,
            supplier: "Обувьторг",
        },
        ProductSeed {
            id: 3,
            name: "Ботинки зимние",
            price: 7299,
            sizes: 39..=44,
            category: "Ботинки",
            brand: "Timberland",
            description: "Утеплённые водонепроницаемые ботинки на меху",
            stock: 4,
            discount_percent: 15,
            supplier: "Северная обувь",
        },
        ProductSeed {
            id: 4,
            name: "Кеды Converse",
            price: 4599,
            sizes: 37..=42,
            category: "Кеды",
            brand: "Converse",
            description: "Текстильные кеды на резиновой подошве",
            stock: 20,
            discount_percent: 0,
            supplier: "Спорт-Импорт",
        },
        ProductSeed {
            id: 5,
            name: "Сандалии летние",
            price: 2999,
            sizes: 38..=42,
            category: "Сандалии",
            brand: "Adidas",
            description: "Открытые сандалии на липучках для жаркой погоды",
            stock: 0,
            discount_percent: 5,
            supplier: "Спорт-Импорт",
        },
        ProductSeed {
            id: 6,
            name: "Слипоны Vans",
            price: 3799,
            sizes: 38..=43,
            category: "Слипоны",
            brand: "Vans",
            description: "Слипоны без шнурков из плотного канваса",
            stock: 9,
            discount_percent: 0,
            supplier: "Скейт-Маркет",
        },
    ]
    .into_iter()
    .map(Product::from)
    .collect()
}

pub(super) fn orders() -> Vec<Order> {
    vec![
        Order {
            id: OrderId::new(1),
            product_name: "Кроссовки Nike Air Max".to_owned(),
            size: ShoeSize::new(42),
            quantity: 1,
            total: Price::rub(8999),
            status: OrderStatus::new(OrderStatus::PROCESSING),
            date: date(2024, 12, 20),
        },
        Order {
            id: OrderId::new(2),
            product_name: "Туфли классические".to_owned(),
            size: ShoeSize::new(39),
            quantity: 2,
            total: Price::rub(5499).times(2),
            status: OrderStatus::new(OrderStatus::DELIVERED),
            date: date(2024, 12, 18),
        },
    ]
}

pub(super) fn pickup_points() -> Vec<PickupPoint> {
    [
        (1, "Пункт выдачи №1", "ул. Ленина, д. 45", "9:00 - 21:00"),
        (2, "Пункт выдачи №2", "пр. Мира, д. 12", "10:00 - 20:00"),
        (3, "Пункт выдачи №3", "ул. Пушкина, д. 78", "8:00 - 22:00"),
    ]
    .into_iter()
    .map(|(id, name, address, hours)| PickupPoint {
        id: PickupPointId::new(id),
        name: name.to_owned(),
        address: address.to_owned(),
        hours: hours.to_owned(),
    })
    .collect()
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_totals() {
        let orders = orders();
        let totals: Vec<String> = orders.iter().map(|o| o.total.to_string()).collect();
        assert_eq!(totals, vec!["8\u{a0}999 ₽", "10\u{a0}998 ₽"]);
    }

    #[test]
    fn test_order_dates() {
        let orders = orders();
        assert_eq!(orders.first().map(|o| o.date.to_string()).as_deref(), Some("2024-12-20"));
    }

    #[test]
    fn test_nike_sizes() {
        let products = products();
        let nike = products.first().map(|p| p.sizes.clone()).unwrap_or_default();
        assert_eq!(nike.first(), Some(&ShoeSize::new(38)));
        assert_eq!(nike.last(), Some(&ShoeSize::new(43)));
        assert_eq!(nike.len(), 6);
    }
}
