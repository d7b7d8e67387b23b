//! Sample catalog for `--demo` runs.

use storefront_client::InMemoryGateway;
use storefront_products::ProductFields;

fn item(name: &str, category: &str, specs: &str, price: f64, highlight: &str) -> ProductFields {
    ProductFields {
        name: name.to_string(),
        category: category.to_string(),
        image: format!("images/{}.jpg", name.to_lowercase().replace(' ', "-")),
        specs: specs.to_string(),
        price,
        highlight: highlight.to_string(),
    }
}

pub fn sample_catalog() -> Vec<ProductFields> {
    vec![
        item("Nova Phone", "electronics", "6.5\" OLED, 128GB", 24999.0, "All-day battery"),
        item("Air Laptop", "electronics", "14\", 16GB RAM, 512GB SSD", 74990.0, "Under 1.2 kg"),
        item("Linen Shirt", "fashion", "100% linen, regular fit", 1499.0, "Breathable"),
        item("Trail Shoes", "fashion", "Sizes 6-11", 3999.5, "Grippy outsole"),
        item("Steel Bottle", "home", "750ml, double wall", 899.0, "Keeps cold 24h"),
    ]
}

/// Backend double pre-filled with `sample_catalog`.
pub fn demo_gateway() -> InMemoryGateway {
    InMemoryGateway::seeded(sample_catalog())
}
