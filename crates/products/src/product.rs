use serde::{Deserialize, Deserializer, Serialize};

use storefront_core::ProductId;

/// Everything about a product except its identifier.
///
/// This is what the admin form submits on create and update; keeping the
/// identifier out of it means an update can never rewrite the identifier.
/// Field names follow the backend's wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductFields {
    #[serde(rename = "productsName")]
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub specs: String,
    #[serde(deserialize_with = "price_or_nan")]
    pub price: f64,
    #[serde(default)]
    pub highlight: String,
}

/// A catalog record as owned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "productsId")]
    pub id: ProductId,
    #[serde(flatten)]
    pub fields: ProductFields,
}

impl Product {
    pub fn new(id: ProductId, fields: ProductFields) -> Self {
        Self { id, fields }
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.fields.name
    }

    pub fn category(&self) -> &str {
        &self.fields.category
    }

    pub fn image(&self) -> &str {
        &self.fields.image
    }

    pub fn specs(&self) -> &str {
        &self.fields.specs
    }

    pub fn highlight(&self) -> &str {
        &self.fields.highlight
    }

    pub fn price(&self) -> f64 {
        self.fields.price
    }
}

/// Category filter value that matches every product.
pub const ALL_CATEGORIES: &str = "all";

/// Whether a product in `category` is shown under `filter` (`"all"` shows
/// everything). Comparison is exact and case-sensitive.
pub fn matches_category(category: &str, filter: &str) -> bool {
    filter == ALL_CATEGORIES || category == filter
}

// A backend that once stored a NaN price hands it back as `null`.
fn price_or_nan<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn phone() -> ProductFields {
        ProductFields {
            name: "Phone".to_string(),
            category: "electronics".to_string(),
            image: "a.jpg".to_string(),
            specs: "64GB".to_string(),
            price: 19999.0,
            highlight: "Fast".to_string(),
        }
    }

    #[test]
    fn decodes_backend_record_with_wire_names() {
        let raw = json!({
            "productsId": 3,
            "productsName": "Phone",
            "category": "electronics",
            "image": "a.jpg",
            "specs": "64GB",
            "price": 19999,
            "highlight": "Fast"
        });

        let product: Product = serde_json::from_value(raw).unwrap();
        assert_eq!(product.id(), ProductId::new(3));
        assert_eq!(product.fields, phone());
    }

    #[test]
    fn encodes_with_wire_names() {
        let product = Product::new(ProductId::new(9), phone());
        let value = serde_json::to_value(&product).unwrap();

        assert_eq!(value["productsId"], 9);
        assert_eq!(value["productsName"], "Phone");
        assert_eq!(value["highlight"], "Fast");
        assert!(value.get("name").is_none());
        assert!(value.get("id").is_none());
    }

    #[test]
    fn missing_optional_text_decodes_as_empty() {
        let raw = json!({
            "productsId": 1,
            "productsName": "Cable",
            "category": "accessories",
            "price": 99.5
        });

        let product: Product = serde_json::from_value(raw).unwrap();
        assert_eq!(product.highlight(), "");
        assert_eq!(product.specs(), "");
        assert_eq!(product.image(), "");
        assert_eq!(product.price(), 99.5);
    }

    #[test]
    fn null_price_decodes_as_nan() {
        let raw = json!({
            "productsId": 1,
            "productsName": "Broken",
            "price": null
        });

        let product: Product = serde_json::from_value(raw).unwrap();
        assert!(product.price().is_nan());
    }

    #[test]
    fn category_filter_matches_all_and_exact() {
        let product = Product::new(ProductId::new(1), phone());
        assert!(matches_category(product.category(), "all"));
        assert!(matches_category(product.category(), "electronics"));
        assert!(!matches_category(product.category(), "fashion"));
        assert!(!matches_category(product.category(), "Electronics"));
    }
}
