//! Request bodies sent to the backend.
//!
//! Create posts `ProductFields` as-is (`productsName`, `category`, `image`,
//! `specs`, `price`, `highlight`). Update additionally repeats the identifier
//! in the body.

use serde::Serialize;

use storefront_core::ProductId;
use storefront_products::ProductFields;

/// Body of `PUT /products/{id}`.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateProductRequest<'a> {
    #[serde(rename = "productsId")]
    pub id: ProductId,
    #[serde(flatten)]
    pub fields: &'a ProductFields,
}

/// Decode a list response.
///
/// Anything that is not a JSON array counts as an empty catalog; a malformed
/// record inside an array is a decode error.
pub fn decode_product_list(
    value: serde_json::Value,
) -> Result<Vec<storefront_products::Product>, serde_json::Error> {
    match value {
        serde_json::Value::Array(_) => serde_json::from_value(value),
        _ => Ok(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn update_body_repeats_id_and_keeps_highlight() {
        let fields = ProductFields {
            name: "Phone".to_string(),
            category: "electronics".to_string(),
            image: "a.jpg".to_string(),
            specs: "64GB".to_string(),
            price: 19999.0,
            highlight: "Fast".to_string(),
        };
        let body = serde_json::to_value(UpdateProductRequest {
            id: ProductId::new(4),
            fields: &fields,
        })
        .unwrap();

        assert_eq!(
            body,
            json!({
                "productsId": 4,
                "productsName": "Phone",
                "category": "electronics",
                "image": "a.jpg",
                "specs": "64GB",
                "price": 19999.0,
                "highlight": "Fast"
            })
        );
    }

    #[test]
    fn non_array_list_is_empty() {
        assert!(decode_product_list(json!({"error": "boom"})).unwrap().is_empty());
        assert!(decode_product_list(json!(null)).unwrap().is_empty());
    }

    #[test]
    fn malformed_record_in_list_is_an_error() {
        let err = decode_product_list(json!([{"productsId": "x"}]));
        assert!(err.is_err());
    }
}
