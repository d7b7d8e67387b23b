//! The admin product form: raw input, coercion, and create/update mode.

use thiserror::Error;

use storefront_core::ProductId;
use storefront_products::{Product, ProductFields};

/// What the operator typed, exactly as the form widgets hold it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub name: String,
    pub category: String,
    pub image: String,
    pub specs: String,
    pub price: String,
    pub highlight: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("price is not a number: {0:?}")]
    InvalidPrice(String),
}

impl FormInput {
    /// Populate every field from a fetched record.
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name().to_string(),
            category: product.category().to_string(),
            image: product.image().to_string(),
            specs: product.specs().to_string(),
            price: product.price().to_string(),
            highlight: product.highlight().to_string(),
        }
    }

    /// Coerce into the fields sent to the backend.
    ///
    /// Text is taken as-is. The price must parse as a finite number.
    pub fn coerce(&self) -> Result<ProductFields, FormError> {
        let price = self
            .price
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|price| price.is_finite())
            .ok_or_else(|| FormError::InvalidPrice(self.price.clone()))?;

        Ok(ProductFields {
            name: self.name.clone(),
            category: self.category.clone(),
            image: self.image.clone(),
            specs: self.specs.clone(),
            price,
            highlight: self.highlight.clone(),
        })
    }
}

/// Whether a submit creates a new record or replaces an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Update(ProductId),
}

/// Form contents plus the active identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    /// `None` is create mode; `Some` is the record being edited.
    pub active_id: Option<ProductId>,
    pub input: FormInput,
}

impl FormState {
    pub fn mode(&self) -> FormMode {
        match self.active_id {
            Some(id) => FormMode::Update(id),
            None => FormMode::Create,
        }
    }

    pub fn load(product: &Product) -> Self {
        Self {
            active_id: Some(product.id()),
            input: FormInput::from_product(product),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(price: &str) -> FormInput {
        FormInput {
            name: "Phone".to_string(),
            category: "electronics".to_string(),
            image: "a.jpg".to_string(),
            specs: "64GB".to_string(),
            price: price.to_string(),
            highlight: "Fast".to_string(),
        }
    }

    #[test]
    fn coerces_price_as_float() {
        assert_eq!(input("19999").coerce().unwrap().price, 19999.0);
        assert_eq!(input(" 12.5 ").coerce().unwrap().price, 12.5);
    }

    #[test]
    fn rejects_non_numeric_price() {
        for bad in ["", "abc", "12abc", "NaN", "inf"] {
            assert_eq!(
                input(bad).coerce(),
                Err(FormError::InvalidPrice(bad.to_string())),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn from_product_round_trips_through_coerce() {
        let fields = input("19999.5").coerce().unwrap();
        let product = Product::new(ProductId::new(3), fields.clone());
        assert_eq!(FormInput::from_product(&product).coerce().unwrap(), fields);
    }

    #[test]
    fn mode_follows_active_id() {
        let mut state = FormState::default();
        assert_eq!(state.mode(), FormMode::Create);

        let product = Product::new(ProductId::new(8), input("1").coerce().unwrap());
        state = FormState::load(&product);
        assert_eq!(state.mode(), FormMode::Update(ProductId::new(8)));
        assert_eq!(state.input.highlight, "Fast");

        state.reset();
        assert_eq!(state, FormState::default());
    }
}
