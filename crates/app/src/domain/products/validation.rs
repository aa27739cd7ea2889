//! Product payload validation.

use thiserror::Error;

use crate::domain::products::data::{Field, ProductDraft, ProductPayload};

/// Reasons a product payload is rejected, in the order they are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ProductValidationError {
    #[error("Missing required fields: name, description, price, or category")]
    MissingRequiredFields,

    #[error("Name, description, and category must be strings")]
    WrongTextType,

    #[error("Price must be a non-negative number")]
    InvalidPrice,

    #[error("inStock must be a boolean")]
    InStockNotBoolean,
}

impl ProductPayload {
    /// Check the payload and convert it into a [`ProductDraft`].
    ///
    /// The first failing rule wins.
    ///
    /// # Errors
    ///
    /// Returns the [`ProductValidationError`] for the first rule the payload breaks.
    pub fn validate(self) -> Result<ProductDraft, ProductValidationError> {
        let Self {
            name,
            description,
            price,
            category,
            in_stock,
        } = self;

        if is_missing_text(&name)
            || is_missing_text(&description)
            || is_missing_text(&category)
            || matches!(price, Field::Absent)
        {
            return Err(ProductValidationError::MissingRequiredFields);
        }

        let (Field::Present(name), Field::Present(description), Field::Present(category)) =
            (name, description, category)
        else {
            return Err(ProductValidationError::WrongTextType);
        };

        let price = match price {
            Field::Present(price) if price.is_finite() && price >= 0.0 => price,
            Field::Present(_) | Field::Mistyped | Field::Absent => {
                return Err(ProductValidationError::InvalidPrice);
            }
        };

        let in_stock = match in_stock {
            Field::Absent => None,
            Field::Present(in_stock) => Some(in_stock),
            Field::Mistyped => return Err(ProductValidationError::InStockNotBoolean),
        };

        Ok(ProductDraft {
            name,
            description,
            price,
            category,
            in_stock,
        })
    }
}

fn is_missing_text(field: &Field<String>) -> bool {
    match field {
        Field::Absent => true,
        Field::Present(value) => value.is_empty(),
        Field::Mistyped => false,
    }
}
