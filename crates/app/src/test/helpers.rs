//! Test Helpers

use crate::domain::products::{
    data::{Field, NewProduct, ProductPayload},
    records::ProductUuid,
};

/// A valid payload whose description is derived from the name.
pub(crate) fn payload(name: &str, category: &str, price: f64) -> ProductPayload {
    ProductPayload {
        name: Field::Present(name.to_string()),
        description: Field::Present(format!("{name} description")),
        price: Field::Present(price),
        category: Field::Present(category.to_string()),
        in_stock: Field::Absent,
    }
}

pub(crate) fn sample_new_product(name: &str, category: &str) -> NewProduct {
    NewProduct {
        uuid: ProductUuid::new(),
        name: name.to_string(),
        description: format!("{name} description"),
        price: 10.0,
        category: category.to_string(),
        in_stock: true,
    }
}
