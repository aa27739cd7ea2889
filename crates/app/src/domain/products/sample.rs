//! Sample catalog used to bootstrap an empty store.

use crate::domain::products::data::ProductDraft;

pub(crate) fn sample_products() -> [ProductDraft; 3] {
    [
        ProductDraft {
            name: "Laptop".to_string(),
            description: "High-performance laptop with 16GB RAM".to_string(),
            price: 1200.0,
            category: "electronics".to_string(),
            in_stock: Some(true),
        },
        ProductDraft {
            name: "Smartphone".to_string(),
            description: "Latest model with 128GB storage".to_string(),
            price: 800.0,
            category: "electronics".to_string(),
            in_stock: Some(true),
        },
        ProductDraft {
            name: "Coffee Maker".to_string(),
            description: "Programmable coffee maker with timer".to_string(),
            price: 50.0,
            category: "kitchen".to_string(),
            in_stock: Some(false),
        },
    ]
}
