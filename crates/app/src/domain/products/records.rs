//! Product Records

use jiff::Timestamp;

use crate::uuids::TypedUuid;

/// Product UUID
pub type ProductUuid = TypedUuid<ProductRecord>;

/// Product Record
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    pub uuid: ProductUuid,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub in_stock: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Number of products sharing one category value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCount {
    pub category: String,
    pub count: u64,
}

/// Collection-wide aggregates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductStats {
    pub total_products: u64,
    pub count_by_category: Vec<CategoryCount>,
}

/// One page of a filtered product listing.
///
/// `total` and `total_pages` describe the whole filtered set, not just `results`.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductPage {
    pub total: u64,
    pub page: u64,
    pub total_pages: u64,
    pub results: Vec<ProductRecord>,
}
