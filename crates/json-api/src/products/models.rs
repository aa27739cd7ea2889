//! Product request and response bodies.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use catalog_app::products::{
    data::{Field, ProductPayload},
    records::{CategoryCount, ProductPage, ProductRecord, ProductStats},
};

/// Product create/update body.
///
/// Fields are checked by the catalog service, so a wrong JSON type is accepted
/// here and reported as a validation error rather than a parse error.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct ProductRequest {
    #[salvo(schema(value_type = String))]
    pub name: Field<String>,

    #[salvo(schema(value_type = String))]
    pub description: Field<String>,

    /// Non-negative price
    #[salvo(schema(value_type = f64))]
    pub price: Field<f64>,

    #[salvo(schema(value_type = String))]
    pub category: Field<String>,

    /// Defaults to `true` on create; left unchanged on update when omitted
    #[salvo(schema(value_type = Option<bool>))]
    pub in_stock: Field<bool>,
}

impl From<ProductRequest> for ProductPayload {
    fn from(request: ProductRequest) -> Self {
        ProductPayload {
            name: request.name,
            description: request.description,
            price: request.price,
            category: request.category,
            in_stock: request.in_stock,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductResponse {
    /// The unique identifier of the product
    pub id: Uuid,

    pub name: String,

    pub description: String,

    pub price: f64,

    pub category: String,

    pub in_stock: bool,

    /// The date and time the product was created
    pub created_at: String,

    /// The date and time the product was last updated
    pub updated_at: String,
}

impl From<ProductRecord> for ProductResponse {
    fn from(product: ProductRecord) -> Self {
        ProductResponse {
            id: product.uuid.into(),
            name: product.name,
            description: product.description,
            price: product.price,
            category: product.category,
            in_stock: product.in_stock,
            created_at: product.created_at.to_string(),
            updated_at: product.updated_at.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductPageResponse {
    /// Number of products matching the filter
    pub total: u64,

    pub page: u64,

    pub total_pages: u64,

    pub results: Vec<ProductResponse>,
}

impl From<ProductPage> for ProductPageResponse {
    fn from(page: ProductPage) -> Self {
        ProductPageResponse {
            total: page.total,
            page: page.page,
            total_pages: page.total_pages,
            results: page.results.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CategoryCountResponse {
    pub category: String,
    pub count: u64,
}

impl From<CategoryCount> for CategoryCountResponse {
    fn from(entry: CategoryCount) -> Self {
        CategoryCountResponse {
            category: entry.category,
            count: entry.count,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductStatsResponse {
    pub total_products: u64,

    /// Per-category counts, ordered by category
    pub count_by_category: Vec<CategoryCountResponse>,
}

impl From<ProductStats> for ProductStatsResponse {
    fn from(stats: ProductStats) -> Self {
        ProductStatsResponse {
            total_products: stats.total_products,
            count_by_category: stats.count_by_category.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductDeletedResponse {
    pub message: String,
    pub deleted: ProductResponse,
}
