//! Delete Product Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    extensions::*,
    products::{errors::into_status_error, models::ProductDeletedResponse},
    state::State,
};

/// Delete Product Handler
///
/// Removes a product and returns it.
#[endpoint(
    tags("products"),
    summary = "Delete Product",
    security(("api_key" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Product deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "products.delete",
    skip(id, depot),
    fields(product_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    id: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<ProductDeletedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let id = id.into_inner();

    tracing::Span::current().record("product_uuid", tracing::field::display(id));

    let deleted = state
        .app
        .products
        .delete_product(id.into())
        .await
        .map_err(into_status_error)?;

    tracing::info!(product_uuid = %id, "deleted product");

    Ok(Json(ProductDeletedResponse {
        message: "Product deleted".to_string(),
        deleted: deleted.into(),
    }))
}
