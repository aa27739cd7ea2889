//! Product Search Handler

use std::sync::Arc;

use salvo::{oapi::extract::QueryParam, prelude::*};

use crate::{
    extensions::*,
    products::{errors::into_status_error, models::ProductResponse},
    state::State,
};

/// Product Search Handler
///
/// Returns every product whose name contains `name`, ignoring case.
#[endpoint(
    tags("products"),
    summary = "Search Products",
    security(("api_key" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Matching products"),
        (status_code = StatusCode::BAD_REQUEST, description = "Missing search term"),
        (status_code = StatusCode::NOT_FOUND, description = "No products matched"),
    ),
)]
pub(crate) async fn handler(
    name: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<Vec<ProductResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let products = state
        .app
        .products
        .search_products(name.into_inner().unwrap_or_default())
        .await
        .map_err(into_status_error)?;

    Ok(Json(products.into_iter().map(Into::into).collect()))
}
