//! Product Index Handler

use std::sync::Arc;

use salvo::{oapi::extract::QueryParam, prelude::*};

use catalog_app::products::query::{Pagination, ProductFilter};

use crate::{
    extensions::*,
    products::{errors::into_status_error, models::ProductPageResponse},
    state::State,
};

/// Product Index Handler
///
/// Returns one page of products, optionally narrowed to a category
/// (case-insensitive substring match).
#[endpoint(
    tags("products"),
    summary = "List Products",
    security(("api_key" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Page of products"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid page or limit"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    category: QueryParam<String, false>,
    page: QueryParam<String, false>,
    limit: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<ProductPageResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let pagination = Pagination::new(page.into_count("page")?, limit.into_count("limit")?)
        .map_err(into_status_error)?;

    let page = state
        .app
        .products
        .list_products(ProductFilter::by_category(category.into_inner()), pagination)
        .await
        .map_err(into_status_error)?;

    Ok(Json(page.into()))
}
