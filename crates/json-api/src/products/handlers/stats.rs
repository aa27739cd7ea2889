//! Product Stats Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    extensions::*,
    products::{errors::into_status_error, models::ProductStatsResponse},
    state::State,
};

/// Product Stats Handler
///
/// Returns the product total and per-category counts.
#[endpoint(
    tags("products"),
    summary = "Product Stats",
    security(("api_key" = []))
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<ProductStatsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let stats = state
        .app
        .products
        .product_stats()
        .await
        .map_err(into_status_error)?;

    Ok(Json(stats.into()))
}
