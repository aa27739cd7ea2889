//! Root welcome handler

use salvo::prelude::*;

/// Welcome text pointing at the product API.
#[handler]
pub(crate) async fn handler() -> &'static str {
    "Welcome to the Product API! Go to /api/products to see all products."
}
