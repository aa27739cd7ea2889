//! App Router

use std::sync::Arc;

use salvo::{
    affix_state::inject,
    oapi::{
        OpenApi,
        security::{ApiKey, ApiKeyValue, SecurityScheme},
    },
    prelude::*,
    trailing_slash::remove_slash,
};

use crate::{
    auth::{self, middleware::API_KEY_HEADER},
    healthcheck, observability, products,
    state::State,
    welcome,
};

/// Product routes, guarded by the API key middleware.
pub(crate) fn products_router() -> Router {
    Router::with_path("api/products")
        .hoop(auth::middleware::handler)
        .get(products::index::handler)
        .post(products::create::handler)
        .push(Router::with_path("stats").get(products::stats::handler))
        .push(Router::with_path("search").get(products::search::handler))
        .push(
            Router::with_path("{id}")
                .get(products::get::handler)
                .put(products::update::handler)
                .delete(products::delete::handler),
        )
}

/// Full application router, without the API documentation routes.
pub(crate) fn app_router(state: Arc<State>) -> Router {
    Router::new()
        .hoop(CatchPanic::new())
        .hoop(observability::request_logging)
        .hoop(remove_slash())
        .hoop(inject(state))
        .get(welcome::handler)
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(products_router())
}

/// OpenAPI document for `router`, with the `x-api-key` header scheme.
pub(crate) fn api_doc(router: &Router) -> OpenApi {
    OpenApi::new("Product Catalog API", env!("CARGO_PKG_VERSION"))
        .add_security_scheme(
            "api_key",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new(API_KEY_HEADER))),
        )
        .merge_router(router)
}
