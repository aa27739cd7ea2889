//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};
use secrecy::SecretString;

use catalog_app::{
    auth::AccessGate,
    context::AppContext,
    products::{
        MockProductsService,
        records::{ProductRecord, ProductUuid},
    },
};

use crate::state::State;

pub(crate) const TEST_API_KEY: &str = "test-api-key";

pub(crate) fn make_product(name: &str, category: &str) -> ProductRecord {
    ProductRecord {
        uuid: ProductUuid::new(),
        name: name.to_string(),
        description: format!("{name} description"),
        price: 10.0,
        category: category.to_string(),
        in_stock: true,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn state_with_products(products: MockProductsService) -> Arc<State> {
    State::from_app_context(AppContext {
        products: Arc::new(products),
        access: Arc::new(AccessGate::new(SecretString::from(TEST_API_KEY.to_string()))),
    })
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_products(products)))
            .push(route),
    )
}
