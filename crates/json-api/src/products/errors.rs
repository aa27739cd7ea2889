//! Product Errors

use salvo::http::StatusError;
use tracing::error;

use catalog_app::products::ProductsServiceError;

pub(crate) fn into_status_error(error: ProductsServiceError) -> StatusError {
    match error {
        ProductsServiceError::Validation(source) => {
            StatusError::bad_request().brief(source.to_string())
        }
        ProductsServiceError::InvalidPagination | ProductsServiceError::MissingSearchTerm => {
            StatusError::bad_request().brief(error.to_string())
        }
        ProductsServiceError::NotFound | ProductsServiceError::SearchEmpty => {
            StatusError::not_found().brief(error.to_string())
        }
        ProductsServiceError::Storage(source) => {
            error!("product storage failed: {source}");

            StatusError::internal_server_error()
        }
    }
}
