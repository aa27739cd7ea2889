//! Products service errors.

use sqlx::Error;
use thiserror::Error;

use crate::domain::products::validation::ProductValidationError;

#[derive(Debug, Error)]
pub enum ProductsRepositoryError {
    #[error("storage error")]
    Sql(#[from] Error),

    #[error("invalid stored record: {0}")]
    InvalidRecord(String),
}

#[derive(Debug, Error)]
pub enum ProductsServiceError {
    #[error(transparent)]
    Validation(#[from] ProductValidationError),

    #[error("page and limit must be positive integers")]
    InvalidPagination,

    #[error("Please provide a search term using ?name=")]
    MissingSearchTerm,

    #[error("Product not found")]
    NotFound,

    #[error("No products found matching your search")]
    SearchEmpty,

    #[error("storage error")]
    Storage(#[from] ProductsRepositoryError),
}
