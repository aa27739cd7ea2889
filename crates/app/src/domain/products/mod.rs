//! Products

pub mod data;
pub mod errors;
pub mod memory;
pub mod query;
pub mod records;
pub mod repository;
mod sample;
pub mod service;
pub mod validation;

pub use errors::{ProductsRepositoryError, ProductsServiceError};
pub use service::*;
