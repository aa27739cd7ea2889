//! Product catalog domain, persistence and access control.

pub mod auth;
pub mod context;
pub mod database;
pub mod domain;

#[cfg(test)]
mod test;

mod uuids;

pub use domain::products;
pub use uuids::TypedUuid;
