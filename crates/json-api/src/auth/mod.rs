//! API key authentication

pub(crate) mod middleware;
