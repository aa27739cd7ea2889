//! Unsigned count query parsing helpers.

use salvo::{oapi::extract::QueryParam, prelude::StatusError};

use crate::extensions::*;

pub(crate) trait CountParamExt {
    /// Parse an optional unsigned integer; an empty value counts as absent.
    fn into_count(self, name: &str) -> Result<Option<u64>, StatusError>;
}

impl CountParamExt for QueryParam<String, false> {
    fn into_count(self, name: &str) -> Result<Option<u64>, StatusError> {
        self.into_inner()
            .filter(|value| !value.trim().is_empty())
            .map(|value| value.trim().parse::<u64>())
            .transpose()
            .or_400(&format!("{name} must be a positive integer"))
    }
}
