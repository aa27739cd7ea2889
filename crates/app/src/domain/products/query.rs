//! Product query parameters.

use crate::domain::products::errors::ProductsServiceError;

/// Page used when the caller does not ask for one.
pub const DEFAULT_PAGE: u64 = 1;

/// Page size used when the caller does not ask for one.
pub const DEFAULT_LIMIT: u64 = 10;

/// Validated page/limit pair. Both are at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: u64,
    limit: u64,
}

impl Pagination {
    /// Build pagination from optional query values, applying defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ProductsServiceError::InvalidPagination`] when `page` or `limit` is zero.
    pub fn new(page: Option<u64>, limit: Option<u64>) -> Result<Self, ProductsServiceError> {
        let page = page.unwrap_or(DEFAULT_PAGE);
        let limit = limit.unwrap_or(DEFAULT_LIMIT);

        if page == 0 || limit == 0 {
            return Err(ProductsServiceError::InvalidPagination);
        }

        Ok(Self { page, limit })
    }

    pub fn page(self) -> u64 {
        self.page
    }

    pub fn limit(self) -> u64 {
        self.limit
    }

    /// Number of matching records before this page.
    pub fn skip(self) -> u64 {
        (self.page - 1).saturating_mul(self.limit)
    }

    pub fn total_pages(self, total: u64) -> u64 {
        total.div_ceil(self.limit)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Listing filter. An empty category is the same as no category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    category: Option<String>,
}

impl ProductFilter {
    #[must_use]
    pub fn by_category(category: Option<String>) -> Self {
        Self {
            category: category.filter(|category| !category.is_empty()),
        }
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }
}

/// Build an `ILIKE` pattern matching `term` anywhere, with the term taken literally.
pub(crate) fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);

    pattern.push('%');

    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }

        pattern.push(ch);
    }

    pattern.push('%');

    pattern
}

/// Case-insensitive literal substring test.
pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
