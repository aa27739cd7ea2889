//! Products service.

use std::{fmt, sync::Arc};

use async_trait::async_trait;
use mockall::automock;
use tracing::{debug, info};

use crate::domain::products::{
    data::ProductPayload,
    errors::ProductsServiceError,
    query::{Pagination, ProductFilter},
    records::{ProductPage, ProductRecord, ProductStats, ProductUuid},
    repository::ProductsRepository,
    sample::sample_products,
};

/// Catalog operations over any [`ProductsRepository`].
#[derive(Clone)]
pub struct CatalogService {
    repository: Arc<dyn ProductsRepository>,
}

impl fmt::Debug for CatalogService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogService").finish_non_exhaustive()
    }
}

impl CatalogService {
    #[must_use]
    pub fn new(repository: Arc<dyn ProductsRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl ProductsService for CatalogService {
    async fn list_products(
        &self,
        filter: ProductFilter,
        pagination: Pagination,
    ) -> Result<ProductPage, ProductsServiceError> {
        let results = self
            .repository
            .find_products(&filter, pagination.skip(), pagination.limit())
            .await?;

        let total = self.repository.count_products(&filter).await?;

        Ok(ProductPage {
            total,
            page: pagination.page(),
            total_pages: pagination.total_pages(total),
            results,
        })
    }

    async fn product_stats(&self) -> Result<ProductStats, ProductsServiceError> {
        let total_products = self
            .repository
            .count_products(&ProductFilter::default())
            .await?;

        let count_by_category = self.repository.count_by_category().await?;

        Ok(ProductStats {
            total_products,
            count_by_category,
        })
    }

    async fn search_products(&self, name: String) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        let name = name.trim();

        if name.is_empty() {
            return Err(ProductsServiceError::MissingSearchTerm);
        }

        let products = self.repository.search_products(name).await?;

        if products.is_empty() {
            return Err(ProductsServiceError::SearchEmpty);
        }

        Ok(products)
    }

    async fn get_product(&self, product: ProductUuid) -> Result<ProductRecord, ProductsServiceError> {
        self.repository
            .find_product(product)
            .await?
            .ok_or(ProductsServiceError::NotFound)
    }

    async fn create_product(
        &self,
        payload: ProductPayload,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let draft = payload.validate()?;

        let created = self
            .repository
            .insert_product(draft.into_new_product(ProductUuid::new()))
            .await?;

        debug!(product_uuid = %created.uuid, "inserted product");

        Ok(created)
    }

    async fn update_product(
        &self,
        product: ProductUuid,
        payload: ProductPayload,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let draft = payload.validate()?;

        self.repository
            .update_product(product, draft.into())
            .await?
            .ok_or(ProductsServiceError::NotFound)
    }

    async fn delete_product(
        &self,
        product: ProductUuid,
    ) -> Result<ProductRecord, ProductsServiceError> {
        self.repository
            .delete_product(product)
            .await?
            .ok_or(ProductsServiceError::NotFound)
    }

    async fn seed_if_empty(&self) -> Result<u64, ProductsServiceError> {
        let existing = self
            .repository
            .count_products(&ProductFilter::default())
            .await?;

        if existing > 0 {
            info!(existing, "catalog not empty, skipping sample data");

            return Ok(0);
        }

        let mut inserted = 0;

        for draft in sample_products() {
            self.repository
                .insert_product(draft.into_new_product(ProductUuid::new()))
                .await?;

            inserted += 1;
        }

        info!(inserted, "seeded sample products");

        Ok(inserted)
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Returns one page of products matching the filter, with totals for the whole match.
    async fn list_products(
        &self,
        filter: ProductFilter,
        pagination: Pagination,
    ) -> Result<ProductPage, ProductsServiceError>;

    /// Total product count and per-category counts.
    async fn product_stats(&self) -> Result<ProductStats, ProductsServiceError>;

    /// Products whose name contains `name`, ignoring case.
    ///
    /// An empty result is reported as [`ProductsServiceError::SearchEmpty`].
    async fn search_products(&self, name: String)
    -> Result<Vec<ProductRecord>, ProductsServiceError>;

    /// Retrieve a single product.
    async fn get_product(&self, product: ProductUuid) -> Result<ProductRecord, ProductsServiceError>;

    /// Validates the payload and stores it as a new product.
    async fn create_product(
        &self,
        payload: ProductPayload,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Validates the payload and replaces the product's fields with it.
    async fn update_product(
        &self,
        product: ProductUuid,
        payload: ProductPayload,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Deletes a product, returning what was removed.
    async fn delete_product(
        &self,
        product: ProductUuid,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Inserts the sample catalog when the store is empty. Returns how many were inserted.
    async fn seed_if_empty(&self) -> Result<u64, ProductsServiceError>;
}
