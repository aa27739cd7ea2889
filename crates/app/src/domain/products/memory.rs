//! In-memory products repository.

use async_trait::async_trait;
use jiff::Timestamp;
use rustc_hash::FxHashMap;
use tokio::sync::RwLock;

use crate::domain::products::{
    data::{NewProduct, ProductUpdate},
    errors::ProductsRepositoryError,
    query::{ProductFilter, contains_ignore_case},
    records::{CategoryCount, ProductRecord, ProductUuid},
    repository::ProductsRepository,
};

/// Keeps products in a vector so listings come back in insertion order.
#[derive(Debug, Default)]
pub struct MemoryProductsRepository {
    products: RwLock<Vec<ProductRecord>>,
}

impl MemoryProductsRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn matches_filter(product: &ProductRecord, filter: &ProductFilter) -> bool {
    filter
        .category()
        .is_none_or(|category| contains_ignore_case(&product.category, category))
}

#[async_trait]
impl ProductsRepository for MemoryProductsRepository {
    async fn find_products(
        &self,
        filter: &ProductFilter,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<ProductRecord>, ProductsRepositoryError> {
        let products = self.products.read().await;

        Ok(products
            .iter()
            .filter(|product| matches_filter(product, filter))
            .skip(usize::try_from(skip).unwrap_or(usize::MAX))
            .take(usize::try_from(limit).unwrap_or(usize::MAX))
            .cloned()
            .collect())
    }

    async fn count_products(&self, filter: &ProductFilter) -> Result<u64, ProductsRepositoryError> {
        let products = self.products.read().await;

        let count = products
            .iter()
            .filter(|product| matches_filter(product, filter))
            .count();

        Ok(u64::try_from(count).unwrap_or(u64::MAX))
    }

    async fn search_products(
        &self,
        name: &str,
    ) -> Result<Vec<ProductRecord>, ProductsRepositoryError> {
        let products = self.products.read().await;

        Ok(products
            .iter()
            .filter(|product| contains_ignore_case(&product.name, name))
            .cloned()
            .collect())
    }

    async fn find_product(
        &self,
        product: ProductUuid,
    ) -> Result<Option<ProductRecord>, ProductsRepositoryError> {
        let products = self.products.read().await;

        Ok(products.iter().find(|p| p.uuid == product).cloned())
    }

    async fn insert_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsRepositoryError> {
        let mut products = self.products.write().await;

        if products.iter().any(|p| p.uuid == product.uuid) {
            return Err(ProductsRepositoryError::InvalidRecord(format!(
                "duplicate product uuid {}",
                product.uuid
            )));
        }

        let now = Timestamp::now();

        let record = ProductRecord {
            uuid: product.uuid,
            name: product.name,
            description: product.description,
            price: product.price,
            category: product.category,
            in_stock: product.in_stock,
            created_at: now,
            updated_at: now,
        };

        products.push(record.clone());

        Ok(record)
    }

    async fn update_product(
        &self,
        product: ProductUuid,
        update: ProductUpdate,
    ) -> Result<Option<ProductRecord>, ProductsRepositoryError> {
        let mut products = self.products.write().await;

        let Some(record) = products.iter_mut().find(|p| p.uuid == product) else {
            return Ok(None);
        };

        record.name = update.name;
        record.description = update.description;
        record.price = update.price;
        record.category = update.category;

        if let Some(in_stock) = update.in_stock {
            record.in_stock = in_stock;
        }

        record.updated_at = Timestamp::now();

        Ok(Some(record.clone()))
    }

    async fn delete_product(
        &self,
        product: ProductUuid,
    ) -> Result<Option<ProductRecord>, ProductsRepositoryError> {
        let mut products = self.products.write().await;

        let Some(index) = products.iter().position(|p| p.uuid == product) else {
            return Ok(None);
        };

        Ok(Some(products.remove(index)))
    }

    async fn count_by_category(&self) -> Result<Vec<CategoryCount>, ProductsRepositoryError> {
        let products = self.products.read().await;

        let mut counts: FxHashMap<&str, u64> = FxHashMap::default();

        for product in products.iter() {
            *counts.entry(product.category.as_str()).or_default() += 1;
        }

        let mut counts: Vec<CategoryCount> = counts
            .into_iter()
            .map(|(category, count)| CategoryCount {
                category: category.to_string(),
                count,
            })
            .collect();

        counts.sort_unstable_by(|a, b| a.category.cmp(&b.category));

        Ok(counts)
    }
}
