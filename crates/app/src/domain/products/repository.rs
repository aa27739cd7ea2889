//! Products Repository

use async_trait::async_trait;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use mockall::automock;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query_as, query_scalar};

use crate::domain::products::{
    data::{NewProduct, ProductUpdate},
    errors::ProductsRepositoryError,
    query::{ProductFilter, contains_pattern},
    records::{CategoryCount, ProductRecord, ProductUuid},
};

const LIST_PRODUCTS_SQL: &str = include_str!("sql/list_products.sql");
const COUNT_PRODUCTS_SQL: &str = include_str!("sql/count_products.sql");
const SEARCH_PRODUCTS_SQL: &str = include_str!("sql/search_products.sql");
const GET_PRODUCT_SQL: &str = include_str!("sql/get_product.sql");
const CREATE_PRODUCT_SQL: &str = include_str!("sql/create_product.sql");
const UPDATE_PRODUCT_SQL: &str = include_str!("sql/update_product.sql");
const DELETE_PRODUCT_SQL: &str = include_str!("sql/delete_product.sql");
const COUNT_BY_CATEGORY_SQL: &str = include_str!("sql/count_by_category.sql");

/// Document-store operations the catalog needs.
#[automock]
#[async_trait]
pub trait ProductsRepository: Send + Sync {
    /// Matching products in insertion order, after skipping `skip` and taking at most `limit`.
    async fn find_products(
        &self,
        filter: &ProductFilter,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<ProductRecord>, ProductsRepositoryError>;

    /// Number of products matching the filter.
    async fn count_products(&self, filter: &ProductFilter) -> Result<u64, ProductsRepositoryError>;

    /// Products whose name contains `name`, ignoring case.
    async fn search_products(&self, name: &str)
    -> Result<Vec<ProductRecord>, ProductsRepositoryError>;

    async fn find_product(
        &self,
        product: ProductUuid,
    ) -> Result<Option<ProductRecord>, ProductsRepositoryError>;

    async fn insert_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsRepositoryError>;

    /// Returns `None` when no product has the given UUID.
    async fn update_product(
        &self,
        product: ProductUuid,
        update: ProductUpdate,
    ) -> Result<Option<ProductRecord>, ProductsRepositoryError>;

    /// Returns the removed product, or `None` when no product has the given UUID.
    async fn delete_product(
        &self,
        product: ProductUuid,
    ) -> Result<Option<ProductRecord>, ProductsRepositoryError>;

    /// Product counts grouped by exact category value.
    async fn count_by_category(&self) -> Result<Vec<CategoryCount>, ProductsRepositoryError>;
}

#[derive(Debug, Clone)]
pub struct PgProductsRepository {
    pool: PgPool,
}

impl PgProductsRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductsRepository for PgProductsRepository {
    async fn find_products(
        &self,
        filter: &ProductFilter,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<ProductRecord>, ProductsRepositoryError> {
        let products = query_as::<Postgres, ProductRecord>(LIST_PRODUCTS_SQL)
            .bind(filter.category().map(contains_pattern))
            .bind(clamp_to_i64(skip))
            .bind(clamp_to_i64(limit))
            .fetch_all(&self.pool)
            .await?;

        Ok(products)
    }

    async fn count_products(&self, filter: &ProductFilter) -> Result<u64, ProductsRepositoryError> {
        let count = query_scalar::<Postgres, i64>(COUNT_PRODUCTS_SQL)
            .bind(filter.category().map(contains_pattern))
            .fetch_one(&self.pool)
            .await?;

        to_u64("count", count)
    }

    async fn search_products(
        &self,
        name: &str,
    ) -> Result<Vec<ProductRecord>, ProductsRepositoryError> {
        let products = query_as::<Postgres, ProductRecord>(SEARCH_PRODUCTS_SQL)
            .bind(contains_pattern(name))
            .fetch_all(&self.pool)
            .await?;

        Ok(products)
    }

    async fn find_product(
        &self,
        product: ProductUuid,
    ) -> Result<Option<ProductRecord>, ProductsRepositoryError> {
        let product = query_as::<Postgres, ProductRecord>(GET_PRODUCT_SQL)
            .bind(product.into_uuid())
            .fetch_optional(&self.pool)
            .await?;

        Ok(product)
    }

    async fn insert_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsRepositoryError> {
        let created = query_as::<Postgres, ProductRecord>(CREATE_PRODUCT_SQL)
            .bind(product.uuid.into_uuid())
            .bind(product.name)
            .bind(product.description)
            .bind(product.price)
            .bind(product.category)
            .bind(product.in_stock)
            .fetch_one(&self.pool)
            .await?;

        Ok(created)
    }

    async fn update_product(
        &self,
        product: ProductUuid,
        update: ProductUpdate,
    ) -> Result<Option<ProductRecord>, ProductsRepositoryError> {
        let updated = query_as::<Postgres, ProductRecord>(UPDATE_PRODUCT_SQL)
            .bind(product.into_uuid())
            .bind(update.name)
            .bind(update.description)
            .bind(update.price)
            .bind(update.category)
            .bind(update.in_stock)
            .fetch_optional(&self.pool)
            .await?;

        Ok(updated)
    }

    async fn delete_product(
        &self,
        product: ProductUuid,
    ) -> Result<Option<ProductRecord>, ProductsRepositoryError> {
        let deleted = query_as::<Postgres, ProductRecord>(DELETE_PRODUCT_SQL)
            .bind(product.into_uuid())
            .fetch_optional(&self.pool)
            .await?;

        Ok(deleted)
    }

    async fn count_by_category(&self) -> Result<Vec<CategoryCount>, ProductsRepositoryError> {
        let rows = query_as::<Postgres, (String, i64)>(COUNT_BY_CATEGORY_SQL)
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter()
            .map(|(category, count)| {
                Ok(CategoryCount {
                    category,
                    count: to_u64("count", count)?,
                })
            })
            .collect()
    }
}

impl<'r> FromRow<'r, PgRow> for ProductRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: ProductUuid::from_uuid(row.try_get("uuid")?),
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            price: row.try_get("price")?,
            category: row.try_get("category")?,
            in_stock: row.try_get("in_stock")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}

/// Offsets and limits past `i64::MAX` select the same rows as `i64::MAX`.
fn clamp_to_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

fn to_u64(name: &str, value: i64) -> Result<u64, ProductsRepositoryError> {
    u64::try_from(value)
        .map_err(|error| ProductsRepositoryError::InvalidRecord(format!("{name}: {error}")))
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        domain::products::{data::ProductUpdate, query::ProductFilter},
        test::{TestDb, sample_new_product},
    };

    use super::*;

    async fn repository() -> (TestDb, PgProductsRepository) {
        let db = TestDb::new().await;
        let repository = PgProductsRepository::new(db.pool().clone());

        (db, repository)
    }

    #[tokio::test]
    #[ignore = "requires a container runtime"]
    async fn insert_then_find_returns_stored_product() -> TestResult {
        let (_db, repository) = repository().await;
        let new = sample_new_product("Laptop", "electronics");

        let created = repository.insert_product(new.clone()).await?;
        let found = repository.find_product(new.uuid).await?;

        assert_eq!(created.uuid, new.uuid);
        assert_eq!(created.name, "Laptop");
        assert_eq!(found, Some(created));

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires a container runtime"]
    async fn category_filter_is_case_insensitive_and_literal() -> TestResult {
        let (_db, repository) = repository().await;

        repository
            .insert_product(sample_new_product("Laptop", "Electronics"))
            .await?;
        repository
            .insert_product(sample_new_product("Kettle", "kitchen_ware"))
            .await?;
        repository
            .insert_product(sample_new_product("Pan", "kitchenXware"))
            .await?;

        let electronics = ProductFilter::by_category(Some("electronics".to_string()));
        let underscore = ProductFilter::by_category(Some("kitchen_".to_string()));

        assert_eq!(repository.count_products(&electronics).await?, 1);
        assert_eq!(repository.count_products(&underscore).await?, 1);

        let page = repository.find_products(&underscore, 0, 10).await?;

        assert_eq!(page.len(), 1);
        assert_eq!(page.first().map(|p| p.name.as_str()), Some("Kettle"));

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires a container runtime"]
    async fn find_products_pages_in_insertion_order() -> TestResult {
        let (_db, repository) = repository().await;

        for name in ["A", "B", "C"] {
            repository
                .insert_product(sample_new_product(name, "letters"))
                .await?;
        }

        let page = repository
            .find_products(&ProductFilter::default(), 1, 1)
            .await?;

        assert_eq!(page.len(), 1);
        assert_eq!(page.first().map(|p| p.name.as_str()), Some("B"));

        Ok(())
    }

    #[test]
    fn oversized_paging_values_clamp_to_i64_max() {
        assert_eq!(clamp_to_i64(0), 0);
        assert_eq!(clamp_to_i64(10), 10);
        assert_eq!(clamp_to_i64(u64::MAX), i64::MAX);
        assert_eq!(clamp_to_i64(1 << 63), i64::MAX);
    }

    #[tokio::test]
    #[ignore = "requires a container runtime"]
    async fn huge_skip_returns_empty_page() -> TestResult {
        let (_db, repository) = repository().await;

        repository
            .insert_product(sample_new_product("Laptop", "electronics"))
            .await?;

        let page = repository
            .find_products(&ProductFilter::default(), u64::MAX, 10)
            .await?;

        assert!(page.is_empty());

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires a container runtime"]
    async fn update_keeps_in_stock_when_omitted() -> TestResult {
        let (_db, repository) = repository().await;
        let mut new = sample_new_product("Laptop", "electronics");

        new.in_stock = false;

        repository.insert_product(new.clone()).await?;

        let updated = repository
            .update_product(
                new.uuid,
                ProductUpdate {
                    name: "Laptop Pro".to_string(),
                    description: new.description.clone(),
                    price: 1500.0,
                    category: new.category.clone(),
                    in_stock: None,
                },
            )
            .await?;

        let updated = updated.ok_or("updated product should exist")?;

        assert_eq!(updated.name, "Laptop Pro");
        assert!(!updated.in_stock);
        assert!(updated.updated_at >= updated.created_at);

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires a container runtime"]
    async fn delete_returns_removed_product_once() -> TestResult {
        let (_db, repository) = repository().await;
        let new = sample_new_product("Laptop", "electronics");

        repository.insert_product(new.clone()).await?;

        assert!(repository.delete_product(new.uuid).await?.is_some());
        assert!(repository.delete_product(new.uuid).await?.is_none());

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires a container runtime"]
    async fn negative_price_violates_check_constraint() -> TestResult {
        let (_db, repository) = repository().await;
        let mut new = sample_new_product("Broken", "misc");

        new.price = -1.0;

        let result = repository.insert_product(new).await;

        assert!(
            matches!(result, Err(ProductsRepositoryError::Sql(_))),
            "expected a storage error, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires a container runtime"]
    async fn count_by_category_groups_exact_values() -> TestResult {
        let (_db, repository) = repository().await;

        for (name, category) in [
            ("Laptop", "electronics"),
            ("Smartphone", "electronics"),
            ("Coffee Maker", "kitchen"),
        ] {
            repository
                .insert_product(sample_new_product(name, category))
                .await?;
        }

        let counts = repository.count_by_category().await?;

        assert_eq!(
            counts,
            vec![
                CategoryCount {
                    category: "electronics".to_string(),
                    count: 2
                },
                CategoryCount {
                    category: "kitchen".to_string(),
                    count: 1
                },
            ]
        );

        Ok(())
    }
}
