//! PostgreSQL implementation of ProductRepository.
//!
//! Prices are stored as `price_cents BIGINT`. Title search uses
//! `strpos(lower(..))` rather than `ILIKE` so user input never acts as a
//! pattern.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Postgres, Row};

use crate::domain::catalog::{NewProduct, Price, Product};
use crate::domain::foundation::{DomainError, Page, PageRequest, ProductId};
use crate::ports::ProductRepository;

const PRODUCT_COLUMNS: &str = "id, title, platform, price_cents, discount, image_url, \
                               description, release_date, publisher, stock, tags";

/// Optional WHERE clause with its single text parameter.
struct Filter<'a> {
    clause: &'static str,
    param: Option<&'a str>,
}

impl<'a> Filter<'a> {
    fn all() -> Self {
        Self {
            clause: "",
            param: None,
        }
    }

    fn title_contains(query: &'a str) -> Self {
        Self {
            clause: "WHERE strpos(lower(title), lower($1)) > 0",
            param: Some(query),
        }
    }

    fn platform_is(platform: &'a str) -> Self {
        Self {
            clause: "WHERE lower(platform) = lower($1)",
            param: Some(platform),
        }
    }
}

#[derive(Clone)]
pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn page(
        &self,
        filter: Filter<'_>,
        request: PageRequest,
    ) -> Result<Page<Product>, DomainError> {
        let (limit_idx, offset_idx) = if filter.param.is_some() { (2, 3) } else { (1, 2) };

        let count_sql = format!("SELECT COUNT(*) FROM products {}", filter.clause);
        let mut count_query = sqlx::query_as::<Postgres, (i64,)>(&count_sql);
        if let Some(param) = filter.param {
            count_query = count_query.bind(param);
        }
        let (total,) = count_query
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to count products", e))?;

        let select_sql = format!(
            "SELECT {} FROM products {} ORDER BY id LIMIT ${} OFFSET ${}",
            PRODUCT_COLUMNS, filter.clause, limit_idx, offset_idx
        );
        let mut select_query = sqlx::query(&select_sql);
        if let Some(param) = filter.param {
            select_query = select_query.bind(param);
        }
        let rows = select_query
            .bind(request.size() as i64)
            .bind(request.offset() as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to fetch products", e))?;

        let content = rows
            .into_iter()
            .map(row_to_product)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page::new(content, request, total.max(0) as u64))
    }
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn find_page(&self, request: PageRequest) -> Result<Page<Product>, DomainError> {
        self.page(Filter::all(), request).await
    }

    async fn search_by_title(
        &self,
        query: &str,
        request: PageRequest,
    ) -> Result<Page<Product>, DomainError> {
        self.page(Filter::title_contains(query), request).await
    }

    async fn find_by_platform(
        &self,
        platform: &str,
        request: PageRequest,
    ) -> Result<Page<Product>, DomainError> {
        self.page(Filter::platform_is(platform), request).await
    }

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, DomainError> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM products WHERE id = $1",
            PRODUCT_COLUMNS
        ))
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch product", e))?;

        row.map(row_to_product).transpose()
    }

    async fn count(&self) -> Result<u64, DomainError> {
        let (total,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to count products", e))?;

        Ok(total.max(0) as u64)
    }

    async fn insert_all(&self, products: Vec<NewProduct>) -> Result<Vec<Product>, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::database("Failed to start transaction", e))?;

        let insert_sql = format!(
            r#"
            INSERT INTO products (
                title, platform, price_cents, discount, image_url,
                description, release_date, publisher, stock, tags
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {}
            "#,
            PRODUCT_COLUMNS
        );

        let mut inserted = Vec::with_capacity(products.len());
        for product in products {
            let row = sqlx::query(&insert_sql)
                .bind(&product.title)
                .bind(&product.platform)
                .bind(product.price.map(|p| p.cents()))
                .bind(product.discount)
                .bind(&product.image_url)
                .bind(&product.description)
                .bind(product.release_date)
                .bind(&product.publisher)
                .bind(product.stock)
                .bind(&product.tags)
                .fetch_one(&mut *tx)
                .await
                .map_err(|e| DomainError::database("Failed to insert product", e))?;
            inserted.push(row_to_product(row)?);
        }

        tx.commit()
            .await
            .map_err(|e| DomainError::database("Failed to commit products", e))?;

        Ok(inserted)
    }
}

fn row_to_product(row: PgRow) -> Result<Product, DomainError> {
    let column = |e: sqlx::Error| DomainError::database("Failed to read product row", e);

    let price = row
        .try_get::<Option<i64>, _>("price_cents")
        .map_err(column)?
        .map(Price::from_cents)
        .transpose()
        .map_err(DomainError::from)?;

    Ok(Product {
        id: ProductId::new(row.try_get("id").map_err(column)?),
        title: row.try_get("title").map_err(column)?,
        platform: row.try_get("platform").map_err(column)?,
        price,
        discount: row.try_get("discount").map_err(column)?,
        image_url: row.try_get("image_url").map_err(column)?,
        description: row.try_get("description").map_err(column)?,
        release_date: row
            .try_get::<Option<NaiveDate>, _>("release_date")
            .map_err(column)?,
        publisher: row.try_get("publisher").map_err(column)?,
        stock: row.try_get("stock").map_err(column)?,
        tags: row.try_get("tags").map_err(column)?,
    })
}
