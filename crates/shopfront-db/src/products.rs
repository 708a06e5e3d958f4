//! Catalog store operations for the `products` table.

use chrono::{DateTime, Utc};
use shopfront_core::NewProduct;
use sqlx::SqlitePool;

use crate::DbError;

/// Every column of a product row, selected by all read paths.
const PRODUCT_COLUMNS: &str = "id, name, description, price, image_url, category, stock, \
     supplier_url, shipping_cost, supplier_name, created_at";

// ---------------------------------------------------------------------------
// Row type
// ---------------------------------------------------------------------------

/// A row from the `products` table.
///
/// `category` and `supplier_name` are free-form grouping labels; there is no
/// referential integrity behind either.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProductRow {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image_url: Option<String>,
    pub category: Option<String>,
    pub stock: i64,
    pub supplier_url: Option<String>,
    pub shipping_cost: f64,
    pub supplier_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ProductRow {
    /// Whether this product qualifies for the public listing views.
    #[must_use]
    pub fn ships_free(&self) -> bool {
        self.shipping_cost == 0.0
    }
}

/// Exact-match filters combined as a conjunction. Absent fields do not
/// constrain the result.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProductFilters<'a> {
    pub shipping_cost: Option<f64>,
    pub category: Option<&'a str>,
    pub supplier_name: Option<&'a str>,
}

/// Text columns exposed to the `distinct` operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductTextField {
    Category,
    SupplierName,
}

impl ProductTextField {
    fn column(self) -> &'static str {
        match self {
            ProductTextField::Category => "category",
            ProductTextField::SupplierName => "supplier_name",
        }
    }
}

// ---------------------------------------------------------------------------
// Operations
// ---------------------------------------------------------------------------

/// Inserts a coerced product draft and returns the stored row.
///
/// The id is assigned by the database; `created_at` is stamped here, once,
/// and never updated afterwards.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the insert fails.
pub async fn insert_product(
    pool: &SqlitePool,
    product: &NewProduct,
) -> Result<ProductRow, DbError> {
    let row = sqlx::query_as::<_, ProductRow>(
        "INSERT INTO products \
             (name, description, price, image_url, category, stock, \
              supplier_url, shipping_cost, supplier_name, created_at) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
         RETURNING id, name, description, price, image_url, category, stock, \
                   supplier_url, shipping_cost, supplier_name, created_at",
    )
    .bind(&product.name)
    .bind(&product.description)
    .bind(product.price)
    .bind(&product.image_url)
    .bind(&product.category)
    .bind(product.stock)
    .bind(&product.supplier_url)
    .bind(product.shipping_cost)
    .bind(&product.supplier_name)
    .bind(Utc::now())
    .fetch_one(pool)
    .await?;

    Ok(row)
}

/// Returns the product with the given id.
///
/// # Errors
///
/// Returns [`DbError::NotFound`] if no such row exists, or
/// [`DbError::Sqlx`] if the query fails.
pub async fn get_product(pool: &SqlitePool, id: i64) -> Result<ProductRow, DbError> {
    let row = sqlx::query_as::<_, ProductRow>(&format!(
        "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    row.ok_or(DbError::NotFound)
}

/// Returns all rows matching the filter conjunction, newest first.
///
/// An empty result is `Ok(vec![])`, never an error.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn filter_products(
    pool: &SqlitePool,
    filters: ProductFilters<'_>,
) -> Result<Vec<ProductRow>, DbError> {
    let rows = sqlx::query_as::<_, ProductRow>(&format!(
        "SELECT {PRODUCT_COLUMNS} \
         FROM products \
         WHERE ($1 IS NULL OR shipping_cost = $1) \
           AND ($2 IS NULL OR category = $2) \
           AND ($3 IS NULL OR supplier_name = $3) \
         ORDER BY created_at DESC, id DESC"
    ))
    .bind(filters.shipping_cost)
    .bind(filters.category)
    .bind(filters.supplier_name)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Returns the distinct non-null values of a grouping column, ascending.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn distinct_text_values(
    pool: &SqlitePool,
    field: ProductTextField,
) -> Result<Vec<String>, DbError> {
    let column = field.column();
    let values = sqlx::query_scalar::<_, String>(&format!(
        "SELECT DISTINCT {column} FROM products \
         WHERE {column} IS NOT NULL \
         ORDER BY {column}"
    ))
    .fetch_all(pool)
    .await?;

    Ok(values)
}
