//! The three fixed catalog views, expressed as store calls.
//!
//! Public listing views (home, category) exclude anything with a non-zero
//! shipping cost. The supplier view does not: it groups the full catalog by
//! supplier name. The asymmetry is inherited policy, kept on purpose.

use std::collections::BTreeMap;

use sqlx::SqlitePool;

use crate::products::{self, ProductFilters, ProductRow, ProductTextField};
use crate::DbError;

/// All free-shipping products, newest first.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn list_free_shipping(pool: &SqlitePool) -> Result<Vec<ProductRow>, DbError> {
    products::filter_products(
        pool,
        ProductFilters {
            shipping_cost: Some(0.0),
            ..ProductFilters::default()
        },
    )
    .await
}

/// Free-shipping products in a category.
///
/// The shipping restriction is applied on top of the category match, so this
/// is always a subset of [`list_free_shipping`].
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn list_by_category(
    pool: &SqlitePool,
    category: &str,
) -> Result<Vec<ProductRow>, DbError> {
    products::filter_products(
        pool,
        ProductFilters {
            shipping_cost: Some(0.0),
            category: Some(category),
            ..ProductFilters::default()
        },
    )
    .await
}

/// Every distinct supplier name mapped to that supplier's full product set,
/// including products that do not ship free.
///
/// One query per supplier, mirroring the per-value filter contract of the
/// store. A `BTreeMap` keeps the grouping deterministic for rendering.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if any query fails.
pub async fn list_by_supplier(
    pool: &SqlitePool,
) -> Result<BTreeMap<String, Vec<ProductRow>>, DbError> {
    let names = products::distinct_text_values(pool, ProductTextField::SupplierName).await?;

    let mut grouped = BTreeMap::new();
    for name in names {
        let rows = products::filter_products(
            pool,
            ProductFilters {
                supplier_name: Some(&name),
                ..ProductFilters::default()
            },
        )
        .await?;
        grouped.insert(name, rows);
    }

    Ok(grouped)
}

/// Single product lookup.
///
/// # Errors
///
/// Returns [`DbError::NotFound`] if the id does not exist, or
/// [`DbError::Sqlx`] if the query fails.
pub async fn get_product(pool: &SqlitePool, id: i64) -> Result<ProductRow, DbError> {
    products::get_product(pool, id).await
}
