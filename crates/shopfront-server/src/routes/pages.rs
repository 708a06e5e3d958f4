//! The public catalog pages. Each handler is one query-service call followed
//! by one render call.

use axum::{
    extract::{Path, State},
    response::Html,
};
use shopfront_db::{catalog, distinct_text_values, ProductTextField};

use crate::views::{self, DetailView, ListingView, SupplierView};

use super::{map_db_error, AppState, PageError};

pub(super) async fn home(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    let products = catalog::list_free_shipping(&state.pool)
        .await
        .map_err(map_db_error)?;
    let categories = distinct_text_values(&state.pool, ProductTextField::Category)
        .await
        .map_err(map_db_error)?;

    Ok(Html(views::render_listing(&ListingView {
        heading: "Products",
        products: &products,
        categories: &categories,
    })))
}

/// The id arrives as free text; anything that is not an existing numeric id
/// renders the not-found page.
pub(super) async fn product_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, PageError> {
    let id: i64 = id.parse().map_err(|_| PageError::NotFound)?;
    let product = catalog::get_product(&state.pool, id)
        .await
        .map_err(map_db_error)?;

    Ok(Html(views::render_detail(&DetailView { product: &product })))
}

pub(super) async fn category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Html<String>, PageError> {
    let products = catalog::list_by_category(&state.pool, &category)
        .await
        .map_err(map_db_error)?;
    let categories = distinct_text_values(&state.pool, ProductTextField::Category)
        .await
        .map_err(map_db_error)?;

    Ok(Html(views::render_listing(&ListingView {
        heading: &category,
        products: &products,
        categories: &categories,
    })))
}

pub(super) async fn suppliers(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    let groups = catalog::list_by_supplier(&state.pool)
        .await
        .map_err(map_db_error)?;

    Ok(Html(views::render_grouped(&SupplierView { groups: &groups })))
}

pub(super) async fn cart() -> Html<String> {
    Html(views::render_cart())
}
