//! Admin intake: the sole write path into the catalog.

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use shopfront_core::{NewProduct, ProductForm};
use shopfront_db::insert_product;

use crate::views::{self, AdminFormView};

use super::{map_db_error, AppState, PageError};

pub(super) async fn show_form() -> Html<String> {
    Html(views::render_admin_form(&AdminFormView { error: None }))
}

/// Coerce the submission, force free shipping, insert, and bounce back to
/// the listing. A coercion failure redisplays the form with the error; the
/// submission itself is never partially applied.
pub(super) async fn submit_form(
    State(state): State<AppState>,
    Form(form): Form<ProductForm>,
) -> Result<Response, PageError> {
    match NewProduct::from_form(form) {
        Ok(draft) => {
            let row = insert_product(&state.pool, &draft)
                .await
                .map_err(map_db_error)?;
            tracing::info!(id = row.id, name = %row.name, "product created");
            Ok(Redirect::to("/").into_response())
        }
        Err(error) => {
            tracing::warn!(error = %error, "rejected product submission");
            let body = views::render_admin_form(&AdminFormView {
                error: Some(&error.to_string()),
            });
            Ok((StatusCode::BAD_REQUEST, Html(body)).into_response())
        }
    }
}
