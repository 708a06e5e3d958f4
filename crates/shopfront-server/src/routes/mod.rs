mod admin;
mod pages;

use axum::{
    extract::State,
    http::{header, Method, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use sqlx::SqlitePool;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::request_id;
use crate::views;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}

/// User-visible failures of the page routes.
#[derive(Debug)]
pub enum PageError {
    NotFound,
    Internal,
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        match self {
            PageError::NotFound => {
                (StatusCode::NOT_FOUND, Html(views::render_not_found())).into_response()
            }
            PageError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(views::render_error("The catalog is unavailable right now.")),
            )
                .into_response(),
        }
    }
}

/// Identifier misses surface as the not-found page; everything else is logged
/// and collapses to a generic 500 so query details never reach the client.
pub(super) fn map_db_error(error: shopfront_db::DbError) -> PageError {
    match error {
        shopfront_db::DbError::NotFound => PageError::NotFound,
        other => {
            tracing::error!(error = %other, "database query failed");
            PageError::Internal
        }
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
    database: &'static str,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct CartStatus {
    status: &'static str,
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::home))
        .route("/product/{id}", get(pages::product_detail))
        .route("/category/{category}", get(pages::category))
        .route("/suppliers", get(pages::suppliers))
        .route("/cart", get(pages::cart))
        .route("/api/add-to-cart", post(add_to_cart))
        .route("/api/health", get(health))
        .route(
            "/admin/add-product",
            get(admin::show_form).post(admin::submit_form),
        )
        .layer(
            ServiceBuilder::new()
                .layer(build_cors())
                .layer(TraceLayer::new_for_http())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

/// Cart stub. Takes no extractors so any payload is accepted, reports success,
/// and records nothing. Kept deliberately behavior-free; see DESIGN.md.
async fn add_to_cart() -> Json<CartStatus> {
    Json(CartStatus { status: "success" })
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    match shopfront_db::health_check(&state.pool).await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthData {
                status: "ok",
                database: "ok",
            }),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "health check: database unavailable");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthData {
                    status: "degraded",
                    database: "unavailable",
                }),
            )
        }
    }
}
