//! HTTP transport layer: route dispatch and JSON encoding only.
//!
//! All semantics live in the services; handlers unwrap the request,
//! call one service method, and map the result (or `AppError`) onto
//! a response.

use crate::error::AppError;
use crate::models::NewObservation;
use crate::services::{FrequentProduct, HistoryEntry, ProductCatalog, ProductComparison};
use crate::AppState;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::error;

#[derive(Debug, Serialize)]
pub struct AddProductResponse {
    pub message: &'static str,
    pub id: i64,
}

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct FrequencyQuery {
    pub limit: Option<i64>,
}

/// Build the application router
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/add_product", post(add_product))
        .route("/compare/:product_name", get(compare_product))
        .route("/price_history/:product_name", get(price_history))
        .route("/get_all_products", get(get_all_products))
        .route("/get_frequent_products", get(get_frequent_products))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// POST /add_product - Record a new price observation
async fn add_product(
    State(state): State<Arc<AppState>>,
    Json(new): Json<NewObservation>,
) -> Result<(StatusCode, Json<AddProductResponse>), AppError> {
    let observation = state.product_service.add_observation(new).await?;
    Ok((
        StatusCode::CREATED,
        Json(AddProductResponse {
            message: "Product added successfully",
            id: observation.id,
        }),
    ))
}

/// GET /compare/:product_name - Best price and trend for a product
async fn compare_product(
    State(state): State<Arc<AppState>>,
    Path(product_name): Path<String>,
) -> Result<Json<ProductComparison>, AppError> {
    let comparison = state.product_service.compare(&product_name).await?;
    Ok(Json(comparison))
}

/// GET /price_history/:product_name - Windowed price history
async fn price_history(
    State(state): State<Arc<AppState>>,
    Path(product_name): Path<String>,
    Query(range): Query<HistoryQuery>,
) -> Result<Json<Vec<HistoryEntry>>, AppError> {
    let history = state
        .history_service
        .history(
            &product_name,
            range.start_date.as_deref(),
            range.end_date.as_deref(),
        )
        .await?;
    Ok(Json(history))
}

/// GET /get_all_products - Product x date x place catalog grid
async fn get_all_products(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ProductCatalog>, AppError> {
    let catalog = state.catalog_service.catalog().await?;
    Ok(Json(catalog))
}

/// GET /get_frequent_products - Most frequently recorded products
async fn get_frequent_products(
    State(state): State<Arc<AppState>>,
    Query(query): Query<FrequencyQuery>,
) -> Result<Json<Vec<FrequentProduct>>, AppError> {
    let products = state.frequency_service.top_frequent(query.limit).await?;
    Ok(Json(products))
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if status.is_server_error() {
            error!("request failed: {}", self);
        }
        (status, Json(json!({ "message": self.to_string() }))).into_response()
    }
}
