//! Order creation and listing endpoints.

use std::sync::Arc;

use application::{CreateOrderInput, CreateOrderUseCase, ListOrdersUseCase, OrderOutput};
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::error::ApiError;

/// Shared application state accessible from all handlers.
pub struct AppState {
    pub create_order: CreateOrderUseCase,
    pub list_orders: ListOrdersUseCase,
}

/// POST /order — create a new order from caller-supplied amounts.
#[tracing::instrument(skip(state, input))]
pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(input): Json<CreateOrderInput>,
) -> Result<(StatusCode, Json<OrderOutput>), ApiError> {
    let output = state.create_order.execute(input).await?;

    Ok((StatusCode::CREATED, Json(output)))
}

/// GET /orders — list all persisted orders.
#[tracing::instrument(skip(state))]
pub async fn list(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<OrderOutput>>, ApiError> {
    let orders = state.list_orders.execute().await?;

    Ok(Json(orders))
}
