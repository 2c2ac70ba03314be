//! HTTP adapter for the order system.
//!
//! This crate is a transport: it decodes requests into use-case inputs,
//! runs the use cases, and encodes results and errors back into HTTP. The
//! application core never depends on anything in here.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use application::{CreateOrderUseCase, ListOrdersUseCase};
use axum::Router;
use axum::routing::{get, post};
use events::EventDispatcher;
use metrics_exporter_prometheus::PrometheusHandle;
use order_store::OrderRepository;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use routes::orders::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app(state: Arc<AppState>, metrics_handle: PrometheusHandle) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health::check))
        .route("/order", post(routes::orders::create))
        .route("/orders", get(routes::orders::list))
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Builds the shared application state from an already-wired repository
/// and dispatcher.
///
/// Wiring (choice of store, handler registration) happens in `main` before
/// this is called; the state is static from then on.
pub fn create_state(
    repository: Arc<dyn OrderRepository>,
    dispatcher: Arc<EventDispatcher>,
) -> Arc<AppState> {
    Arc::new(AppState {
        create_order: CreateOrderUseCase::new(repository.clone(), dispatcher),
        list_orders: ListOrdersUseCase::new(repository),
    })
}
