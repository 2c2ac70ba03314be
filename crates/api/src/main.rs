//! API server entry point.
//!
//! Wires the repository, dispatcher, and handlers, then serves HTTP.
//! All wiring is complete before the first request is accepted.

use std::sync::Arc;

use api::config::Config;
use domain::ORDER_CREATED;
use events::EventDispatcher;
use messaging::{KafkaClient, OrderCreatedHandler};
use order_store::{InMemoryOrderRepository, OrderRepository, PostgresOrderRepository};
use tokio::signal;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Waits for a shutdown signal (SIGINT or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install SIGINT handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("received SIGINT, starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("received SIGTERM, starting graceful shutdown");
        }
    }
}

async fn build_repository(config: &Config) -> Arc<dyn OrderRepository> {
    match &config.database_url {
        Some(url) => {
            let pool = sqlx::PgPool::connect(url)
                .await
                .expect("failed to connect to database");
            let store = PostgresOrderRepository::new(pool);
            store
                .run_migrations()
                .await
                .expect("failed to run migrations");
            tracing::info!("using PostgreSQL order store");
            Arc::new(store)
        }
        None => {
            tracing::info!("DATABASE_URL not set, using in-memory order store");
            Arc::new(InMemoryOrderRepository::new())
        }
    }
}

async fn build_dispatcher(config: &Config) -> Arc<EventDispatcher> {
    let dispatcher = Arc::new(EventDispatcher::new());

    if let Some(brokers) = &config.kafka_brokers {
        let client = Arc::new(KafkaClient::new(brokers).expect("failed to create Kafka producer"));
        let handler = Arc::new(OrderCreatedHandler::new(client, config.kafka_topic.clone()));
        dispatcher
            .register(ORDER_CREATED, handler)
            .await
            .expect("failed to register OrderCreated handler");
        tracing::info!(topic = %config.kafka_topic, "order-created events will be published to Kafka");
    } else {
        tracing::info!("KAFKA_BROKERS not set, order-created events stay in-process");
    }

    dispatcher
}

#[tokio::main]
async fn main() {
    let config = Config::from_env();

    // 1. Initialize tracing
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone())),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 2. Install Prometheus metrics recorder
    let prometheus_builder = metrics_exporter_prometheus::PrometheusBuilder::new();
    let metrics_handle = prometheus_builder
        .install_recorder()
        .expect("failed to install Prometheus recorder");

    // 3. Wire the store, the dispatcher, and its handlers
    let repository = build_repository(&config).await;
    let dispatcher = build_dispatcher(&config).await;
    let state = api::create_state(repository, dispatcher);

    // 4. Build the application
    let app = api::create_app(state, metrics_handle);

    // 5. Start server
    let addr = config.addr();
    tracing::info!(%addr, "starting API server");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind address");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server error");

    tracing::info!("server shut down gracefully");
}
