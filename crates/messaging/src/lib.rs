//! Message-queue integration for the order system.
//!
//! Provides [`KafkaClient`], a thin producer wrapper, and
//! [`OrderCreatedHandler`], the event handler that forwards order-created
//! payloads to a Kafka topic. Delivery is best effort: the authoritative
//! state change has already been persisted by the time a handler runs.

pub mod error;
pub mod handler;
pub mod kafka;

pub use error::MessagingError;
pub use handler::OrderCreatedHandler;
pub use kafka::KafkaClient;
