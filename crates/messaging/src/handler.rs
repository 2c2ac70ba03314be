use std::sync::Arc;

use async_trait::async_trait;
use events::{Event, EventHandler, HandlerError};

use crate::kafka::KafkaClient;

/// Forwards order-created events to a Kafka topic.
///
/// Registered for `"OrderCreated"` at bootstrap. A publish failure
/// surfaces as the dispatch error of the triggering use case; the order
/// itself is already durable at that point.
pub struct OrderCreatedHandler {
    client: Arc<KafkaClient>,
    topic: String,
}

impl OrderCreatedHandler {
    /// Creates a handler publishing to the given topic.
    pub fn new(client: Arc<KafkaClient>, topic: impl Into<String>) -> Self {
        Self {
            client,
            topic: topic.into(),
        }
    }
}

#[async_trait]
impl EventHandler for OrderCreatedHandler {
    async fn handle(&self, event: &dyn Event) -> Result<(), HandlerError> {
        let payload = event.payload()?;

        self.client
            .publish(&self.topic, event.name(), &payload.to_string())
            .await?;

        Ok(())
    }
}
