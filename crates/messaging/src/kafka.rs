use std::time::Duration;

use rdkafka::{
    config::ClientConfig,
    producer::{FutureProducer, FutureRecord},
    util::Timeout,
};

use crate::error::MessagingError;

/// Thin wrapper around an rdkafka producer.
pub struct KafkaClient {
    producer: FutureProducer,
}

impl KafkaClient {
    /// Creates a producer connected to the given bootstrap brokers.
    pub fn new(brokers: &str) -> Result<Self, MessagingError> {
        let producer: FutureProducer = ClientConfig::new()
            .set("bootstrap.servers", brokers)
            .set("message.timeout.ms", "5000")
            .create()?;

        Ok(Self { producer })
    }

    /// Publishes one message, awaiting broker acknowledgement.
    pub async fn publish(&self, topic: &str, key: &str, payload: &str) -> Result<(), MessagingError> {
        let record = FutureRecord::to(topic).key(key).payload(payload);

        self.producer
            .send(record, Timeout::After(Duration::from_secs(5)))
            .await
            .map_err(|(e, _)| MessagingError::Kafka(e))?;

        tracing::info!(topic, key, "published message");
        Ok(())
    }
}
