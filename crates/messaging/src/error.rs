use thiserror::Error;

/// Errors that can occur when publishing to the message queue.
#[derive(Debug, Error)]
pub enum MessagingError {
    /// Producer creation or delivery failed.
    #[error("kafka error: {0}")]
    Kafka(#[from] rdkafka::error::KafkaError),

    /// The event payload could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
