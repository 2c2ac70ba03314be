//! Event and handler contracts.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Error returned by an event handler.
///
/// Handlers come from arbitrary infrastructure (message brokers, mailers),
/// so the failure type is an opaque boxed error.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;

/// A domain event.
///
/// Events are transient values constructed just before dispatch; they are
/// never persisted by this crate. The `name` is the dispatch routing key.
pub trait Event: Send + Sync {
    /// Name identifying the event kind, e.g. `"OrderCreated"`.
    fn name(&self) -> &'static str;

    /// When the event occurred.
    fn occurred_at(&self) -> DateTime<Utc>;

    /// The associated domain value, serialized for handlers that forward
    /// it out of process.
    fn payload(&self) -> Result<serde_json::Value, serde_json::Error>;
}

/// Side-effect logic invoked when a matching event is dispatched.
///
/// Implementations must be safe to share across threads; the dispatcher
/// holds them behind `Arc` and may be called from concurrent tasks.
#[async_trait]
pub trait EventHandler: Send + Sync {
    /// Handles one dispatched event.
    async fn handle(&self, event: &dyn Event) -> Result<(), HandlerError>;
}
