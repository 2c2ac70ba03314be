//! Order domain events.

use chrono::{DateTime, Utc};
use events::Event;

use super::Order;

/// Routing key for the order-created event.
pub const ORDER_CREATED: &str = "OrderCreated";

/// Dispatched after an order has been successfully persisted.
///
/// Carries the created order as payload; handlers forward it to
/// out-of-process consumers on a best-effort basis.
#[derive(Debug, Clone)]
pub struct OrderCreated {
    order: Order,
    occurred_at: DateTime<Utc>,
}

impl OrderCreated {
    /// Wraps a freshly persisted order.
    pub fn new(order: Order) -> Self {
        Self {
            order,
            occurred_at: Utc::now(),
        }
    }
}

impl Event for OrderCreated {
    fn name(&self) -> &'static str {
        ORDER_CREATED
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    fn payload(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(&self.order)
    }
}
