//! Create-order use case.

use std::sync::Arc;

use common::OrderId;
use domain::{Order, OrderCreated};
use events::EventDispatcher;
use order_store::OrderRepository;
use serde::{Deserialize, Serialize};

use crate::error::UseCaseError;

/// Caller-supplied amounts for a new order.
///
/// The order ID is generated by the use case, never supplied by the
/// transport.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CreateOrderInput {
    pub price: f64,
    pub tax: f64,
}

/// Projection of an order returned to transport adapters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderOutput {
    pub id: OrderId,
    pub price: f64,
    pub tax: f64,
    pub final_price: f64,
}

impl From<&Order> for OrderOutput {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id(),
            price: order.price(),
            tax: order.tax(),
            final_price: order.final_price(),
        }
    }
}

/// Validates input, persists the order, then dispatches [`OrderCreated`].
pub struct CreateOrderUseCase {
    repository: Arc<dyn OrderRepository>,
    dispatcher: Arc<EventDispatcher>,
}

impl CreateOrderUseCase {
    /// Creates the use case with its injected collaborators.
    pub fn new(repository: Arc<dyn OrderRepository>, dispatcher: Arc<EventDispatcher>) -> Self {
        Self {
            repository,
            dispatcher,
        }
    }

    /// Creates an order.
    ///
    /// The event is dispatched only after a successful save; a dispatch
    /// failure is reported as [`UseCaseError::Notification`] carrying the
    /// ID of the already-persisted order.
    #[tracing::instrument(skip(self))]
    pub async fn execute(&self, input: CreateOrderInput) -> Result<OrderOutput, UseCaseError> {
        let order = Order::new(OrderId::new(), input.price, input.tax)?;

        self.repository.save(&order).await?;
        metrics::counter!("orders_created_total").increment(1);
        tracing::info!(order_id = %order.id(), final_price = order.final_price(), "order created");

        let event = OrderCreated::new(order.clone());
        self.dispatcher
            .dispatch(&event)
            .await
            .map_err(|source| UseCaseError::Notification {
                order_id: order.id(),
                source,
            })?;

        Ok(OrderOutput::from(&order))
    }
}
