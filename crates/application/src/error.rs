use common::OrderId;
use domain::OrderError;
use events::DispatchError;
use order_store::StoreError;
use thiserror::Error;

/// Errors surfaced by the use-case layer.
///
/// Repository and dispatcher failures pass through untouched beyond being
/// tagged with their kind; nothing is swallowed or retried here.
#[derive(Debug, Error)]
pub enum UseCaseError {
    /// Caller-supplied input violates the entity invariants. Nothing was
    /// persisted.
    #[error(transparent)]
    Validation(#[from] OrderError),

    /// The repository rejected the operation. For a create, the event was
    /// not dispatched.
    #[error(transparent)]
    Storage(#[from] StoreError),

    /// The order was persisted but a post-save handler failed. Callers
    /// must not re-submit creation; only the notification needs retry or
    /// compensation.
    #[error("order {order_id} was created but its notification failed: {source}")]
    Notification {
        order_id: OrderId,
        #[source]
        source: DispatchError,
    },
}
