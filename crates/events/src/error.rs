use thiserror::Error;

use crate::event::HandlerError;

/// Errors that can occur when registering handlers or dispatching events.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The same handler reference is already registered for this event name.
    #[error("handler already registered for event \"{0}\"")]
    AlreadyRegistered(String),

    /// A handler failed while the event was being dispatched.
    ///
    /// Handlers run after the triggering state change has been persisted,
    /// so this error means the change itself succeeded.
    #[error("handler for event \"{event_name}\" failed: {cause}")]
    HandlerFailed {
        event_name: String,
        cause: HandlerError,
    },
}
