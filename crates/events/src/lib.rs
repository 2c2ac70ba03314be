//! In-process publish/subscribe for domain events.
//!
//! This crate provides the event-dispatch mechanism that decouples state
//! changes from their side effects:
//! - [`Event`] trait for named, transient domain events with a JSON payload
//! - [`EventHandler`] trait for side-effect logic invoked on dispatch
//! - [`EventDispatcher`] routing an event to its registered handlers,
//!   sequentially and in registration order

pub mod dispatcher;
pub mod error;
pub mod event;

pub use dispatcher::EventDispatcher;
pub use error::DispatchError;
pub use event::{Event, EventHandler, HandlerError};
