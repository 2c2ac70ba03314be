//! Event dispatcher: routes named events to their registered handlers.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::error::DispatchError;
use crate::event::{Event, EventHandler};

/// Routes events to handlers by event name.
///
/// Handlers for one name are invoked sequentially, in registration order,
/// each awaited before the next. The first handler failure aborts the
/// remaining handlers of that dispatch and is returned to the caller.
///
/// The registry supports concurrent dispatchers; registration and removal
/// are expected to happen during process wiring and teardown, not while
/// steady-state traffic is in flight.
#[derive(Default)]
pub struct EventDispatcher {
    handlers: RwLock<HashMap<String, Vec<Arc<dyn EventHandler>>>>,
}

impl EventDispatcher {
    /// Creates a dispatcher with an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a handler for the named event, appending it to the
    /// invocation list.
    ///
    /// Registering the same handler reference twice for one name fails with
    /// [`DispatchError::AlreadyRegistered`]; a handler never runs twice for
    /// a single dispatch.
    pub async fn register(
        &self,
        event_name: &str,
        handler: Arc<dyn EventHandler>,
    ) -> Result<(), DispatchError> {
        let mut registry = self.handlers.write().await;
        let list = registry.entry(event_name.to_string()).or_default();

        if list.iter().any(|existing| Arc::ptr_eq(existing, &handler)) {
            return Err(DispatchError::AlreadyRegistered(event_name.to_string()));
        }

        list.push(handler);
        Ok(())
    }

    /// Removes one handler reference from the named event. No-op if the
    /// handler is not registered.
    pub async fn unregister(&self, event_name: &str, handler: &Arc<dyn EventHandler>) {
        let mut registry = self.handlers.write().await;
        if let Some(list) = registry.get_mut(event_name) {
            list.retain(|existing| !Arc::ptr_eq(existing, handler));
            if list.is_empty() {
                registry.remove(event_name);
            }
        }
    }

    /// Clears the entire registry. Used during teardown and in tests.
    pub async fn clear(&self) {
        self.handlers.write().await.clear();
    }

    /// Returns true if the handler reference is registered for the event.
    pub async fn has(&self, event_name: &str, handler: &Arc<dyn EventHandler>) -> bool {
        let registry = self.handlers.read().await;
        registry
            .get(event_name)
            .is_some_and(|list| list.iter().any(|existing| Arc::ptr_eq(existing, handler)))
    }

    /// Returns the number of handlers registered for the event.
    pub async fn handler_count(&self, event_name: &str) -> usize {
        let registry = self.handlers.read().await;
        registry.get(event_name).map_or(0, Vec::len)
    }

    /// Dispatches an event to every handler registered for its name.
    ///
    /// Zero registered handlers is a successful no-op. On a handler error
    /// the remaining handlers are skipped and the failure is returned as
    /// [`DispatchError::HandlerFailed`].
    pub async fn dispatch(&self, event: &dyn Event) -> Result<(), DispatchError> {
        // Snapshot the invocation list so handlers run without holding the
        // registry lock.
        let handlers = {
            let registry = self.handlers.read().await;
            match registry.get(event.name()) {
                Some(list) => list.clone(),
                None => return Ok(()),
            }
        };

        tracing::debug!(
            event = event.name(),
            handlers = handlers.len(),
            "dispatching event"
        );

        for handler in &handlers {
            handler
                .handle(event)
                .await
                .map_err(|cause| DispatchError::HandlerFailed {
                    event_name: event.name().to_string(),
                    cause,
                })?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use chrono::{DateTime, Utc};

    use super::*;

    struct TestEvent {
        name: &'static str,
        occurred_at: DateTime<Utc>,
    }

    impl TestEvent {
        fn named(name: &'static str) -> Self {
            Self {
                name,
                occurred_at: Utc::now(),
            }
        }
    }

    impl Event for TestEvent {
        fn name(&self) -> &'static str {
            self.name
        }

        fn occurred_at(&self) -> DateTime<Utc> {
            self.occurred_at
        }

        fn payload(&self) -> Result<serde_json::Value, serde_json::Error> {
            Ok(serde_json::json!({ "event": self.name }))
        }
    }

    /// Records its label into a shared log on every invocation.
    struct RecordingHandler {
        label: &'static str,
        log: Arc<Mutex<Vec<&'static str>>>,
    }

    #[async_trait::async_trait]
    impl EventHandler for RecordingHandler {
        async fn handle(&self, _event: &dyn Event) -> Result<(), crate::HandlerError> {
            self.log.lock().unwrap().push(self.label);
            Ok(())
        }
    }

    struct FailingHandler;

    #[async_trait::async_trait]
    impl EventHandler for FailingHandler {
        async fn handle(&self, _event: &dyn Event) -> Result<(), crate::HandlerError> {
            Err("broker unavailable".into())
        }
    }

    fn recording(
        label: &'static str,
        log: &Arc<Mutex<Vec<&'static str>>>,
    ) -> Arc<dyn EventHandler> {
        Arc::new(RecordingHandler {
            label,
            log: log.clone(),
        })
    }

    #[tokio::test]
    async fn dispatch_invokes_registered_handler() {
        let dispatcher = EventDispatcher::new();
        let log = Arc::new(Mutex::new(Vec::new()));

        dispatcher
            .register("OrderCreated", recording("a", &log))
            .await
            .unwrap();

        dispatcher
            .dispatch(&TestEvent::named("OrderCreated"))
            .await
            .unwrap();

        assert_eq!(*log.lock().unwrap(), vec!["a"]);
    }

    #[tokio::test]
    async fn dispatch_without_handlers_is_noop() {
        let dispatcher = EventDispatcher::new();

        let result = dispatcher.dispatch(&TestEvent::named("OrderCreated")).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn handlers_run_in_registration_order() {
        let dispatcher = EventDispatcher::new();
        let log = Arc::new(Mutex::new(Vec::new()));

        dispatcher
            .register("OrderCreated", recording("first", &log))
            .await
            .unwrap();
        dispatcher
            .register("OrderCreated", recording("second", &log))
            .await
            .unwrap();
        dispatcher
            .register("OrderCreated", recording("third", &log))
            .await
            .unwrap();

        dispatcher
            .dispatch(&TestEvent::named("OrderCreated"))
            .await
            .unwrap();

        assert_eq!(*log.lock().unwrap(), vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn duplicate_registration_is_rejected() {
        let dispatcher = EventDispatcher::new();
        let log = Arc::new(Mutex::new(Vec::new()));
        let handler = recording("a", &log);

        dispatcher
            .register("OrderCreated", handler.clone())
            .await
            .unwrap();
        let result = dispatcher.register("OrderCreated", handler.clone()).await;

        assert!(matches!(result, Err(DispatchError::AlreadyRegistered(_))));

        // The handler must still run exactly once per dispatch.
        dispatcher
            .dispatch(&TestEvent::named("OrderCreated"))
            .await
            .unwrap();
        assert_eq!(*log.lock().unwrap(), vec!["a"]);
    }

    #[tokio::test]
    async fn same_handler_can_serve_different_events() {
        let dispatcher = EventDispatcher::new();
        let log = Arc::new(Mutex::new(Vec::new()));
        let handler = recording("a", &log);

        dispatcher
            .register("OrderCreated", handler.clone())
            .await
            .unwrap();
        dispatcher
            .register("OrderCancelled", handler.clone())
            .await
            .unwrap();

        assert!(dispatcher.has("OrderCreated", &handler).await);
        assert!(dispatcher.has("OrderCancelled", &handler).await);
    }

    #[tokio::test]
    async fn first_failure_skips_remaining_handlers() {
        let dispatcher = EventDispatcher::new();
        let log = Arc::new(Mutex::new(Vec::new()));

        dispatcher
            .register("OrderCreated", Arc::new(FailingHandler))
            .await
            .unwrap();
        dispatcher
            .register("OrderCreated", recording("after", &log))
            .await
            .unwrap();

        let result = dispatcher.dispatch(&TestEvent::named("OrderCreated")).await;

        assert!(matches!(
            result,
            Err(DispatchError::HandlerFailed { ref event_name, .. }) if event_name == "OrderCreated"
        ));
        assert!(log.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn unregister_removes_only_that_handler() {
        let dispatcher = EventDispatcher::new();
        let log = Arc::new(Mutex::new(Vec::new()));
        let first = recording("first", &log);
        let second = recording("second", &log);

        dispatcher
            .register("OrderCreated", first.clone())
            .await
            .unwrap();
        dispatcher
            .register("OrderCreated", second.clone())
            .await
            .unwrap();

        dispatcher.unregister("OrderCreated", &first).await;

        assert!(!dispatcher.has("OrderCreated", &first).await);
        assert!(dispatcher.has("OrderCreated", &second).await);

        dispatcher
            .dispatch(&TestEvent::named("OrderCreated"))
            .await
            .unwrap();
        assert_eq!(*log.lock().unwrap(), vec!["second"]);
    }

    #[tokio::test]
    async fn unregister_unknown_handler_is_noop() {
        let dispatcher = EventDispatcher::new();
        let log = Arc::new(Mutex::new(Vec::new()));
        let handler = recording("a", &log);

        dispatcher.unregister("OrderCreated", &handler).await;

        assert_eq!(dispatcher.handler_count("OrderCreated").await, 0);
    }

    #[tokio::test]
    async fn clear_empties_the_registry() {
        let dispatcher = EventDispatcher::new();
        let log = Arc::new(Mutex::new(Vec::new()));

        dispatcher
            .register("OrderCreated", recording("a", &log))
            .await
            .unwrap();
        dispatcher
            .register("OrderCancelled", recording("b", &log))
            .await
            .unwrap();

        dispatcher.clear().await;

        assert_eq!(dispatcher.handler_count("OrderCreated").await, 0);
        assert_eq!(dispatcher.handler_count("OrderCancelled").await, 0);
    }
}
