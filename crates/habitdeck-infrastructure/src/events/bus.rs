use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use habitdeck_domain::events::{DomainEvent, EventBus};
use habitdeck_domain::shared::DomainError;

type Handler = Box<dyn Fn(&dyn DomainEvent) + Send + Sync>;

/// Single-process event bus. Handlers run inline on the publishing task;
/// there is no delivery queue and no ordering guarantee across publishers.
pub struct InProcessEventBus {
    handlers: RwLock<Vec<Handler>>,
}

impl InProcessEventBus {
    pub fn new() -> Self {
        Self {
            handlers: RwLock::new(Vec::new()),
        }
    }

    /// Register a handler for every published event. Handlers filter by
    /// downcasting via `DomainEvent::as_any`.
    pub async fn subscribe<F>(&self, handler: F)
    where
        F: Fn(&dyn DomainEvent) + Send + Sync + 'static,
    {
        self.handlers.write().await.push(Box::new(handler));
    }
}

impl Default for InProcessEventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventBus for InProcessEventBus {
    async fn publish(&self, event: Box<dyn DomainEvent>) -> Result<(), DomainError> {
        let handlers = self.handlers.read().await;
        debug!(
            "[events] publish {} handlers={}",
            event.event_type_name(),
            handlers.len()
        );
        for handler in handlers.iter() {
            handler(event.as_ref());
        }
        Ok(())
    }
}
