use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{EventError, EventResult};
use crate::models::Event;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn create(&self, event: Event) -> EventResult<Event>;

    async fn get_by_id(&self, id: Uuid) -> EventResult<Option<Event>>;

    /// All events ordered by title ascending
    async fn list(&self) -> EventResult<Vec<Event>>;

    async fn update(&self, event: Event) -> EventResult<Event>;

    async fn delete(&self, id: Uuid) -> EventResult<bool>;
}

#[derive(Debug, Default, Clone)]
pub struct InMemoryEventRepository {
    events: Arc<RwLock<HashMap<Uuid, Event>>>,
}

impl InMemoryEventRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EventRepository for InMemoryEventRepository {
    async fn create(&self, event: Event) -> EventResult<Event> {
        self.events
            .write()
            .await
            .insert(event.event_id, event.clone());
        tracing::info!(event_id = %event.event_id, "Created event");
        Ok(event)
    }

    async fn get_by_id(&self, id: Uuid) -> EventResult<Option<Event>> {
        Ok(self.events.read().await.get(&id).cloned())
    }

    async fn list(&self) -> EventResult<Vec<Event>> {
        let mut result: Vec<Event> = self.events.read().await.values().cloned().collect();
        result.sort_by(|a, b| a.event_title.cmp(&b.event_title));
        Ok(result)
    }

    async fn update(&self, event: Event) -> EventResult<Event> {
        let mut events = self.events.write().await;
        if !events.contains_key(&event.event_id) {
            return Err(EventError::NotFound(event.event_id));
        }
        events.insert(event.event_id, event.clone());
        tracing::info!(event_id = %event.event_id, "Updated event");
        Ok(event)
    }

    async fn delete(&self, id: Uuid) -> EventResult<bool> {
        let removed = self.events.write().await.remove(&id).is_some();
        if removed {
            tracing::info!(event_id = %id, "Deleted event");
        }
        Ok(removed)
    }
}
