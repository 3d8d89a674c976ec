//! Event repository trait and the in-memory implementation

use crate::error::{EventError, Result};
use crate::models::{Event, EventStatus};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Repository trait for event storage operations
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Store a new event
    async fn create(&self, event: Event) -> Result<Event>;

    /// Get event by ID
    async fn get_by_id(&self, id: Uuid) -> Result<Option<Event>>;

    /// Every stored event in insertion order
    async fn list(&self) -> Result<Vec<Event>>;

    /// Write the editable fields of a stored event and return the stored
    /// result. `status` and `createdAt` are never written here, so a
    /// concurrent completion survives. `NotFound` if the event is gone.
    async fn update(&self, event: Event) -> Result<Event>;

    /// Mark an event completed in one atomic step, returning the new state
    async fn complete(&self, id: Uuid) -> Result<Option<Event>>;

    /// Delete event by ID
    async fn delete(&self, id: Uuid) -> Result<bool>;

    /// Count stored events
    async fn count(&self) -> Result<u64>;
}

#[derive(Default)]
struct Store {
    events: HashMap<Uuid, Event>,
    order: Vec<Uuid>,
}

/// Process-local repository for development and tests
#[derive(Clone, Default)]
pub struct InMemoryEventRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryEventRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EventRepository for InMemoryEventRepository {
    async fn create(&self, event: Event) -> Result<Event> {
        let mut store = self.store.write().await;
        if store.events.contains_key(&event.id) {
            return Err(EventError::Internal {
                message: format!("duplicate event id {}", event.id),
            });
        }
        store.order.push(event.id);
        store.events.insert(event.id, event.clone());
        Ok(event)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Event>> {
        Ok(self.store.read().await.events.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Event>> {
        let store = self.store.read().await;
        Ok(store
            .order
            .iter()
            .filter_map(|id| store.events.get(id).cloned())
            .collect())
    }

    async fn update(&self, event: Event) -> Result<Event> {
        let mut store = self.store.write().await;
        match store.events.get_mut(&event.id) {
            Some(slot) => {
                *slot = Event {
                    status: slot.status,
                    created_at: slot.created_at,
                    ..event
                };
                Ok(slot.clone())
            }
            None => Err(EventError::NotFound { id: event.id }),
        }
    }

    async fn complete(&self, id: Uuid) -> Result<Option<Event>> {
        let mut store = self.store.write().await;
        Ok(store.events.get_mut(&id).map(|event| {
            event.status = EventStatus::Completed;
            event.updated_at = Utc::now();
            event.clone()
        }))
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let mut store = self.store.write().await;
        let removed = store.events.remove(&id).is_some();
        if removed {
            store.order.retain(|existing| *existing != id);
        }
        Ok(removed)
    }

    async fn count(&self) -> Result<u64> {
        Ok(self.store.read().await.events.len() as u64)
    }
}
