use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{OrganizerError, OrganizerResult};
use crate::models::EventOrganizer;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventOrganizerRepository: Send + Sync {
    async fn create(&self, organizer: EventOrganizer) -> OrganizerResult<EventOrganizer>;

    async fn get_by_id(&self, id: Uuid) -> OrganizerResult<Option<EventOrganizer>>;

    /// First organizer other than `excluding` holding either the e-mail or the CNPJ
    async fn find_by_email_or_cnpj(
        &self,
        email: &str,
        cnpj: &str,
        excluding: Option<Uuid>,
    ) -> OrganizerResult<Option<EventOrganizer>>;

    /// All organizers ordered by name ascending
    async fn list(&self) -> OrganizerResult<Vec<EventOrganizer>>;

    async fn update(&self, organizer: EventOrganizer) -> OrganizerResult<EventOrganizer>;

    async fn delete(&self, id: Uuid) -> OrganizerResult<bool>;
}

#[derive(Debug, Default, Clone)]
pub struct InMemoryEventOrganizerRepository {
    organizers: Arc<RwLock<HashMap<Uuid, EventOrganizer>>>,
}

impl InMemoryEventOrganizerRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn collides(a: &EventOrganizer, b: &EventOrganizer) -> bool {
    a.organizer_id != b.organizer_id
        && (a.organizer_email == b.organizer_email || a.organizer_cnpj == b.organizer_cnpj)
}

#[async_trait]
impl EventOrganizerRepository for InMemoryEventOrganizerRepository {
    async fn create(&self, organizer: EventOrganizer) -> OrganizerResult<EventOrganizer> {
        let mut organizers = self.organizers.write().await;

        if organizers.values().any(|o| collides(o, &organizer)) {
            return Err(OrganizerError::Duplicate);
        }

        organizers.insert(organizer.organizer_id, organizer.clone());
        tracing::info!(organizer_id = %organizer.organizer_id, "Created event organizer");
        Ok(organizer)
    }

    async fn get_by_id(&self, id: Uuid) -> OrganizerResult<Option<EventOrganizer>> {
        Ok(self.organizers.read().await.get(&id).cloned())
    }

    async fn find_by_email_or_cnpj(
        &self,
        email: &str,
        cnpj: &str,
        excluding: Option<Uuid>,
    ) -> OrganizerResult<Option<EventOrganizer>> {
        let organizers = self.organizers.read().await;
        Ok(organizers
            .values()
            .filter(|o| Some(o.organizer_id) != excluding)
            .find(|o| o.organizer_email == email || o.organizer_cnpj == cnpj)
            .cloned())
    }

    async fn list(&self) -> OrganizerResult<Vec<EventOrganizer>> {
        let mut result: Vec<EventOrganizer> =
            self.organizers.read().await.values().cloned().collect();
        result.sort_by(|a, b| a.organizer_name.cmp(&b.organizer_name));
        Ok(result)
    }

    async fn update(&self, organizer: EventOrganizer) -> OrganizerResult<EventOrganizer> {
        let mut organizers = self.organizers.write().await;

        if !organizers.contains_key(&organizer.organizer_id) {
            return Err(OrganizerError::NotFound(organizer.organizer_id));
        }
        if organizers.values().any(|o| collides(o, &organizer)) {
            return Err(OrganizerError::Duplicate);
        }

        organizers.insert(organizer.organizer_id, organizer.clone());
        tracing::info!(organizer_id = %organizer.organizer_id, "Updated event organizer");
        Ok(organizer)
    }

    async fn delete(&self, id: Uuid) -> OrganizerResult<bool> {
        let removed = self.organizers.write().await.remove(&id).is_some();
        if removed {
            tracing::info!(organizer_id = %id, "Deleted event organizer");
        }
        Ok(removed)
    }
}
