use async_trait::async_trait;
use domain_event_categories::{EventCategoryRepository, EventCategoryService};
use domain_event_organizers::{EventOrganizerRepository, EventOrganizerService};
use uuid::Uuid;

use crate::error::EventResult;

/// Existence checks for the entities an event points at.
///
/// Both take the id as sent by the client: a blank or malformed id fails
/// before any lookup.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReferenceValidator: Send + Sync {
    async fn require_category(&self, raw_id: &str) -> EventResult<Uuid>;

    async fn require_organizer(&self, raw_id: &str) -> EventResult<Uuid>;
}

/// Validator backed by the category and organizer services.
pub struct DomainReferences<C: EventCategoryRepository, O: EventOrganizerRepository> {
    categories: EventCategoryService<C>,
    organizers: EventOrganizerService<O>,
}

impl<C: EventCategoryRepository, O: EventOrganizerRepository> DomainReferences<C, O> {
    pub fn new(categories: EventCategoryService<C>, organizers: EventOrganizerService<O>) -> Self {
        Self {
            categories,
            organizers,
        }
    }
}

#[async_trait]
impl<C, O> ReferenceValidator for DomainReferences<C, O>
where
    C: EventCategoryRepository + 'static,
    O: EventOrganizerRepository + 'static,
{
    async fn require_category(&self, raw_id: &str) -> EventResult<Uuid> {
        let category = self.categories.require_category_exists(raw_id).await?;
        Ok(category.category_id)
    }

    async fn require_organizer(&self, raw_id: &str) -> EventResult<Uuid> {
        let organizer = self.organizers.require_organizer_exists(raw_id).await?;
        Ok(organizer.organizer_id)
    }
}
