use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{CategoryError, CategoryResult};
use crate::models::{CreateEventCategory, EventCategory, UpdateEventCategory};
use crate::repository::EventCategoryRepository;

/// Business rules for event categories
#[derive(Clone)]
pub struct EventCategoryService<R: EventCategoryRepository> {
    repository: Arc<R>,
}

impl<R: EventCategoryRepository> EventCategoryService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    pub fn from_shared(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Create a category after the case-insensitive name check
    #[instrument(skip(self, input), fields(category_name = %input.category_name))]
    pub async fn create_category(&self, input: CreateEventCategory) -> CategoryResult<EventCategory> {
        let input = input.normalized();
        input.validate()?;

        if self
            .repository
            .find_by_name(&input.category_name)
            .await?
            .is_some()
        {
            return Err(CategoryError::DuplicateName(input.category_name));
        }

        self.repository.create(EventCategory::new(input)).await
    }

    pub async fn get_category(&self, id: Uuid) -> CategoryResult<EventCategory> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(CategoryError::NotFound(id))
    }

    /// Resolve a client-supplied id to an existing category.
    ///
    /// A blank or malformed id fails before the repository is queried.
    pub async fn require_category_exists(&self, raw_id: &str) -> CategoryResult<EventCategory> {
        let id = axum_helpers::parse_id(raw_id).map_err(CategoryError::InvalidId)?;
        self.get_category(id).await
    }

    /// All categories by name; an empty store is an error
    pub async fn list_categories(&self) -> CategoryResult<Vec<EventCategory>> {
        let categories = self.repository.list().await?;
        if categories.is_empty() {
            return Err(CategoryError::Empty);
        }
        Ok(categories)
    }

    #[instrument(skip(self, input))]
    pub async fn update_category(
        &self,
        id: Uuid,
        input: UpdateEventCategory,
    ) -> CategoryResult<EventCategory> {
        let input = input.normalized();
        input.validate()?;

        let mut category = self.get_category(id).await?;

        if let Some(name) = &input.category_name {
            if let Some(existing) = self.repository.find_by_name(name).await? {
                if existing.category_id != id {
                    return Err(CategoryError::DuplicateName(name.clone()));
                }
            }
        }

        category.apply_update(input);
        self.repository.update(category).await
    }

    #[instrument(skip(self))]
    pub async fn delete_category(&self, id: Uuid) -> CategoryResult<()> {
        if !self.repository.delete(id).await? {
            return Err(CategoryError::NotFound(id));
        }
        Ok(())
    }
}
