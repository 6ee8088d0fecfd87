use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{CategoryError, CategoryResult};
use crate::models::EventCategory;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventCategoryRepository: Send + Sync {
    async fn create(&self, category: EventCategory) -> CategoryResult<EventCategory>;

    async fn get_by_id(&self, id: Uuid) -> CategoryResult<Option<EventCategory>>;

    /// Case-insensitive name lookup
    async fn find_by_name(&self, name: &str) -> CategoryResult<Option<EventCategory>>;

    /// All categories ordered by name ascending
    async fn list(&self) -> CategoryResult<Vec<EventCategory>>;

    async fn update(&self, category: EventCategory) -> CategoryResult<EventCategory>;

    /// `false` when nothing was deleted
    async fn delete(&self, id: Uuid) -> CategoryResult<bool>;
}

/// In-memory implementation for tests and local runs.
#[derive(Debug, Default, Clone)]
pub struct InMemoryEventCategoryRepository {
    categories: Arc<RwLock<HashMap<Uuid, EventCategory>>>,
}

impl InMemoryEventCategoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn same_name(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

#[async_trait]
impl EventCategoryRepository for InMemoryEventCategoryRepository {
    async fn create(&self, category: EventCategory) -> CategoryResult<EventCategory> {
        let mut categories = self.categories.write().await;

        if categories
            .values()
            .any(|c| same_name(&c.category_name, &category.category_name))
        {
            return Err(CategoryError::DuplicateName(category.category_name));
        }

        categories.insert(category.category_id, category.clone());
        tracing::info!(category_id = %category.category_id, "Created event category");
        Ok(category)
    }

    async fn get_by_id(&self, id: Uuid) -> CategoryResult<Option<EventCategory>> {
        Ok(self.categories.read().await.get(&id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> CategoryResult<Option<EventCategory>> {
        let categories = self.categories.read().await;
        Ok(categories
            .values()
            .find(|c| same_name(&c.category_name, name))
            .cloned())
    }

    async fn list(&self) -> CategoryResult<Vec<EventCategory>> {
        let mut result: Vec<EventCategory> =
            self.categories.read().await.values().cloned().collect();
        result.sort_by(|a, b| a.category_name.cmp(&b.category_name));
        Ok(result)
    }

    async fn update(&self, category: EventCategory) -> CategoryResult<EventCategory> {
        let mut categories = self.categories.write().await;

        if !categories.contains_key(&category.category_id) {
            return Err(CategoryError::NotFound(category.category_id));
        }
        if categories.values().any(|c| {
            c.category_id != category.category_id
                && same_name(&c.category_name, &category.category_name)
        }) {
            return Err(CategoryError::DuplicateName(category.category_name));
        }

        categories.insert(category.category_id, category.clone());
        tracing::info!(category_id = %category.category_id, "Updated event category");
        Ok(category)
    }

    async fn delete(&self, id: Uuid) -> CategoryResult<bool> {
        let removed = self.categories.write().await.remove(&id).is_some();
        if removed {
            tracing::info!(category_id = %id, "Deleted event category");
        }
        Ok(removed)
    }
}
