use async_trait::async_trait;
use database::BaseRepository;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder, SqlErr};
use uuid::Uuid;

use crate::{
    entity,
    error::{EventError, EventResult},
    models::Event,
    repository::EventRepository,
};

pub struct PgEventRepository {
    base: BaseRepository<entity::Entity>,
}

impl PgEventRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

fn internal(e: DbErr) -> EventError {
    match e.sql_err() {
        Some(SqlErr::ForeignKeyConstraintViolation(details)) => {
            EventError::Internal(format!("Reference removed during write: {}", details))
        }
        _ => EventError::Internal(format!("Database error: {}", e)),
    }
}

#[async_trait]
impl EventRepository for PgEventRepository {
    async fn create(&self, event: Event) -> EventResult<Event> {
        let model = self.base.insert(event.into()).await.map_err(internal)?;

        tracing::info!(event_id = %model.event_id, "Created event");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: Uuid) -> EventResult<Option<Event>> {
        let model = self.base.find_by_id(id).await.map_err(internal)?;
        Ok(model.map(Into::into))
    }

    async fn list(&self) -> EventResult<Vec<Event>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::EventTitle)
            .all(self.base.db())
            .await
            .map_err(internal)?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn update(&self, event: Event) -> EventResult<Event> {
        let id = event.event_id;
        let model = self
            .base
            .update(event.into())
            .await
            .map_err(|e| match e {
                DbErr::RecordNotUpdated => EventError::NotFound(id),
                e => internal(e),
            })?;

        tracing::info!(event_id = %id, "Updated event");
        Ok(model.into())
    }

    async fn delete(&self, id: Uuid) -> EventResult<bool> {
        let rows = self.base.delete_by_id(id).await.map_err(internal)?;
        if rows > 0 {
            tracing::info!(event_id = %id, "Deleted event");
        }
        Ok(rows > 0)
    }
}
