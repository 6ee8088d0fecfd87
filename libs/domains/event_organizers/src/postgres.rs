use async_trait::async_trait;
use database::BaseRepository;
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    SqlErr,
};
use uuid::Uuid;

use crate::{
    entity,
    error::{OrganizerError, OrganizerResult},
    models::EventOrganizer,
    repository::EventOrganizerRepository,
};

pub struct PgEventOrganizerRepository {
    base: BaseRepository<entity::Entity>,
}

impl PgEventOrganizerRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

fn internal(e: DbErr) -> OrganizerError {
    OrganizerError::Internal(format!("Database error: {}", e))
}

fn write_error(e: DbErr) -> OrganizerError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => OrganizerError::Duplicate,
        _ => internal(e),
    }
}

#[async_trait]
impl EventOrganizerRepository for PgEventOrganizerRepository {
    async fn create(&self, organizer: EventOrganizer) -> OrganizerResult<EventOrganizer> {
        let model = self
            .base
            .insert(organizer.into())
            .await
            .map_err(write_error)?;

        tracing::info!(organizer_id = %model.organizer_id, "Created event organizer");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: Uuid) -> OrganizerResult<Option<EventOrganizer>> {
        let model = self.base.find_by_id(id).await.map_err(internal)?;
        Ok(model.map(Into::into))
    }

    async fn find_by_email_or_cnpj(
        &self,
        email: &str,
        cnpj: &str,
        excluding: Option<Uuid>,
    ) -> OrganizerResult<Option<EventOrganizer>> {
        let mut query = entity::Entity::find().filter(
            Condition::any()
                .add(entity::Column::OrganizerEmail.eq(email))
                .add(entity::Column::OrganizerCnpj.eq(cnpj)),
        );
        if let Some(id) = excluding {
            query = query.filter(entity::Column::OrganizerId.ne(id));
        }

        let model = query
            .one(self.base.db())
            .await
            .map_err(internal)?;

        Ok(model.map(Into::into))
    }

    async fn list(&self) -> OrganizerResult<Vec<EventOrganizer>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::OrganizerName)
            .all(self.base.db())
            .await
            .map_err(internal)?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn update(&self, organizer: EventOrganizer) -> OrganizerResult<EventOrganizer> {
        let id = organizer.organizer_id;
        let model = self
            .base
            .update(organizer.into())
            .await
            .map_err(|e| match e {
                DbErr::RecordNotUpdated => OrganizerError::NotFound(id),
                e => write_error(e),
            })?;

        tracing::info!(organizer_id = %id, "Updated event organizer");
        Ok(model.into())
    }

    async fn delete(&self, id: Uuid) -> OrganizerResult<bool> {
        let rows = self.base.delete_by_id(id).await.map_err(|e| match e.sql_err() {
            Some(SqlErr::ForeignKeyConstraintViolation(_)) => OrganizerError::InUse(id),
            _ => internal(e),
        })?;

        if rows > 0 {
            tracing::info!(organizer_id = %id, "Deleted event organizer");
        }
        Ok(rows > 0)
    }
}
