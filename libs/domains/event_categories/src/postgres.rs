use async_trait::async_trait;
use database::BaseRepository;
use sea_orm::sea_query::{Expr, ExprTrait, Func};
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, SqlErr};
use uuid::Uuid;

use crate::{
    entity,
    error::{CategoryError, CategoryResult},
    models::EventCategory,
    repository::EventCategoryRepository,
};

pub struct PgEventCategoryRepository {
    base: BaseRepository<entity::Entity>,
}

impl PgEventCategoryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

fn internal(e: DbErr) -> CategoryError {
    CategoryError::Internal(format!("Database error: {}", e))
}

/// Unique index races surface as conflicts, not 500s.
fn write_error(e: DbErr, name: &str) -> CategoryError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => CategoryError::DuplicateName(name.to_string()),
        _ => internal(e),
    }
}

#[async_trait]
impl EventCategoryRepository for PgEventCategoryRepository {
    async fn create(&self, category: EventCategory) -> CategoryResult<EventCategory> {
        let name = category.category_name.clone();
        let model = self
            .base
            .insert(category.into())
            .await
            .map_err(|e| write_error(e, &name))?;

        tracing::info!(category_id = %model.category_id, "Created event category");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: Uuid) -> CategoryResult<Option<EventCategory>> {
        let model = self.base.find_by_id(id).await.map_err(internal)?;
        Ok(model.map(Into::into))
    }

    async fn find_by_name(&self, name: &str) -> CategoryResult<Option<EventCategory>> {
        let model = entity::Entity::find()
            .filter(
                Expr::expr(Func::lower(Expr::col(entity::Column::CategoryName)))
                    .eq(name.to_lowercase()),
            )
            .one(self.base.db())
            .await
            .map_err(internal)?;

        Ok(model.map(Into::into))
    }

    async fn list(&self) -> CategoryResult<Vec<EventCategory>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::CategoryName)
            .all(self.base.db())
            .await
            .map_err(internal)?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn update(&self, category: EventCategory) -> CategoryResult<EventCategory> {
        let id = category.category_id;
        let name = category.category_name.clone();
        let model = self
            .base
            .update(category.into())
            .await
            .map_err(|e| match e {
                DbErr::RecordNotUpdated => CategoryError::NotFound(id),
                e => write_error(e, &name),
            })?;

        tracing::info!(category_id = %id, "Updated event category");
        Ok(model.into())
    }

    async fn delete(&self, id: Uuid) -> CategoryResult<bool> {
        let rows = self.base.delete_by_id(id).await.map_err(|e| match e.sql_err() {
            Some(SqlErr::ForeignKeyConstraintViolation(_)) => CategoryError::InUse(id),
            _ => internal(e),
        })?;

        if rows > 0 {
            tracing::info!(category_id = %id, "Deleted event category");
        }
        Ok(rows > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn model(name: &str) -> entity::Model {
        entity::Model {
            category_id: Uuid::new_v4(),
            category_name: name.to_string(),
            category_description: None,
            created_at: Utc::now().into(),
        }
    }

    #[tokio::test]
    async fn test_list_maps_models() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model("Shows"), model("Turísticos")]])
            .into_connection();
        let repo = PgEventCategoryRepository::new(db);

        let categories = repo.list().await.unwrap();
        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].category_name, "Shows");
    }

    #[tokio::test]
    async fn test_delete_reports_missing_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();
        let repo = PgEventCategoryRepository::new(db);

        assert!(!repo.delete(Uuid::new_v4()).await.unwrap());
    }
}
