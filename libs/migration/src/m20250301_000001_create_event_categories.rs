use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EventCategories::Table)
                    .if_not_exists()
                    .col(pk_uuid(EventCategories::CategoryId))
                    .col(string_len(EventCategories::CategoryName, 50))
                    .col(string_len_null(EventCategories::CategoryDescription, 255))
                    .col(
                        timestamp_with_time_zone(EventCategories::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Names are unique regardless of case.
        manager
            .get_connection()
            .execute_unprepared(
                "CREATE UNIQUE INDEX IF NOT EXISTS idx_event_categories_name_lower \
                 ON event_categories (lower(category_name))",
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EventCategories::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum EventCategories {
    Table,
    CategoryId,
    CategoryName,
    CategoryDescription,
    CreatedAt,
}
