use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EventOrganizers::Table)
                    .if_not_exists()
                    .col(pk_uuid(EventOrganizers::OrganizerId))
                    .col(string_len(EventOrganizers::OrganizerName, 100))
                    .col(string_len_uniq(EventOrganizers::OrganizerEmail, 255))
                    .col(string_len_uniq(EventOrganizers::OrganizerCnpj, 14))
                    .col(string_len_null(EventOrganizers::OrganizerPhoneNumber, 11))
                    .col(
                        timestamp_with_time_zone(EventOrganizers::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EventOrganizers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum EventOrganizers {
    Table,
    OrganizerId,
    OrganizerName,
    OrganizerEmail,
    OrganizerCnpj,
    OrganizerPhoneNumber,
    CreatedAt,
}
