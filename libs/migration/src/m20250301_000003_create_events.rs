use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Events::Table)
                    .if_not_exists()
                    .col(pk_uuid(Events::EventId))
                    .col(string_len(Events::EventTitle, 120))
                    .col(string_len_null(Events::EventDescription, 600))
                    .col(string_len_null(Events::EventLink, 255))
                    .col(double(Events::EventPrice).default(0.0))
                    .col(string_len(Events::EventAddressStreet, 120))
                    .col(string_len(Events::EventAddressNumber, 8))
                    .col(string_len(Events::EventAddressNeighborhood, 35))
                    .col(string_len_null(Events::EventAddressComplement, 30))
                    .col(string_len_null(Events::EventAccessibilityLevel, 32))
                    .col(timestamp_with_time_zone(Events::StartDateTime))
                    .col(timestamp_with_time_zone_null(Events::EndDateTime))
                    .col(double(Events::Latitude))
                    .col(double(Events::Longitude))
                    .col(uuid(Events::EventCategoryId))
                    .col(uuid(Events::EventOrganizerId))
                    .col(
                        timestamp_with_time_zone(Events::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_events_event_category_id")
                            .from(Events::Table, Events::EventCategoryId)
                            .to(EventCategories::Table, EventCategories::CategoryId)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_events_event_organizer_id")
                            .from(Events::Table, Events::EventOrganizerId)
                            .to(EventOrganizers::Table, EventOrganizers::OrganizerId)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_events_event_title")
                    .table(Events::Table)
                    .col(Events::EventTitle)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_events_event_category_id")
                    .table(Events::Table)
                    .col(Events::EventCategoryId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_events_event_organizer_id")
                    .table(Events::Table)
                    .col(Events::EventOrganizerId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Events::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Events {
    Table,
    EventId,
    EventTitle,
    EventDescription,
    EventLink,
    EventPrice,
    EventAddressStreet,
    EventAddressNumber,
    EventAddressNeighborhood,
    EventAddressComplement,
    EventAccessibilityLevel,
    StartDateTime,
    EndDateTime,
    Latitude,
    Longitude,
    EventCategoryId,
    EventOrganizerId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum EventCategories {
    Table,
    CategoryId,
}

#[derive(DeriveIden)]
enum EventOrganizers {
    Table,
    OrganizerId,
}
