use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;

use crate::models::AccessibilityLevel;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "events")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub event_id: Uuid,
    pub event_title: String,
    pub event_description: Option<String>,
    pub event_link: Option<String>,
    #[sea_orm(column_type = "Double")]
    pub event_price: f64,
    pub event_address_street: String,
    pub event_address_number: String,
    pub event_address_neighborhood: String,
    pub event_address_complement: Option<String>,
    pub event_accessibility_level: Option<AccessibilityLevel>,
    pub start_date_time: DateTimeWithTimeZone,
    pub end_date_time: Option<DateTimeWithTimeZone>,
    #[sea_orm(column_type = "Double")]
    pub latitude: f64,
    #[sea_orm(column_type = "Double")]
    pub longitude: f64,
    pub event_category_id: Uuid,
    pub event_organizer_id: Uuid,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for crate::models::Event {
    fn from(model: Model) -> Self {
        Self {
            event_id: model.event_id,
            event_title: model.event_title,
            event_description: model.event_description,
            event_link: model.event_link,
            event_price: model.event_price,
            event_address_street: model.event_address_street,
            event_address_number: model.event_address_number,
            event_address_neighborhood: model.event_address_neighborhood,
            event_address_complement: model.event_address_complement,
            event_accessibility_level: model.event_accessibility_level,
            start_date_time: model.start_date_time.into(),
            end_date_time: model.end_date_time.map(Into::into),
            latitude: model.latitude,
            longitude: model.longitude,
            event_category_id: model.event_category_id,
            event_organizer_id: model.event_organizer_id,
            created_at: model.created_at.into(),
        }
    }
}

impl From<crate::models::Event> for ActiveModel {
    fn from(event: crate::models::Event) -> Self {
        ActiveModel {
            event_id: Set(event.event_id),
            event_title: Set(event.event_title),
            event_description: Set(event.event_description),
            event_link: Set(event.event_link),
            event_price: Set(event.event_price),
            event_address_street: Set(event.event_address_street),
            event_address_number: Set(event.event_address_number),
            event_address_neighborhood: Set(event.event_address_neighborhood),
            event_address_complement: Set(event.event_address_complement),
            event_accessibility_level: Set(event.event_accessibility_level),
            start_date_time: Set(event.start_date_time.into()),
            end_date_time: Set(event.end_date_time.map(Into::into)),
            latitude: Set(event.latitude),
            longitude: Set(event.longitude),
            event_category_id: Set(event.event_category_id),
            event_organizer_id: Set(event.event_organizer_id),
            created_at: Set(event.created_at.into()),
        }
    }
}
