use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "event_categories")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub category_id: Uuid,
    pub category_name: String,
    pub category_description: Option<String>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for crate::models::EventCategory {
    fn from(model: Model) -> Self {
        Self {
            category_id: model.category_id,
            category_name: model.category_name,
            category_description: model.category_description,
            created_at: model.created_at.into(),
        }
    }
}

impl From<crate::models::EventCategory> for ActiveModel {
    fn from(category: crate::models::EventCategory) -> Self {
        ActiveModel {
            category_id: Set(category.category_id),
            category_name: Set(category.category_name),
            category_description: Set(category.category_description),
            created_at: Set(category.created_at.into()),
        }
    }
}
