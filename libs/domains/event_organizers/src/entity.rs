use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "event_organizers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub organizer_id: Uuid,
    pub organizer_name: String,
    #[sea_orm(unique)]
    pub organizer_email: String,
    #[sea_orm(unique)]
    pub organizer_cnpj: String,
    pub organizer_phone_number: Option<String>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for crate::models::EventOrganizer {
    fn from(model: Model) -> Self {
        Self {
            organizer_id: model.organizer_id,
            organizer_name: model.organizer_name,
            organizer_email: model.organizer_email,
            organizer_cnpj: model.organizer_cnpj,
            organizer_phone_number: model.organizer_phone_number,
            created_at: model.created_at.into(),
        }
    }
}

impl From<crate::models::EventOrganizer> for ActiveModel {
    fn from(organizer: crate::models::EventOrganizer) -> Self {
        ActiveModel {
            organizer_id: Set(organizer.organizer_id),
            organizer_name: Set(organizer.organizer_name),
            organizer_email: Set(organizer.organizer_email),
            organizer_cnpj: Set(organizer.organizer_cnpj),
            organizer_phone_number: Set(organizer.organizer_phone_number),
            created_at: Set(organizer.created_at.into()),
        }
    }
}
