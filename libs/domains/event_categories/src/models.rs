use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventCategory {
    pub category_id: Uuid,
    /// Unique, compared without case
    pub category_name: String,
    pub category_description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl EventCategory {
    pub fn new(input: CreateEventCategory) -> Self {
        Self {
            category_id: Uuid::new_v4(),
            category_name: input.category_name,
            category_description: input.category_description,
            created_at: Utc::now(),
        }
    }

    pub fn apply_update(&mut self, update: UpdateEventCategory) {
        if let Some(name) = update.category_name {
            self.category_name = name;
        }
        if let Some(description) = update.category_description {
            self.category_description = Some(description);
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventCategory {
    #[validate(length(
        min = 3,
        max = 50,
        message = "Nome da categoria deve conter entre 3 e 50 caracteres"
    ))]
    #[schema(example = "Turísticos")]
    pub category_name: String,
    #[validate(length(
        max = 255,
        message = "Descrição da categoria deve conter no máximo 255 caracteres"
    ))]
    pub category_description: Option<String>,
}

impl CreateEventCategory {
    /// Trims whitespace; a blank description becomes `None`.
    pub fn normalized(self) -> Self {
        Self {
            category_name: self.category_name.trim().to_string(),
            category_description: non_blank(self.category_description),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventCategory {
    #[validate(length(
        min = 3,
        max = 50,
        message = "Nome da categoria deve conter entre 3 e 50 caracteres"
    ))]
    pub category_name: Option<String>,
    #[validate(length(
        max = 255,
        message = "Descrição da categoria deve conter no máximo 255 caracteres"
    ))]
    pub category_description: Option<String>,
}

impl UpdateEventCategory {
    pub fn normalized(self) -> Self {
        Self {
            category_name: self.category_name.map(|n| n.trim().to_string()),
            category_description: non_blank(self.category_description),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
