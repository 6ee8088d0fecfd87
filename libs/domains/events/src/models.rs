use chrono::{DateTime, Utc};
use geolocation::{Address, Coordinates};
use sea_orm::sea_query::StringLen;
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Deserializer, Serialize};
use std::borrow::Cow;
use strum::{Display, EnumString};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError, ValidationErrors};

pub const START_IN_PAST_MESSAGE: &str = "Data de início não pode ser anterior à data atual";
pub const END_BEFORE_START_MESSAGE: &str =
    "Data de término não pode ser menor que a data de início";

/// Accessibility offered at the venue. Absent means not recorded.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    DeriveActiveEnum,
    EnumIter,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum AccessibilityLevel {
    #[sea_orm(string_value = "SEM_ACESSIBILIDADE")]
    SemAcessibilidade,
    #[sea_orm(string_value = "ACESSIBILIDADE_BASICA")]
    AcessibilidadeBasica,
    #[sea_orm(string_value = "ACESSIBILIDADE_AUDITIVA")]
    AcessibilidadeAuditiva,
    #[sea_orm(string_value = "ACESSIBILIDADE_VISUAL")]
    AcessibilidadeVisual,
    #[sea_orm(string_value = "ACESSIBILIDADE_COMPLETA")]
    AcessibilidadeCompleta,
    #[sea_orm(string_value = "NAO_INFORMADA")]
    NaoInformada,
}

/// A registered event. Latitude and longitude always come from the
/// admission gate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub event_id: Uuid,
    pub event_title: String,
    pub event_description: Option<String>,
    pub event_link: Option<String>,
    #[schema(example = 49.9)]
    pub event_price: f64,
    pub event_address_street: String,
    pub event_address_number: String,
    pub event_address_neighborhood: String,
    pub event_address_complement: Option<String>,
    pub event_accessibility_level: Option<AccessibilityLevel>,
    pub start_date_time: DateTime<Utc>,
    pub end_date_time: Option<DateTime<Utc>>,
    pub latitude: f64,
    pub longitude: f64,
    pub event_category_id: Uuid,
    pub event_organizer_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Event {
    pub fn new(
        input: CreateEvent,
        coordinates: Coordinates,
        category_id: Uuid,
        organizer_id: Uuid,
    ) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            event_title: input.event_title,
            event_description: input.event_description,
            event_link: input.event_link,
            event_price: input.event_price,
            event_address_street: input.event_address_street,
            event_address_number: input.event_address_number,
            event_address_neighborhood: input.event_address_neighborhood,
            event_address_complement: input.event_address_complement,
            event_accessibility_level: input.event_accessibility_level,
            start_date_time: input.start_date_time,
            end_date_time: input.end_date_time,
            latitude: coordinates.latitude,
            longitude: coordinates.longitude,
            event_category_id: category_id,
            event_organizer_id: organizer_id,
            created_at: Utc::now(),
        }
    }

    pub fn address(&self) -> Address {
        Address {
            street: self.event_address_street.clone(),
            number: self.event_address_number.clone(),
            neighborhood: self.event_address_neighborhood.clone(),
            complement: self.event_address_complement.clone(),
        }
    }

    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }

    pub fn set_address(&mut self, address: Address, coordinates: Coordinates) {
        self.event_address_street = address.street;
        self.event_address_number = address.number;
        self.event_address_neighborhood = address.neighborhood;
        self.event_address_complement = address.complement;
        self.latitude = coordinates.latitude;
        self.longitude = coordinates.longitude;
    }

    /// Overlays every non-address field present in `update`.
    ///
    /// Address fields and references are applied by the caller, which has
    /// to admit or resolve them first.
    pub fn apply_update(&mut self, update: &UpdateEvent) {
        if let Some(title) = &update.event_title {
            self.event_title = title.clone();
        }
        if let Some(description) = &update.event_description {
            self.event_description = description.clone();
        }
        if let Some(link) = &update.event_link {
            self.event_link = link.clone();
        }
        if let Some(price) = update.event_price {
            self.event_price = price;
        }
        if let Some(level) = update.event_accessibility_level {
            self.event_accessibility_level = level;
        }
        if let Some(start) = update.start_date_time {
            self.start_date_time = start;
        }
        if let Some(end) = update.end_date_time {
            self.end_date_time = end;
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEvent {
    #[validate(length(
        min = 3,
        max = 120,
        message = "Título deve conter entre 3 e 120 caracteres"
    ))]
    #[schema(example = "Festival de Inverno")]
    pub event_title: String,
    #[validate(length(
        min = 3,
        max = 600,
        message = "Descrição deve conter entre 3 e 600 caracteres"
    ))]
    pub event_description: Option<String>,
    #[validate(
        url(message = "O link deve ser uma URL válida"),
        length(max = 255, message = "O link deve conter no máximo 255 caracteres")
    )]
    pub event_link: Option<String>,
    #[validate(
        range(
            min = 0.0,
            max = 999999.99,
            message = "Preço deve estar entre 0 e R$ 999.999,99"
        ),
        custom(function = "validate_price_precision")
    )]
    pub event_price: f64,
    #[validate(length(
        min = 10,
        max = 120,
        message = "Rua deve conter entre 10 e 120 caracteres"
    ))]
    #[schema(example = "Avenida Epitácio Pessoa")]
    pub event_address_street: String,
    #[validate(
        length(
            min = 1,
            max = 8,
            message = "Número deve conter entre 1 e 8 caracteres"
        ),
        custom(function = "validate_address_number")
    )]
    #[schema(example = "1200")]
    pub event_address_number: String,
    #[validate(length(
        min = 5,
        max = 35,
        message = "Bairro deve conter entre 5 e 35 caracteres"
    ))]
    #[schema(example = "Tambaú")]
    pub event_address_neighborhood: String,
    #[validate(length(
        min = 1,
        max = 30,
        message = "Complemento deve conter no máximo 30 caracteres"
    ))]
    pub event_address_complement: Option<String>,
    pub event_accessibility_level: Option<AccessibilityLevel>,
    pub start_date_time: DateTime<Utc>,
    pub end_date_time: Option<DateTime<Utc>>,
    #[schema(value_type = String, format = Uuid)]
    pub event_category_id: String,
    #[schema(value_type = String, format = Uuid)]
    pub event_organizer_id: String,
}

impl CreateEvent {
    /// Trims text fields; blank optional text becomes `None`.
    pub fn normalized(self) -> Self {
        Self {
            event_title: self.event_title.trim().to_string(),
            event_description: non_blank(self.event_description),
            event_link: non_blank(self.event_link),
            event_address_street: self.event_address_street.trim().to_string(),
            event_address_number: self.event_address_number.trim().to_string(),
            event_address_neighborhood: self.event_address_neighborhood.trim().to_string(),
            event_address_complement: non_blank(self.event_address_complement),
            event_category_id: self.event_category_id.trim().to_string(),
            event_organizer_id: self.event_organizer_id.trim().to_string(),
            ..self
        }
    }

    pub fn address(&self) -> Address {
        Address {
            street: self.event_address_street.clone(),
            number: self.event_address_number.clone(),
            neighborhood: self.event_address_neighborhood.clone(),
            complement: self.event_address_complement.clone(),
        }
    }

    /// Field rules plus the schedule rules against `now`.
    pub fn check(&self, now: DateTime<Utc>) -> Result<(), ValidationErrors> {
        self.validate()?;
        check_schedule(self.start_date_time, self.end_date_time, Some(now))
    }
}

/// Sparse update. For clearable fields the outer `Option` records whether
/// the key was sent and the inner one whether it was `null`.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEvent {
    #[validate(length(
        min = 3,
        max = 120,
        message = "Título deve conter entre 3 e 120 caracteres"
    ))]
    pub event_title: Option<String>,
    #[serde(default, deserialize_with = "present")]
    #[validate(length(
        min = 3,
        max = 600,
        message = "Descrição deve conter entre 3 e 600 caracteres"
    ))]
    #[schema(value_type = Option<String>)]
    pub event_description: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[validate(
        url(message = "O link deve ser uma URL válida"),
        length(max = 255, message = "O link deve conter no máximo 255 caracteres")
    )]
    #[schema(value_type = Option<String>)]
    pub event_link: Option<Option<String>>,
    #[validate(
        range(
            min = 0.0,
            max = 999999.99,
            message = "Preço deve estar entre 0 e R$ 999.999,99"
        ),
        custom(function = "validate_price_precision")
    )]
    pub event_price: Option<f64>,
    #[validate(length(
        min = 10,
        max = 120,
        message = "Rua deve conter entre 10 e 120 caracteres"
    ))]
    pub event_address_street: Option<String>,
    #[validate(
        length(
            min = 1,
            max = 8,
            message = "Número deve conter entre 1 e 8 caracteres"
        ),
        custom(function = "validate_address_number")
    )]
    pub event_address_number: Option<String>,
    #[validate(length(
        min = 5,
        max = 35,
        message = "Bairro deve conter entre 5 e 35 caracteres"
    ))]
    pub event_address_neighborhood: Option<String>,
    #[serde(default, deserialize_with = "present")]
    #[validate(length(
        min = 1,
        max = 30,
        message = "Complemento deve conter no máximo 30 caracteres"
    ))]
    #[schema(value_type = Option<String>)]
    pub event_address_complement: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<AccessibilityLevel>)]
    pub event_accessibility_level: Option<Option<AccessibilityLevel>>,
    pub start_date_time: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<DateTime<Utc>>)]
    pub end_date_time: Option<Option<DateTime<Utc>>>,
    #[schema(value_type = Option<String>, format = Uuid)]
    pub event_category_id: Option<String>,
    #[schema(value_type = Option<String>, format = Uuid)]
    pub event_organizer_id: Option<String>,
}

impl UpdateEvent {
    /// Trims text fields. A blank clearable field counts as `null`.
    pub fn normalized(self) -> Self {
        Self {
            event_title: trimmed(self.event_title),
            event_description: self.event_description.map(non_blank),
            event_link: self.event_link.map(non_blank),
            event_address_street: trimmed(self.event_address_street),
            event_address_number: trimmed(self.event_address_number),
            event_address_neighborhood: trimmed(self.event_address_neighborhood),
            event_address_complement: self.event_address_complement.map(non_blank),
            event_category_id: trimmed(self.event_category_id),
            event_organizer_id: trimmed(self.event_organizer_id),
            ..self
        }
    }

    /// `current` with the address fields of this update laid over it.
    pub fn address_over(&self, current: &Address) -> Address {
        Address {
            street: self
                .event_address_street
                .clone()
                .unwrap_or_else(|| current.street.clone()),
            number: self
                .event_address_number
                .clone()
                .unwrap_or_else(|| current.number.clone()),
            neighborhood: self
                .event_address_neighborhood
                .clone()
                .unwrap_or_else(|| current.neighborhood.clone()),
            complement: match &self.event_address_complement {
                Some(complement) => complement.clone(),
                None => current.complement.clone(),
            },
        }
    }
}

/// Start and end rules. `now` is only checked against when a start is being set.
pub fn check_schedule(
    start: DateTime<Utc>,
    end: Option<DateTime<Utc>>,
    now: Option<DateTime<Utc>>,
) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if now.is_some_and(|now| start < now) {
        errors.add(
            "start_date_time",
            invalid("start_in_past", START_IN_PAST_MESSAGE),
        );
    }
    if end.is_some_and(|end| end <= start) {
        errors.add(
            "end_date_time",
            invalid("end_before_start", END_BEFORE_START_MESSAGE),
        );
    }

    if errors.errors().is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn present<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

fn trimmed(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

fn validate_price_precision(price: f64) -> Result<(), ValidationError> {
    let cents = price * 100.0;
    if (cents - cents.round()).abs() < 1e-6 {
        Ok(())
    } else {
        Err(invalid(
            "precision",
            "Preço deve ter no máximo 2 casas decimais",
        ))
    }
}

fn validate_address_number(number: &str) -> Result<(), ValidationError> {
    if number
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == ' ')
    {
        Ok(())
    } else {
        Err(invalid(
            "alphanumeric",
            "Número aceita apenas caracteres alfanuméricos",
        ))
    }
}
