use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

pub const CNPJ_DIGITS: usize = 14;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventOrganizer {
    pub organizer_id: Uuid,
    pub organizer_name: String,
    /// Unique, stored lowercase
    pub organizer_email: String,
    /// Unique, digits only
    #[schema(example = "12345678000190")]
    pub organizer_cnpj: String,
    pub organizer_phone_number: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl EventOrganizer {
    pub fn new(input: CreateEventOrganizer) -> Self {
        Self {
            organizer_id: Uuid::new_v4(),
            organizer_name: input.organizer_name,
            organizer_email: input.organizer_email,
            organizer_cnpj: input.organizer_cnpj,
            organizer_phone_number: input.organizer_phone_number,
            created_at: Utc::now(),
        }
    }

    pub fn apply_update(&mut self, update: UpdateEventOrganizer) {
        if let Some(name) = update.organizer_name {
            self.organizer_name = name;
        }
        if let Some(email) = update.organizer_email {
            self.organizer_email = email;
        }
        if let Some(cnpj) = update.organizer_cnpj {
            self.organizer_cnpj = cnpj;
        }
        if let Some(phone) = update.organizer_phone_number {
            self.organizer_phone_number = Some(phone);
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventOrganizer {
    #[validate(length(
        min = 3,
        max = 100,
        message = "Nome do organizador deve conter entre 3 e 100 caracteres"
    ))]
    pub organizer_name: String,
    #[validate(
        email(message = "E-mail do organizador deve ser um e-mail válido"),
        length(
            max = 255,
            message = "E-mail do organizador deve conter no máximo 255 caracteres"
        )
    )]
    pub organizer_email: String,
    /// Punctuation is accepted and stripped
    #[validate(custom(function = "validate_cnpj"))]
    #[schema(example = "12.345.678/0001-90")]
    pub organizer_cnpj: String,
    #[validate(custom(function = "validate_phone"))]
    #[schema(example = "(83) 99999-0000")]
    pub organizer_phone_number: Option<String>,
}

impl CreateEventOrganizer {
    /// Trims text, lowercases the e-mail and keeps only digits in CNPJ and phone.
    pub fn normalized(self) -> Self {
        Self {
            organizer_name: self.organizer_name.trim().to_string(),
            organizer_email: normalize_email(&self.organizer_email),
            organizer_cnpj: digits_only(&self.organizer_cnpj),
            organizer_phone_number: normalize_phone(self.organizer_phone_number),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventOrganizer {
    #[validate(length(
        min = 3,
        max = 100,
        message = "Nome do organizador deve conter entre 3 e 100 caracteres"
    ))]
    pub organizer_name: Option<String>,
    #[validate(
        email(message = "E-mail do organizador deve ser um e-mail válido"),
        length(
            max = 255,
            message = "E-mail do organizador deve conter no máximo 255 caracteres"
        )
    )]
    pub organizer_email: Option<String>,
    #[validate(custom(function = "validate_cnpj"))]
    pub organizer_cnpj: Option<String>,
    #[validate(custom(function = "validate_phone"))]
    pub organizer_phone_number: Option<String>,
}

impl UpdateEventOrganizer {
    pub fn normalized(self) -> Self {
        Self {
            organizer_name: self.organizer_name.map(|n| n.trim().to_string()),
            organizer_email: self.organizer_email.as_deref().map(normalize_email),
            organizer_cnpj: self.organizer_cnpj.as_deref().map(digits_only),
            organizer_phone_number: normalize_phone(self.organizer_phone_number),
        }
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn digits_only(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

fn normalize_phone(phone: Option<String>) -> Option<String> {
    phone.map(|p| digits_only(&p)).filter(|p| !p.is_empty())
}

fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

fn validate_cnpj(cnpj: &str) -> Result<(), ValidationError> {
    if cnpj.len() == CNPJ_DIGITS && cnpj.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(invalid("cnpj", "CNPJ do organizador deve conter 14 dígitos"))
    }
}

fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if (10..=11).contains(&phone.len()) && phone.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(invalid(
            "phone",
            "Telefone do organizador deve conter 10 ou 11 dígitos",
        ))
    }
}
