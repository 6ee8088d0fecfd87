//! Event organizers domain.
//!
//! Organizers are identified by a unique e-mail and a unique CNPJ; either
//! collision on write is a conflict.

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{OrganizerError, OrganizerResult};
pub use handlers::ApiDoc;
pub use models::{CreateEventOrganizer, EventOrganizer, UpdateEventOrganizer};
pub use postgres::PgEventOrganizerRepository;
pub use repository::{EventOrganizerRepository, InMemoryEventOrganizerRepository};
pub use service::EventOrganizerService;
