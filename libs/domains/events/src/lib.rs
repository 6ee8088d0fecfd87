//! Events domain.
//!
//! Every write goes through the admission pipeline in [`service`]: the
//! payload shape and both references are checked concurrently, the address
//! is admitted by the geolocation gate, and only then is the row written.

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod references;
pub mod repository;
pub mod service;

pub use error::{EventError, EventResult};
pub use handlers::ApiDoc;
pub use models::{AccessibilityLevel, CreateEvent, Event, UpdateEvent};
pub use postgres::PgEventRepository;
pub use references::{DomainReferences, ReferenceValidator};
pub use repository::{EventRepository, InMemoryEventRepository};
pub use service::EventService;
