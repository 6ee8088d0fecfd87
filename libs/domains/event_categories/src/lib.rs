//! Event categories domain.
//!
//! ```rust,no_run
//! use domain_event_categories::{
//!     handlers,
//!     repository::InMemoryEventCategoryRepository,
//!     service::EventCategoryService,
//! };
//!
//! let service = EventCategoryService::new(InMemoryEventCategoryRepository::new());
//! let router = handlers::router(service);
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{CategoryError, CategoryResult};
pub use handlers::ApiDoc;
pub use models::{CreateEventCategory, EventCategory, UpdateEventCategory};
pub use postgres::PgEventCategoryRepository;
pub use repository::{EventCategoryRepository, InMemoryEventCategoryRepository};
pub use service::EventCategoryService;
