//! Geographic admission of event addresses.
//!
//! ```text
//! Address ──format──▶ "rua, nº, bairro[, compl.], cidade"
//!                          │
//!                    forward geocode ──▶ Coordinates (or not resolved)
//!                          │
//!                    GeoAdmissionPolicy (reverse geocode + place label match)
//!                          │
//!                  admitted Coordinates / OutOfBounds
//! ```
//!
//! The same provider renders static map images, cached through a
//! [`CoordinateCache`] with a TTL.

pub mod address;
pub mod admission;
pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod map;

pub use address::{Address, Coordinates};
pub use admission::{AdmissionGate, GeoAdmissionPolicy, PlaceLabelPolicy};
pub use cache::{CoordinateCache, InMemoryCoordinateCache, RedisCoordinateCache, get_or_compute};
pub use client::{Geocoder, MapboxClient, StaticMapProvider};
pub use config::{GeoConfig, MapboxConfig};
pub use error::{GeoError, GeoResult};
pub use map::{MapImageService, PinColor};
