//! Static map images for event locations, served at `/map`.

use axum::{
    Router,
    extract::{Query, State, rejection::QueryRejection},
    http::header,
    response::{IntoResponse, Response},
    routing::get,
};
use axum_helpers::{
    AppError,
    errors::responses::{BadRequestValidationResponse, ExternalServiceFailureResponse},
};
use bytes::Bytes;
use observability::GeocodingMetrics;
use serde::Deserialize;
use std::borrow::Cow;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, instrument};
use utoipa::{IntoParams, OpenApi};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::address::Coordinates;
use crate::cache::{CoordinateCache, get_or_compute};
use crate::client::StaticMapProvider;
use crate::error::GeoResult;

pub const MAP_FAILURE_MESSAGE: &str = "Erro ao carregar o mapa";

/// Pin color by ticket price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinColor {
    /// No price informed
    Red,
    /// Free event
    Green,
    /// Paid event
    Orange,
}

impl PinColor {
    pub fn for_price(price: Option<f64>) -> Self {
        match price {
            None => PinColor::Red,
            Some(p) if p <= 0.0 => PinColor::Green,
            Some(_) => PinColor::Orange,
        }
    }

    pub fn hex(&self) -> &'static str {
        match self {
            PinColor::Red => "FF0000",
            PinColor::Green => "2ECC71",
            PinColor::Orange => "F39C12",
        }
    }
}

/// Renders map images through the provider, cached per coordinate and pin.
pub struct MapImageService {
    provider: Arc<dyn StaticMapProvider>,
    cache: Arc<dyn CoordinateCache>,
    ttl: Duration,
}

impl MapImageService {
    pub fn new(
        provider: Arc<dyn StaticMapProvider>,
        cache: Arc<dyn CoordinateCache>,
        ttl: Duration,
    ) -> Self {
        Self {
            provider,
            cache,
            ttl,
        }
    }

    pub fn cache_key(coordinates: Coordinates, pin: PinColor) -> String {
        format!(
            "{},{}:{}",
            coordinates.latitude,
            coordinates.longitude,
            pin.hex()
        )
    }

    #[instrument(skip(self))]
    pub async fn image(&self, coordinates: Coordinates, price: Option<f64>) -> GeoResult<Bytes> {
        let pin = PinColor::for_price(price);
        let key = Self::cache_key(coordinates, pin);

        let mut rendered = false;
        let image = get_or_compute(self.cache.as_ref(), &key, self.ttl, || {
            rendered = true;
            self.provider.static_map(coordinates, pin)
        })
        .await?;

        GeocodingMetrics::record_map_cache(!rendered);
        Ok(image)
    }
}

#[derive(Debug, Deserialize, Validate, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct MapQuery {
    /// Latitude in decimal degrees
    #[validate(
        range(min = -90.0, max = 90.0, message = "Latitude deve estar entre -90 e 90"),
        custom(function = "finite_latitude")
    )]
    pub latitude: f64,
    /// Longitude in decimal degrees
    #[validate(
        range(min = -180.0, max = 180.0, message = "Longitude deve estar entre -180 e 180"),
        custom(function = "finite_longitude")
    )]
    pub longitude: f64,
    /// Ticket price; selects the pin color
    pub event_price: Option<f64>,
}

// `range` lets NaN through since every comparison with it is false.
fn finite(value: f64, message: &'static str) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::new("range").with_message(Cow::Borrowed(message)))
    }
}

fn finite_latitude(value: f64) -> Result<(), ValidationError> {
    finite(value, "Latitude deve estar entre -90 e 90")
}

fn finite_longitude(value: f64) -> Result<(), ValidationError> {
    finite(value, "Longitude deve estar entre -180 e 180")
}

#[derive(Debug)]
enum MapError {
    Query(QueryRejection),
    Validation(ValidationErrors),
    Unavailable,
}

impl IntoResponse for MapError {
    fn into_response(self) -> Response {
        let app_error = match self {
            MapError::Query(rejection) => AppError::Validation {
                message: rejection.body_text(),
                details: None,
            },
            MapError::Validation(errors) => errors.into(),
            MapError::Unavailable => AppError::ExternalService(MAP_FAILURE_MESSAGE.to_string()),
        };
        app_error.into_response()
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(map_image),
    components(responses(BadRequestValidationResponse, ExternalServiceFailureResponse)),
    tags((name = "map", description = "Static map images for event locations"))
)]
pub struct ApiDoc;

pub fn router(service: MapImageService) -> Router {
    Router::new()
        .route("/", get(map_image))
        .with_state(Arc::new(service))
}

/// PNG map centred on the coordinates with a price-colored pin
#[utoipa::path(
    get,
    path = "",
    tag = "map",
    params(MapQuery),
    responses(
        (status = 200, description = "Map image", content_type = "image/png", body = Vec<u8>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = ExternalServiceFailureResponse)
    )
)]
async fn map_image(
    State(service): State<Arc<MapImageService>>,
    query: Result<Query<MapQuery>, QueryRejection>,
) -> Result<Response, MapError> {
    let Query(query) = query.map_err(MapError::Query)?;
    query.validate().map_err(MapError::Validation)?;

    let coordinates = Coordinates::new(query.latitude, query.longitude);
    let image = service
        .image(coordinates, query.event_price)
        .await
        .map_err(|e| {
            error!(?coordinates, "Map image failed: {}", e);
            MapError::Unavailable
        })?;

    Ok(([(header::CONTENT_TYPE, "image/png")], image).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::InMemoryCoordinateCache;
    use crate::client::MockStaticMapProvider;
    use crate::error::GeoError;
    use mockall::predicate::eq;

    #[test]
    fn test_pin_color_by_price() {
        assert_eq!(PinColor::for_price(None), PinColor::Red);
        assert_eq!(PinColor::for_price(Some(0.0)), PinColor::Green);
        assert_eq!(PinColor::for_price(Some(25.5)), PinColor::Orange);
    }

    #[test]
    fn test_query_rejects_non_finite_coordinates() {
        let query = MapQuery {
            latitude: f64::NAN,
            longitude: -34.8,
            event_price: None,
        };
        let errors = query.validate().unwrap_err();
        let latitude = &errors.field_errors()["latitude"];
        assert_eq!(
            latitude[0].message.as_deref(),
            Some("Latitude deve estar entre -90 e 90")
        );

        let query = MapQuery {
            latitude: -7.1,
            longitude: f64::INFINITY,
            event_price: None,
        };
        assert!(query.validate().unwrap_err().field_errors().contains_key("longitude"));

        let query = MapQuery {
            latitude: -7.1,
            longitude: -34.8,
            event_price: Some(0.0),
        };
        assert!(query.validate().is_ok());
    }

    #[test]
    fn test_cache_key_includes_pin() {
        let key = MapImageService::cache_key(Coordinates::new(-7.1, -34.8), PinColor::Red);
        assert_eq!(key, "-7.1,-34.8:FF0000");
    }

    #[tokio::test]
    async fn test_image_is_cached_per_pin() {
        let point = Coordinates::new(-7.1, -34.8);
        let mut provider = MockStaticMapProvider::new();
        provider
            .expect_static_map()
            .with(eq(point), eq(PinColor::Green))
            .times(1)
            .returning(|_, _| Ok(Bytes::from_static(b"green")));
        provider
            .expect_static_map()
            .with(eq(point), eq(PinColor::Orange))
            .times(1)
            .returning(|_, _| Ok(Bytes::from_static(b"orange")));

        let service = MapImageService::new(
            Arc::new(provider),
            Arc::new(InMemoryCoordinateCache::new()),
            Duration::from_secs(60),
        );

        assert_eq!(service.image(point, Some(0.0)).await.unwrap(), "green");
        assert_eq!(service.image(point, Some(0.0)).await.unwrap(), "green");
        assert_eq!(service.image(point, Some(10.0)).await.unwrap(), "orange");
    }

    #[tokio::test]
    async fn test_provider_failure_is_not_cached() {
        let mut provider = MockStaticMapProvider::new();
        provider
            .expect_static_map()
            .times(2)
            .returning(|_, _| Err(GeoError::Unavailable("502".to_string())));
        let service = MapImageService::new(
            Arc::new(provider),
            Arc::new(InMemoryCoordinateCache::new()),
            Duration::from_secs(60),
        );

        let point = Coordinates::new(1.0, 2.0);
        assert!(service.image(point, None).await.is_err());
        assert!(service.image(point, None).await.is_err());
    }
}
