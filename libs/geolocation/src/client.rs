use async_trait::async_trait;
use bytes::Bytes;
use observability::{GeocodingMetrics, ProviderOperation};
use serde::Deserialize;
use std::time::Instant;
use tracing::{debug, warn};

use crate::address::Coordinates;
use crate::config::MapboxConfig;
use crate::error::{GeoError, GeoResult};
use crate::map::PinColor;

const MAP_STYLE: &str = "mapbox/streets-v11";
const MAP_ZOOM: u8 = 15;
const MAP_SIZE: &str = "600x600";

/// Forward and reverse lookups against a geocoding provider.
///
/// "No candidate" is `Ok(None)`; only transport or provider failures are errors.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// First candidate's coordinates for the address text.
    async fn forward_geocode(&self, address: &str) -> GeoResult<Option<Coordinates>>;

    /// First candidate's place label for the coordinates.
    async fn reverse_geocode(&self, coordinates: Coordinates) -> GeoResult<Option<String>>;
}

/// Static map rendering with a single pin.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StaticMapProvider: Send + Sync {
    async fn static_map(&self, coordinates: Coordinates, pin: PinColor) -> GeoResult<Bytes>;
}

#[derive(Debug, Deserialize)]
struct FeatureCollection {
    #[serde(default)]
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    /// `[longitude, latitude]`
    center: Option<[f64; 2]>,
    place_name: Option<String>,
}

impl FeatureCollection {
    fn first_center(&self) -> Option<Coordinates> {
        self.features
            .first()
            .and_then(|f| f.center)
            .map(|[longitude, latitude]| Coordinates::new(latitude, longitude))
    }

    fn first_place_name(self) -> Option<String> {
        self.features.into_iter().next().and_then(|f| f.place_name)
    }
}

/// Mapbox Geocoding v5 and Static Images client.
#[derive(Clone)]
pub struct MapboxClient {
    http: reqwest::Client,
    base_url: String,
    access_token: String,
}

impl MapboxClient {
    /// Every request carries the configured timeout.
    pub fn new(config: &MapboxConfig) -> GeoResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| GeoError::Unavailable(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            access_token: config.access_token.clone(),
        })
    }

    fn forward_url(&self, address: &str) -> String {
        format!(
            "{}/geocoding/v5/mapbox.places/{}.json?access_token={}",
            self.base_url,
            urlencoding::encode(address),
            self.access_token
        )
    }

    fn reverse_url(&self, coordinates: Coordinates) -> String {
        format!(
            "{}/geocoding/v5/mapbox.places/{},{}.json?access_token={}",
            self.base_url, coordinates.longitude, coordinates.latitude, self.access_token
        )
    }

    fn static_map_url(&self, coordinates: Coordinates, pin: PinColor) -> String {
        let Coordinates {
            latitude: lat,
            longitude: lon,
        } = coordinates;
        format!(
            "{}/styles/v1/{}/static/pin-l+{}({},{})/{},{},{}/{}?access_token={}",
            self.base_url,
            MAP_STYLE,
            pin.hex(),
            lon,
            lat,
            lon,
            lat,
            MAP_ZOOM,
            MAP_SIZE,
            self.access_token
        )
    }

    async fn get(&self, operation: ProviderOperation, url: &str) -> GeoResult<reqwest::Response> {
        let started = Instant::now();
        let result = self
            .http
            .get(url)
            .send()
            .await
            .and_then(|r| r.error_for_status());
        GeocodingMetrics::record_provider_call(operation, result.is_ok(), started.elapsed());

        result.map_err(|e| {
            let e = e.without_url();
            warn!(operation = operation.as_str(), "Mapbox request failed: {}", e);
            GeoError::from(e)
        })
    }

    async fn features(&self, operation: ProviderOperation, url: &str) -> GeoResult<FeatureCollection> {
        let response = self.get(operation, url).await?;
        response.json().await.map_err(|e| {
            let e = e.without_url();
            warn!(operation = operation.as_str(), "Invalid Mapbox response: {}", e);
            GeoError::Unavailable(format!("Invalid geocoding response: {}", e))
        })
    }
}

#[async_trait]
impl Geocoder for MapboxClient {
    async fn forward_geocode(&self, address: &str) -> GeoResult<Option<Coordinates>> {
        let collection = self
            .features(ProviderOperation::Forward, &self.forward_url(address))
            .await?;
        let coordinates = collection.first_center();
        debug!(address, ?coordinates, "Forward geocode");
        Ok(coordinates)
    }

    async fn reverse_geocode(&self, coordinates: Coordinates) -> GeoResult<Option<String>> {
        let collection = self
            .features(ProviderOperation::Reverse, &self.reverse_url(coordinates))
            .await?;
        let place_name = collection.first_place_name();
        debug!(?coordinates, ?place_name, "Reverse geocode");
        Ok(place_name)
    }
}

#[async_trait]
impl StaticMapProvider for MapboxClient {
    async fn static_map(&self, coordinates: Coordinates, pin: PinColor) -> GeoResult<Bytes> {
        let url = self.static_map_url(coordinates, pin);
        let response = self.get(ProviderOperation::StaticMap, &url).await?;
        Ok(response.bytes().await?)
    }
}
