use async_trait::async_trait;
use observability::{AdmissionOutcome, GeocodingMetrics};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::address::{Address, Coordinates};
use crate::client::Geocoder;
use crate::error::{GeoError, GeoResult};

/// Decides whether resolved coordinates lie inside the service's city.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GeoAdmissionPolicy: Send + Sync {
    async fn admits(&self, coordinates: Coordinates) -> GeoResult<bool>;
}

/// Reverse-geocodes the coordinates and accepts them when the place label
/// contains the city name, ignoring case.
pub struct PlaceLabelPolicy {
    geocoder: Arc<dyn Geocoder>,
    city_lowercase: String,
}

impl PlaceLabelPolicy {
    pub fn new(geocoder: Arc<dyn Geocoder>, city: &str) -> Self {
        Self {
            geocoder,
            city_lowercase: city.to_lowercase(),
        }
    }
}

#[async_trait]
impl GeoAdmissionPolicy for PlaceLabelPolicy {
    async fn admits(&self, coordinates: Coordinates) -> GeoResult<bool> {
        let label = self.geocoder.reverse_geocode(coordinates).await?;
        Ok(label.is_some_and(|label| label.to_lowercase().contains(&self.city_lowercase)))
    }
}

/// Resolves an address to coordinates and admits it only inside the city.
pub struct AdmissionGate {
    geocoder: Arc<dyn Geocoder>,
    policy: Arc<dyn GeoAdmissionPolicy>,
    city: String,
}

impl AdmissionGate {
    pub fn new(
        geocoder: Arc<dyn Geocoder>,
        policy: Arc<dyn GeoAdmissionPolicy>,
        city: impl Into<String>,
    ) -> Self {
        Self {
            geocoder,
            policy,
            city: city.into(),
        }
    }

    /// Gate backed by [`PlaceLabelPolicy`] over the same geocoder.
    pub fn with_place_label_policy(geocoder: Arc<dyn Geocoder>, city: impl Into<String>) -> Self {
        let city = city.into();
        let policy = Arc::new(PlaceLabelPolicy::new(geocoder.clone(), &city));
        Self::new(geocoder, policy, city)
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    /// Lookup text for `address` in this gate's city.
    pub fn format(&self, address: &Address) -> String {
        address.format(&self.city)
    }

    /// Admitted coordinates for `address`.
    ///
    /// # Errors
    /// - [`GeoError::AddressNotResolved`] when the provider has no candidate
    /// - [`GeoError::OutOfBounds`] when the policy rejects the location
    /// - [`GeoError::Unavailable`] when a provider call fails
    #[instrument(skip(self, address), fields(city = %self.city))]
    pub async fn admit(&self, address: &Address) -> GeoResult<Coordinates> {
        let result = self.resolve(&self.format(address)).await;

        let outcome = match &result {
            Ok(_) => AdmissionOutcome::Admitted,
            Err(GeoError::OutOfBounds { .. }) => AdmissionOutcome::OutOfBounds,
            Err(GeoError::AddressNotResolved) => AdmissionOutcome::NotResolved,
            Err(GeoError::Unavailable(_)) => AdmissionOutcome::Unavailable,
        };
        GeocodingMetrics::record_admission(outcome);

        match &result {
            Ok(coordinates) => info!(?coordinates, "Address admitted"),
            Err(GeoError::Unavailable(e)) => warn!("Admission aborted: {}", e),
            Err(e) => info!(outcome = outcome.as_str(), "Address rejected: {}", e),
        }
        result
    }

    async fn resolve(&self, lookup: &str) -> GeoResult<Coordinates> {
        let coordinates = self
            .geocoder
            .forward_geocode(lookup)
            .await?
            .ok_or(GeoError::AddressNotResolved)?;

        if self.policy.admits(coordinates).await? {
            Ok(coordinates)
        } else {
            Err(GeoError::OutOfBounds {
                city: self.city.clone(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MockGeocoder;
    use mockall::predicate::eq;

    const CITY: &str = "João Pessoa";

    fn tambau() -> Address {
        Address {
            street: "Avenida Epitácio Pessoa".to_string(),
            number: "1200".to_string(),
            neighborhood: "Tambaú".to_string(),
            complement: None,
        }
    }

    fn geocoder_with(forward: Option<Coordinates>, label: Option<&'static str>) -> MockGeocoder {
        let mut geocoder = MockGeocoder::new();
        geocoder
            .expect_forward_geocode()
            .with(eq("Avenida Epitácio Pessoa, 1200, Tambaú, João Pessoa"))
            .times(1)
            .returning(move |_| Ok(forward));
        geocoder
            .expect_reverse_geocode()
            .returning(move |_| Ok(label.map(str::to_string)));
        geocoder
    }

    #[tokio::test]
    async fn test_admits_when_label_contains_city_case_insensitive() {
        let point = Coordinates::new(-7.115, -34.823);
        let geocoder = geocoder_with(Some(point), Some("Tambaú, JOÃO PESSOA - Paraíba, Brasil"));
        let gate = AdmissionGate::with_place_label_policy(Arc::new(geocoder), CITY);

        assert_eq!(gate.admit(&tambau()).await, Ok(point));
    }

    #[tokio::test]
    async fn test_rejects_other_city() {
        let geocoder = geocoder_with(
            Some(Coordinates::new(-23.56, -46.65)),
            Some("Avenida Paulista, São Paulo - SP, Brasil"),
        );
        let gate = AdmissionGate::with_place_label_policy(Arc::new(geocoder), CITY);

        let err = gate.admit(&tambau()).await.unwrap_err();
        assert_eq!(
            err,
            GeoError::OutOfBounds {
                city: CITY.to_string()
            }
        );
        assert!(err.to_string().contains("fora dos limites"));
    }

    #[tokio::test]
    async fn test_missing_label_is_out_of_bounds() {
        let geocoder = geocoder_with(Some(Coordinates::new(0.0, 0.0)), None);
        let gate = AdmissionGate::with_place_label_policy(Arc::new(geocoder), CITY);

        assert!(matches!(
            gate.admit(&tambau()).await,
            Err(GeoError::OutOfBounds { .. })
        ));
    }

    #[tokio::test]
    async fn test_no_candidate_is_not_resolved_and_skips_policy() {
        let mut geocoder = MockGeocoder::new();
        geocoder.expect_forward_geocode().returning(|_| Ok(None));
        let mut policy = MockGeoAdmissionPolicy::new();
        policy.expect_admits().times(0);

        let gate = AdmissionGate::new(Arc::new(geocoder), Arc::new(policy), CITY);

        assert_eq!(
            gate.admit(&tambau()).await,
            Err(GeoError::AddressNotResolved)
        );
    }

    #[tokio::test]
    async fn test_provider_failure_propagates() {
        let mut geocoder = MockGeocoder::new();
        geocoder
            .expect_forward_geocode()
            .returning(|_| Err(GeoError::Unavailable("timeout".to_string())));
        let gate = AdmissionGate::with_place_label_policy(Arc::new(geocoder), CITY);

        assert!(matches!(
            gate.admit(&tambau()).await,
            Err(GeoError::Unavailable(_))
        ));
    }

    #[tokio::test]
    async fn test_custom_policy_replaces_label_check() {
        let point = Coordinates::new(-7.1, -34.8);
        let mut geocoder = MockGeocoder::new();
        geocoder.expect_forward_geocode().returning(move |_| Ok(Some(point)));
        geocoder.expect_reverse_geocode().times(0);
        let mut policy = MockGeoAdmissionPolicy::new();
        policy
            .expect_admits()
            .with(eq(point))
            .times(1)
            .returning(|_| Ok(true));

        let gate = AdmissionGate::new(Arc::new(geocoder), Arc::new(policy), CITY);

        assert_eq!(gate.admit(&tambau()).await, Ok(point));
    }
}
