use chrono::Utc;
use geolocation::AdmissionGate;
use std::sync::Arc;
use tracing::{debug, instrument};
use uuid::Uuid;
use validator::Validate;

use crate::error::{EventError, EventResult};
use crate::models::{CreateEvent, Event, UpdateEvent, check_schedule};
use crate::references::ReferenceValidator;
use crate::repository::EventRepository;

/// Event admission pipeline and the remaining event operations.
#[derive(Clone)]
pub struct EventService<R: EventRepository> {
    repository: Arc<R>,
    references: Arc<dyn ReferenceValidator>,
    gate: Arc<AdmissionGate>,
}

impl<R: EventRepository> EventService<R> {
    pub fn new(
        repository: R,
        references: Arc<dyn ReferenceValidator>,
        gate: Arc<AdmissionGate>,
    ) -> Self {
        Self {
            repository: Arc::new(repository),
            references,
            gate,
        }
    }

    /// Admit and store a new event.
    ///
    /// Shape, organizer and category checks run concurrently and the first
    /// failure is returned. The address goes through the admission gate only
    /// after all three pass, so no row is written for an inadmissible address.
    #[instrument(skip(self, input), fields(event_title = %input.event_title))]
    pub async fn create_event(&self, input: CreateEvent) -> EventResult<Event> {
        let input = input.normalized();
        let now = Utc::now();

        let shape = async { input.check(now).map_err(EventError::from) };
        let ((), organizer_id, category_id) = tokio::try_join!(
            shape,
            self.references.require_organizer(&input.event_organizer_id),
            self.references.require_category(&input.event_category_id),
        )?;

        let coordinates = self.gate.admit(&input.address()).await?;

        self.repository
            .create(Event::new(input, coordinates, category_id, organizer_id))
            .await
    }

    pub async fn get_event(&self, id: Uuid) -> EventResult<Event> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(EventError::NotFound(id))
    }

    /// All events by title; an empty store is an error
    pub async fn list_events(&self) -> EventResult<Vec<Event>> {
        let events = self.repository.list().await?;
        if events.is_empty() {
            return Err(EventError::Empty);
        }
        Ok(events)
    }

    /// Apply a sparse update.
    ///
    /// The address is re-admitted only when its formatted lookup text
    /// changes; otherwise the stored coordinates are kept and the provider
    /// is not called.
    #[instrument(skip(self, input))]
    pub async fn update_event(&self, id: Uuid, input: UpdateEvent) -> EventResult<Event> {
        let mut event = self.get_event(id).await?;

        let input = input.normalized();
        input.validate()?;

        let category = async {
            match input.event_category_id.as_deref() {
                Some(raw) => self.references.require_category(raw).await.map(Some),
                None => Ok(None),
            }
        };
        let organizer = async {
            match input.event_organizer_id.as_deref() {
                Some(raw) => self.references.require_organizer(raw).await.map(Some),
                None => Ok(None),
            }
        };
        let (category_id, organizer_id) = tokio::try_join!(category, organizer)?;

        let current = event.address();
        let candidate = input.address_over(&current);
        let address_changed = self.gate.format(&candidate) != self.gate.format(&current);

        event.apply_update(&input);
        check_schedule(
            event.start_date_time,
            event.end_date_time,
            input.start_date_time.map(|_| Utc::now()),
        )?;

        if address_changed {
            let coordinates = self.gate.admit(&candidate).await?;
            event.set_address(candidate, coordinates);
        } else {
            debug!(event_id = %id, "Address unchanged, keeping coordinates");
        }

        if let Some(category_id) = category_id {
            event.event_category_id = category_id;
        }
        if let Some(organizer_id) = organizer_id {
            event.event_organizer_id = organizer_id;
        }

        self.repository.update(event).await
    }

    #[instrument(skip(self))]
    pub async fn delete_event(&self, id: Uuid) -> EventResult<()> {
        if !self.repository.delete(id).await? {
            return Err(EventError::NotFound(id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AccessibilityLevel;
    use crate::references::MockReferenceValidator;
    use crate::repository::MockEventRepository;
    use async_trait::async_trait;
    use chrono::Duration;
    use domain_event_categories::CategoryError;
    use geolocation::{Coordinates, GeoError, GeoResult, Geocoder};
    use mockall::predicate;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const PAULISTA: Coordinates = Coordinates {
        latitude: -23.5614,
        longitude: -46.6559,
    };
    const TAMBAU: Coordinates = Coordinates {
        latitude: -7.1153,
        longitude: -34.8228,
    };

    /// Knows one address in São Paulo and one in João Pessoa.
    #[derive(Default)]
    struct ScriptedGeocoder {
        unavailable: bool,
        forward_calls: AtomicUsize,
    }

    impl ScriptedGeocoder {
        fn calls(&self) -> usize {
            self.forward_calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Geocoder for ScriptedGeocoder {
        async fn forward_geocode(&self, address: &str) -> GeoResult<Option<Coordinates>> {
            self.forward_calls.fetch_add(1, Ordering::SeqCst);
            if self.unavailable {
                return Err(GeoError::Unavailable("connection refused".to_string()));
            }
            if address.contains("Avenida Paulista") {
                Ok(Some(PAULISTA))
            } else if address.contains("Epitácio Pessoa") {
                Ok(Some(TAMBAU))
            } else {
                Ok(None)
            }
        }

        async fn reverse_geocode(&self, coordinates: Coordinates) -> GeoResult<Option<String>> {
            let label = if coordinates == PAULISTA {
                "Avenida Paulista, Bela Vista, São Paulo - São Paulo, Brazil"
            } else {
                "Avenida Epitácio Pessoa, Tambaú, João Pessoa - Paraíba, Brazil"
            };
            Ok(Some(label.to_string()))
        }
    }

    fn gate(geocoder: Arc<ScriptedGeocoder>) -> Arc<AdmissionGate> {
        Arc::new(AdmissionGate::with_place_label_policy(geocoder, "João Pessoa"))
    }

    fn references() -> MockReferenceValidator {
        let mut references = MockReferenceValidator::new();
        references
            .expect_require_category()
            .returning(|raw| Ok(Uuid::parse_str(raw).unwrap()));
        references
            .expect_require_organizer()
            .returning(|raw| Ok(Uuid::parse_str(raw).unwrap()));
        references
    }

    fn input(street: &str) -> CreateEvent {
        CreateEvent {
            event_title: "Sunset Tambaú".to_string(),
            event_description: Some("Música ao vivo na orla".to_string()),
            event_link: None,
            event_price: 25.5,
            event_address_street: street.to_string(),
            event_address_number: "1200".to_string(),
            event_address_neighborhood: "Tambaú".to_string(),
            event_address_complement: None,
            event_accessibility_level: Some(AccessibilityLevel::AcessibilidadeBasica),
            start_date_time: Utc::now() + Duration::days(3),
            end_date_time: None,
            event_category_id: Uuid::new_v4().to_string(),
            event_organizer_id: Uuid::new_v4().to_string(),
        }
    }

    fn stored_event() -> Event {
        let input = input("Avenida Epitácio Pessoa");
        let category_id = Uuid::parse_str(&input.event_category_id).unwrap();
        let organizer_id = Uuid::parse_str(&input.event_organizer_id).unwrap();
        Event::new(input, TAMBAU, category_id, organizer_id)
    }

    #[tokio::test]
    async fn test_create_in_city_event() {
        let geocoder = Arc::new(ScriptedGeocoder::default());
        let mut repo = MockEventRepository::new();
        repo.expect_create().times(1).returning(Ok);

        let service = EventService::new(repo, Arc::new(references()), gate(geocoder.clone()));
        let event = service
            .create_event(input("Avenida Epitácio Pessoa"))
            .await
            .unwrap();

        assert_eq!(event.coordinates(), TAMBAU);
        assert_eq!(geocoder.calls(), 1);
    }

    #[tokio::test]
    async fn test_create_out_of_city_is_never_written() {
        let mut repo = MockEventRepository::new();
        repo.expect_create().times(0);

        let service = EventService::new(
            repo,
            Arc::new(references()),
            gate(Arc::new(ScriptedGeocoder::default())),
        );
        let result = service.create_event(input("Avenida Paulista")).await;

        assert!(matches!(
            result,
            Err(EventError::Geo(GeoError::OutOfBounds { .. }))
        ));
    }

    #[tokio::test]
    async fn test_create_unknown_address_is_not_resolved() {
        let mut repo = MockEventRepository::new();
        repo.expect_create().times(0);

        let service = EventService::new(
            repo,
            Arc::new(references()),
            gate(Arc::new(ScriptedGeocoder::default())),
        );
        let result = service.create_event(input("Rua Inexistente do Nada")).await;

        assert!(matches!(
            result,
            Err(EventError::Geo(GeoError::AddressNotResolved))
        ));
    }

    #[tokio::test]
    async fn test_create_missing_category_skips_geocoding() {
        let geocoder = Arc::new(ScriptedGeocoder::default());
        let mut references = MockReferenceValidator::new();
        references
            .expect_require_category()
            .returning(|_| Err(CategoryError::NotFound(Uuid::nil()).into()));
        references
            .expect_require_organizer()
            .returning(|raw| Ok(Uuid::parse_str(raw).unwrap()));
        let mut repo = MockEventRepository::new();
        repo.expect_create().times(0);

        let service = EventService::new(repo, Arc::new(references), gate(geocoder.clone()));
        let result = service.create_event(input("Avenida Epitácio Pessoa")).await;

        assert!(matches!(
            result,
            Err(EventError::Category(CategoryError::NotFound(_)))
        ));
        assert_eq!(geocoder.calls(), 0);
    }

    #[tokio::test]
    async fn test_create_invalid_shape_skips_geocoding() {
        let geocoder = Arc::new(ScriptedGeocoder::default());
        let service = EventService::new(
            MockEventRepository::new(),
            Arc::new(references()),
            gate(geocoder.clone()),
        );

        let result = service
            .create_event(CreateEvent {
                event_title: "ab".to_string(),
                ..input("Avenida Epitácio Pessoa")
            })
            .await;

        assert!(matches!(result, Err(EventError::Validation(_))));
        assert_eq!(geocoder.calls(), 0);
    }

    #[tokio::test]
    async fn test_create_provider_failure_is_unavailable() {
        let geocoder = Arc::new(ScriptedGeocoder {
            unavailable: true,
            ..Default::default()
        });
        let mut repo = MockEventRepository::new();
        repo.expect_create().times(0);

        let service = EventService::new(repo, Arc::new(references()), gate(geocoder));
        let result = service.create_event(input("Avenida Epitácio Pessoa")).await;

        assert!(matches!(result, Err(EventError::Geo(GeoError::Unavailable(_)))));
    }

    #[tokio::test]
    async fn test_title_only_update_keeps_coordinates_without_geocoding() {
        let geocoder = Arc::new(ScriptedGeocoder::default());
        let stored = stored_event();
        let id = stored.event_id;

        let mut repo = MockEventRepository::new();
        repo.expect_get_by_id()
            .with(predicate::eq(id))
            .returning(move |_| Ok(Some(stored.clone())));
        repo.expect_update().times(1).returning(Ok);

        let mut references = MockReferenceValidator::new();
        references.expect_require_category().times(0);
        references.expect_require_organizer().times(0);

        let service = EventService::new(repo, Arc::new(references), gate(geocoder.clone()));
        let updated = service
            .update_event(
                id,
                UpdateEvent {
                    event_title: Some("Sunset Tambaú Especial".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.event_title, "Sunset Tambaú Especial");
        assert_eq!(updated.coordinates(), TAMBAU);
        assert_eq!(geocoder.calls(), 0);
    }

    #[tokio::test]
    async fn test_resending_same_address_does_not_geocode() {
        let geocoder = Arc::new(ScriptedGeocoder::default());
        let stored = stored_event();
        let id = stored.event_id;

        let mut repo = MockEventRepository::new();
        repo.expect_get_by_id()
            .returning(move |_| Ok(Some(stored.clone())));
        repo.expect_update().returning(Ok);

        let service = EventService::new(repo, Arc::new(references()), gate(geocoder.clone()));
        service
            .update_event(
                id,
                UpdateEvent {
                    event_address_street: Some(" Avenida Epitácio Pessoa ".to_string()),
                    event_address_number: Some("1200".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(geocoder.calls(), 0);
    }

    #[tokio::test]
    async fn test_moving_out_of_city_is_rejected() {
        let geocoder = Arc::new(ScriptedGeocoder::default());
        let stored = stored_event();
        let id = stored.event_id;

        let mut repo = MockEventRepository::new();
        repo.expect_get_by_id()
            .returning(move |_| Ok(Some(stored.clone())));
        repo.expect_update().times(0);

        let service = EventService::new(repo, Arc::new(references()), gate(geocoder.clone()));
        let result = service
            .update_event(
                id,
                UpdateEvent {
                    event_address_street: Some("Avenida Paulista".to_string()),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(
            result,
            Err(EventError::Geo(GeoError::OutOfBounds { .. }))
        ));
        assert_eq!(geocoder.calls(), 1);
    }

    #[tokio::test]
    async fn test_update_applies_zero_price_and_clears_description() {
        let stored = stored_event();
        let id = stored.event_id;

        let mut repo = MockEventRepository::new();
        repo.expect_get_by_id()
            .returning(move |_| Ok(Some(stored.clone())));
        repo.expect_update().returning(Ok);

        let service = EventService::new(
            repo,
            Arc::new(references()),
            gate(Arc::new(ScriptedGeocoder::default())),
        );
        let updated = service
            .update_event(
                id,
                UpdateEvent {
                    event_price: Some(0.0),
                    event_description: Some(None),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.event_price, 0.0);
        assert_eq!(updated.event_description, None);
    }

    #[tokio::test]
    async fn test_update_end_before_stored_start_is_rejected() {
        let stored = stored_event();
        let id = stored.event_id;
        let end = stored.start_date_time - Duration::hours(1);

        let mut repo = MockEventRepository::new();
        repo.expect_get_by_id()
            .returning(move |_| Ok(Some(stored.clone())));
        repo.expect_update().times(0);

        let service = EventService::new(
            repo,
            Arc::new(references()),
            gate(Arc::new(ScriptedGeocoder::default())),
        );
        let result = service
            .update_event(
                id,
                UpdateEvent {
                    end_date_time: Some(Some(end)),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(result, Err(EventError::Validation(_))));
    }

    #[tokio::test]
    async fn test_update_missing_event_is_not_found() {
        let mut repo = MockEventRepository::new();
        repo.expect_get_by_id().returning(|_| Ok(None));

        let service = EventService::new(
            repo,
            Arc::new(references()),
            gate(Arc::new(ScriptedGeocoder::default())),
        );
        let result = service
            .update_event(Uuid::new_v4(), UpdateEvent::default())
            .await;

        assert!(matches!(result, Err(EventError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_list_empty_is_an_error() {
        let mut repo = MockEventRepository::new();
        repo.expect_list().returning(|| Ok(vec![]));

        let service = EventService::new(
            repo,
            Arc::new(references()),
            gate(Arc::new(ScriptedGeocoder::default())),
        );

        assert!(matches!(service.list_events().await, Err(EventError::Empty)));
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let mut repo = MockEventRepository::new();
        repo.expect_delete().returning(|_| Ok(false));

        let service = EventService::new(
            repo,
            Arc::new(references()),
            gate(Arc::new(ScriptedGeocoder::default())),
        );

        assert!(matches!(
            service.delete_event(Uuid::new_v4()).await,
            Err(EventError::NotFound(_))
        ));
    }
}
