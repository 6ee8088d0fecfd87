use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{OrganizerError, OrganizerResult};
use crate::models::{CreateEventOrganizer, EventOrganizer, UpdateEventOrganizer};
use crate::repository::EventOrganizerRepository;

#[derive(Clone)]
pub struct EventOrganizerService<R: EventOrganizerRepository> {
    repository: Arc<R>,
}

impl<R: EventOrganizerRepository> EventOrganizerService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    pub fn from_shared(repository: Arc<R>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self, input), fields(organizer_name = %input.organizer_name))]
    pub async fn create_organizer(
        &self,
        input: CreateEventOrganizer,
    ) -> OrganizerResult<EventOrganizer> {
        let input = input.normalized();
        input.validate()?;

        self.ensure_unique(&input.organizer_email, &input.organizer_cnpj, None)
            .await?;

        self.repository.create(EventOrganizer::new(input)).await
    }

    pub async fn get_organizer(&self, id: Uuid) -> OrganizerResult<EventOrganizer> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(OrganizerError::NotFound(id))
    }

    /// Resolve a client-supplied id to an existing organizer.
    pub async fn require_organizer_exists(&self, raw_id: &str) -> OrganizerResult<EventOrganizer> {
        let id = axum_helpers::parse_id(raw_id).map_err(OrganizerError::InvalidId)?;
        self.get_organizer(id).await
    }

    pub async fn list_organizers(&self) -> OrganizerResult<Vec<EventOrganizer>> {
        let organizers = self.repository.list().await?;
        if organizers.is_empty() {
            return Err(OrganizerError::Empty);
        }
        Ok(organizers)
    }

    #[instrument(skip(self, input))]
    pub async fn update_organizer(
        &self,
        id: Uuid,
        input: UpdateEventOrganizer,
    ) -> OrganizerResult<EventOrganizer> {
        let input = input.normalized();
        input.validate()?;

        let mut organizer = self.get_organizer(id).await?;
        let identity_changed = input.organizer_email.is_some() || input.organizer_cnpj.is_some();

        organizer.apply_update(input);

        if identity_changed {
            self.ensure_unique(
                &organizer.organizer_email,
                &organizer.organizer_cnpj,
                Some(id),
            )
            .await?;
        }

        self.repository.update(organizer).await
    }

    #[instrument(skip(self))]
    pub async fn delete_organizer(&self, id: Uuid) -> OrganizerResult<()> {
        if !self.repository.delete(id).await? {
            return Err(OrganizerError::NotFound(id));
        }
        Ok(())
    }

    async fn ensure_unique(
        &self,
        email: &str,
        cnpj: &str,
        excluding: Option<Uuid>,
    ) -> OrganizerResult<()> {
        match self
            .repository
            .find_by_email_or_cnpj(email, cnpj, excluding)
            .await?
        {
            Some(existing) => {
                tracing::debug!(existing_id = %existing.organizer_id, "Organizer e-mail or CNPJ taken");
                Err(OrganizerError::Duplicate)
            }
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockEventOrganizerRepository;
    use mockall::predicate;

    fn input() -> CreateEventOrganizer {
        CreateEventOrganizer {
            organizer_name: "Fundação Cultural".to_string(),
            organizer_email: "contato@funjope.pb.gov.br".to_string(),
            organizer_cnpj: "12.345.678/0001-90".to_string(),
            organizer_phone_number: None,
        }
    }

    #[tokio::test]
    async fn test_create_checks_normalized_keys() {
        let mut repo = MockEventOrganizerRepository::new();
        repo.expect_find_by_email_or_cnpj()
            .withf(|email, cnpj, excluding| {
                email == "contato@funjope.pb.gov.br"
                    && cnpj == "12345678000190"
                    && excluding.is_none()
            })
            .times(1)
            .returning(|_, _, _| Ok(None));
        repo.expect_create().times(1).returning(Ok);

        let service = EventOrganizerService::new(repo);
        let organizer = service.create_organizer(input()).await.unwrap();

        assert_eq!(organizer.organizer_cnpj, "12345678000190");
    }

    #[tokio::test]
    async fn test_create_conflicts_on_existing_key() {
        let mut repo = MockEventOrganizerRepository::new();
        repo.expect_find_by_email_or_cnpj()
            .returning(|_, _, _| Ok(Some(EventOrganizer::new(input().normalized()))));
        repo.expect_create().times(0);

        let service = EventOrganizerService::new(repo);
        let result = service.create_organizer(input()).await;

        assert!(matches!(result, Err(OrganizerError::Duplicate)));
    }

    #[tokio::test]
    async fn test_update_name_only_skips_uniqueness_check() {
        let existing = EventOrganizer::new(input().normalized());
        let id = existing.organizer_id;

        let mut repo = MockEventOrganizerRepository::new();
        repo.expect_get_by_id()
            .with(predicate::eq(id))
            .returning(move |_| Ok(Some(existing.clone())));
        repo.expect_find_by_email_or_cnpj().times(0);
        repo.expect_update().times(1).returning(Ok);

        let service = EventOrganizerService::new(repo);
        let updated = service
            .update_organizer(
                id,
                UpdateEventOrganizer {
                    organizer_name: Some("Funjope".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.organizer_name, "Funjope");
    }

    #[tokio::test]
    async fn test_update_email_excludes_self() {
        let existing = EventOrganizer::new(input().normalized());
        let id = existing.organizer_id;

        let mut repo = MockEventOrganizerRepository::new();
        repo.expect_get_by_id()
            .returning(move |_| Ok(Some(existing.clone())));
        repo.expect_find_by_email_or_cnpj()
            .withf(move |email, _, excluding| email == "novo@funjope.pb.gov.br" && *excluding == Some(id))
            .times(1)
            .returning(|_, _, _| Ok(None));
        repo.expect_update().times(1).returning(Ok);

        let service = EventOrganizerService::new(repo);
        let updated = service
            .update_organizer(
                id,
                UpdateEventOrganizer {
                    organizer_email: Some("Novo@Funjope.pb.gov.br".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.organizer_email, "novo@funjope.pb.gov.br");
    }

    #[tokio::test]
    async fn test_list_empty_is_an_error() {
        let mut repo = MockEventOrganizerRepository::new();
        repo.expect_list().returning(|| Ok(vec![]));

        let service = EventOrganizerService::new(repo);
        assert!(matches!(
            service.list_organizers().await,
            Err(OrganizerError::Empty)
        ));
    }

    #[tokio::test]
    async fn test_require_organizer_exists_rejects_blank_id() {
        let mut repo = MockEventOrganizerRepository::new();
        repo.expect_get_by_id().times(0);

        let service = EventOrganizerService::new(repo);
        let result = service.require_organizer_exists("  ").await;

        assert!(matches!(result, Err(OrganizerError::InvalidId(_))));
    }
}
