use std::marker::PhantomData;
use std::time::Duration;

use async_trait::async_trait;
use tracing::info;

use crate::modules::portfolio::application::forms::FormSubmission;
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    ManageEntryError, ManageEntryUseCase,
};
use crate::modules::portfolio::application::ports::outgoing::PortfolioRepository;
use crate::modules::portfolio::domain::{Entry, EntityId};

/// Create/update/delete for one collection, selected by `T`.
pub struct ManageEntryService<R, T>
where
    R: PortfolioRepository,
{
    repository: R,
    submit_delay: Duration,
    _entry: PhantomData<fn() -> T>,
}

impl<R, T> ManageEntryService<R, T>
where
    R: PortfolioRepository,
    T: Entry,
{
    pub fn new(repository: R, submit_delay: Duration) -> Self {
        Self {
            repository,
            submit_delay,
            _entry: PhantomData,
        }
    }
}

#[async_trait]
impl<R, T> ManageEntryUseCase<T> for ManageEntryService<R, T>
where
    R: PortfolioRepository + Send + Sync,
    T: Entry,
{
    async fn submit(
        &self,
        submission: FormSubmission<T::Draft>,
    ) -> Result<Option<T>, ManageEntryError> {
        if !self.submit_delay.is_zero() {
            tokio::time::sleep(self.submit_delay).await;
        }

        match submission {
            FormSubmission::Create(draft) => {
                let entry = self.repository.add_entry::<T>(draft).await?;
                info!(kind = T::KIND.as_str(), id = %entry.id(), "Entry created");
                Ok(Some(entry))
            }
            FormSubmission::Update(id, draft) => {
                let updated = self
                    .repository
                    .update_entry::<T>(&id, T::Patch::from(draft))
                    .await?;
                match &updated {
                    Some(_) => info!(kind = T::KIND.as_str(), id = %id, "Entry updated"),
                    None => info!(kind = T::KIND.as_str(), id = %id, "Update skipped, no such entry"),
                }
                Ok(updated)
            }
        }
    }

    async fn delete(&self, id: &EntityId) -> Result<bool, ManageEntryError> {
        let removed = self.repository.delete_entry::<T>(id).await?;
        info!(kind = T::KIND.as_str(), id = %id, removed, "Entry delete requested");

        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::portfolio::adapter::outgoing::InMemoryPortfolioRepository;
    use crate::modules::portfolio::domain::{
        Certification, CertificationDraft, Experience, ExperienceDraft,
    };
    use crate::tests::support::stubs::UnavailablePortfolioRepository;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn experience_draft() -> ExperienceDraft {
        ExperienceDraft {
            role: "Backend Engineer".to_string(),
            company: "Acme".to_string(),
            start_date: date(2020, 1, 1),
            end_date: Some(date(2022, 6, 1)),
            is_current_role: false,
            location: Some("Remote".to_string()),
            description: None,
        }
    }

    fn experience_service(
        repo: &InMemoryPortfolioRepository,
    ) -> ManageEntryService<InMemoryPortfolioRepository, Experience> {
        ManageEntryService::new(repo.clone(), Duration::ZERO)
    }

    #[tokio::test]
    async fn create_appends_with_derived_period() {
        let repo = InMemoryPortfolioRepository::default();
        let service = experience_service(&repo);

        let created = service
            .submit(FormSubmission::Create(experience_draft()))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(created.period(), "2020 - 2022");
        assert_eq!(repo.snapshot().await.unwrap().experience.items(), [created]);
    }

    #[tokio::test]
    async fn update_replaces_submitted_fields_and_clears_emptied_ones() {
        let repo = InMemoryPortfolioRepository::default();
        let service = experience_service(&repo);
        let created = service
            .submit(FormSubmission::Create(experience_draft()))
            .await
            .unwrap()
            .unwrap();

        let updated = service
            .submit(FormSubmission::Update(
                created.id.clone(),
                ExperienceDraft {
                    end_date: None,
                    is_current_role: true,
                    location: None,
                    ..experience_draft()
                },
            ))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.period(), "2020 - Present");
        assert!(updated.location.is_none());
    }

    #[tokio::test]
    async fn update_of_missing_entry_is_a_no_op() {
        let repo = InMemoryPortfolioRepository::default();
        let service = experience_service(&repo);

        let result = service
            .submit(FormSubmission::Update(
                EntityId::from("missing"),
                experience_draft(),
            ))
            .await
            .unwrap();

        assert!(result.is_none());
        assert!(repo.snapshot().await.unwrap().experience.is_empty());
    }

    #[tokio::test]
    async fn delete_reports_whether_anything_was_removed() {
        let repo = InMemoryPortfolioRepository::default();
        let service: ManageEntryService<_, Certification> =
            ManageEntryService::new(repo.clone(), Duration::ZERO);
        let created = service
            .submit(FormSubmission::Create(CertificationDraft {
                title: "CKA".to_string(),
                issuer: "CNCF".to_string(),
                earned: false,
                date_earned: None,
                expiry_date: None,
                credential_id: None,
                url: None,
            }))
            .await
            .unwrap()
            .unwrap();

        assert!(service.delete(&created.id).await.unwrap());
        assert!(!service.delete(&created.id).await.unwrap());
    }

    #[tokio::test(start_paused = true)]
    async fn submit_waits_for_the_configured_delay() {
        let service: ManageEntryService<_, Experience> = ManageEntryService::new(
            InMemoryPortfolioRepository::default(),
            Duration::from_millis(500),
        );
        let started = tokio::time::Instant::now();

        service
            .submit(FormSubmission::Create(experience_draft()))
            .await
            .unwrap();

        assert!(started.elapsed() >= Duration::from_millis(500));
    }

    #[tokio::test]
    async fn maps_store_failure() {
        let service: ManageEntryService<_, Experience> =
            ManageEntryService::new(UnavailablePortfolioRepository, Duration::ZERO);

        let err = service.delete(&EntityId::from("any")).await.unwrap_err();

        assert!(matches!(err, ManageEntryError::RepositoryError(_)));
    }
}
