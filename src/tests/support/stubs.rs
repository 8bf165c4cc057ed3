use async_trait::async_trait;

use crate::modules::portfolio::application::ports::outgoing::{
    PortfolioRepository, PortfolioRepositoryError, TagKind,
};
use crate::modules::portfolio::domain::{Entry, EntityId, PortfolioData, Profile, ProfilePatch};

/// A portfolio store whose every call fails, for exercising 500 paths.
#[derive(Clone, Copy, Default)]
pub struct UnavailablePortfolioRepository;

fn unavailable() -> PortfolioRepositoryError {
    PortfolioRepositoryError::StoreUnavailable("store unreachable".to_string())
}

#[async_trait]
impl PortfolioRepository for UnavailablePortfolioRepository {
    async fn snapshot(&self) -> Result<PortfolioData, PortfolioRepositoryError> {
        Err(unavailable())
    }

    async fn update_profile(
        &self,
        _patch: ProfilePatch,
    ) -> Result<Profile, PortfolioRepositoryError> {
        Err(unavailable())
    }

    async fn add_tag(
        &self,
        _kind: TagKind,
        _value: String,
    ) -> Result<Vec<String>, PortfolioRepositoryError> {
        Err(unavailable())
    }

    async fn remove_tag(
        &self,
        _kind: TagKind,
        _value: &str,
    ) -> Result<Vec<String>, PortfolioRepositoryError> {
        Err(unavailable())
    }

    async fn add_entry<T: Entry>(&self, _draft: T::Draft) -> Result<T, PortfolioRepositoryError> {
        Err(unavailable())
    }

    async fn update_entry<T: Entry>(
        &self,
        _id: &EntityId,
        _patch: T::Patch,
    ) -> Result<Option<T>, PortfolioRepositoryError> {
        Err(unavailable())
    }

    async fn delete_entry<T: Entry>(
        &self,
        _id: &EntityId,
    ) -> Result<bool, PortfolioRepositoryError> {
        Err(unavailable())
    }
}
