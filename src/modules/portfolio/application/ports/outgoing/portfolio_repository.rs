use async_trait::async_trait;

use crate::modules::portfolio::domain::{Entry, EntityId, PortfolioData, Profile, ProfilePatch};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    Skills,
    Technologies,
}

impl TagKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TagKind::Skills => "skills",
            TagKind::Technologies => "technologies",
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum PortfolioRepositoryError {
    /// The backing store could not be reached.
    #[error("Portfolio store unavailable: {0}")]
    StoreUnavailable(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
// Every mutation is applied atomically and is visible to the
// next read. Update/delete on an unknown id is a no-op that
// reports `None`/`false`, never an error.
//

#[async_trait]
pub trait PortfolioRepository: Send + Sync {
    async fn snapshot(&self) -> Result<PortfolioData, PortfolioRepositoryError>;

    async fn update_profile(&self, patch: ProfilePatch)
        -> Result<Profile, PortfolioRepositoryError>;

    async fn add_tag(&self, kind: TagKind, value: String)
        -> Result<Vec<String>, PortfolioRepositoryError>;

    /// Removes every tag equal to `value`; returns the remaining list.
    async fn remove_tag(&self, kind: TagKind, value: &str)
        -> Result<Vec<String>, PortfolioRepositoryError>;

    async fn add_entry<T: Entry>(&self, draft: T::Draft) -> Result<T, PortfolioRepositoryError>;

    async fn update_entry<T: Entry>(
        &self,
        id: &EntityId,
        patch: T::Patch,
    ) -> Result<Option<T>, PortfolioRepositoryError>;

    async fn delete_entry<T: Entry>(&self, id: &EntityId) -> Result<bool, PortfolioRepositoryError>;
}
