use async_trait::async_trait;

use crate::modules::portfolio::application::forms::FormSubmission;
use crate::modules::portfolio::application::ports::outgoing::PortfolioRepositoryError;
use crate::modules::portfolio::domain::{Entry, EntityId};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ManageEntryError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<PortfolioRepositoryError> for ManageEntryError {
    fn from(err: PortfolioRepositoryError) -> Self {
        match err {
            PortfolioRepositoryError::StoreUnavailable(msg) => ManageEntryError::RepositoryError(msg),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
// One instance per collection. Drafts arrive already validated.
//

#[async_trait]
pub trait ManageEntryUseCase<T: Entry>: Send + Sync {
    /// `Create` always yields `Some`; `Update` yields `None` when the id is
    /// not in the collection.
    async fn submit(
        &self,
        submission: FormSubmission<T::Draft>,
    ) -> Result<Option<T>, ManageEntryError>;

    async fn delete(&self, id: &EntityId) -> Result<bool, ManageEntryError>;
}
