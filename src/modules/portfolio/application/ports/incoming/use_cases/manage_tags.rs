use async_trait::async_trait;

use crate::modules::portfolio::application::ports::outgoing::{
    PortfolioRepositoryError, TagKind,
};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ManageTagsError {
    #[error("Value must not be empty")]
    EmptyValue,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<PortfolioRepositoryError> for ManageTagsError {
    fn from(err: PortfolioRepositoryError) -> Self {
        match err {
            PortfolioRepositoryError::StoreUnavailable(msg) => ManageTagsError::RepositoryError(msg),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
// Both operations return the list as it is after the change.
//

#[async_trait]
pub trait ManageTagsUseCase: Send + Sync {
    /// Appends the trimmed value. Duplicates are kept.
    async fn add(&self, kind: TagKind, value: String) -> Result<Vec<String>, ManageTagsError>;

    /// Removes every entry equal to `value`.
    async fn remove(&self, kind: TagKind, value: String) -> Result<Vec<String>, ManageTagsError>;
}
