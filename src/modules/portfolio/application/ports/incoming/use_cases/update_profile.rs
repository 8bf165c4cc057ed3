use async_trait::async_trait;

use crate::modules::portfolio::application::ports::outgoing::PortfolioRepositoryError;
use crate::modules::portfolio::domain::{Profile, ProfilePatch};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateProfileError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<PortfolioRepositoryError> for UpdateProfileError {
    fn from(err: PortfolioRepositoryError) -> Self {
        match err {
            PortfolioRepositoryError::StoreUnavailable(msg) => {
                UpdateProfileError::RepositoryError(msg)
            }
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait UpdateProfileUseCase: Send + Sync {
    /// Merges a validated profile form into the stored profile.
    async fn execute(&self, patch: ProfilePatch) -> Result<Profile, UpdateProfileError>;
}
