use async_trait::async_trait;

use crate::modules::layout::application::ports::outgoing::SectionOrderRepositoryError;
use crate::modules::layout::domain::{SectionDescriptor, SetSectionsError};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReplaceSectionsError {
    #[error(transparent)]
    Invalid(#[from] SetSectionsError),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<SectionOrderRepositoryError> for ReplaceSectionsError {
    fn from(err: SectionOrderRepositoryError) -> Self {
        match err {
            SectionOrderRepositoryError::InvalidSections(e) => ReplaceSectionsError::Invalid(e),
            other @ SectionOrderRepositoryError::Reorder(_) => {
                ReplaceSectionsError::RepositoryError(other.to_string())
            }
            SectionOrderRepositoryError::StoreUnavailable(msg) => {
                ReplaceSectionsError::RepositoryError(msg)
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
pub trait ReplaceSectionsUseCase: Send + Sync {
    async fn execute(
        &self,
        sections: Vec<SectionDescriptor>,
    ) -> Result<Vec<SectionDescriptor>, ReplaceSectionsError>;
}
