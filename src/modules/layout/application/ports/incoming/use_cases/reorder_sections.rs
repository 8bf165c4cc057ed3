use async_trait::async_trait;

use crate::modules::layout::application::ports::outgoing::SectionOrderRepositoryError;
use crate::modules::layout::domain::{ReorderError, SectionDescriptor};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReorderSectionsError {
    #[error(transparent)]
    OutOfRange(#[from] ReorderError),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<SectionOrderRepositoryError> for ReorderSectionsError {
    fn from(err: SectionOrderRepositoryError) -> Self {
        match err {
            SectionOrderRepositoryError::Reorder(e) => ReorderSectionsError::OutOfRange(e),
            // Not part of this use case contract; treat as repo-level failure.
            other @ SectionOrderRepositoryError::InvalidSections(_) => {
                ReorderSectionsError::RepositoryError(other.to_string())
            }
            SectionOrderRepositoryError::StoreUnavailable(msg) => {
                ReorderSectionsError::RepositoryError(msg)
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
pub trait ReorderSectionsUseCase: Send + Sync {
    async fn execute(
        &self,
        from_index: usize,
        to_index: usize,
    ) -> Result<Vec<SectionDescriptor>, ReorderSectionsError>;
}
