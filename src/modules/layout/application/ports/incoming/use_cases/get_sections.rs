use async_trait::async_trait;

use crate::modules::layout::application::ports::outgoing::SectionOrderRepositoryError;
use crate::modules::layout::domain::SectionDescriptor;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSectionsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<SectionOrderRepositoryError> for GetSectionsError {
    fn from(err: SectionOrderRepositoryError) -> Self {
        GetSectionsError::RepositoryError(err.to_string())
    }
}

#[async_trait]
pub trait GetSectionsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<SectionDescriptor>, GetSectionsError>;
}
