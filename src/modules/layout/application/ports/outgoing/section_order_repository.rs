use async_trait::async_trait;

use crate::modules::layout::domain::{ReorderError, SectionDescriptor, SetSectionsError};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SectionOrderRepositoryError {
    #[error(transparent)]
    Reorder(#[from] ReorderError),

    #[error(transparent)]
    InvalidSections(#[from] SetSectionsError),

    #[error("Section store unavailable: {0}")]
    StoreUnavailable(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
// Mutations return the sections in render order as stored
// after the change.
//

#[async_trait]
pub trait SectionOrderRepository: Send + Sync {
    async fn sections(&self) -> Result<Vec<SectionDescriptor>, SectionOrderRepositoryError>;

    async fn reorder(
        &self,
        from_index: usize,
        to_index: usize,
    ) -> Result<Vec<SectionDescriptor>, SectionOrderRepositoryError>;

    async fn replace(
        &self,
        sections: Vec<SectionDescriptor>,
    ) -> Result<Vec<SectionDescriptor>, SectionOrderRepositoryError>;
}
