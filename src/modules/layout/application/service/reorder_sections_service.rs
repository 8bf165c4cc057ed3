use async_trait::async_trait;
use tracing::info;

use crate::modules::layout::application::ports::incoming::use_cases::{
    ReorderSectionsError, ReorderSectionsUseCase,
};
use crate::modules::layout::application::ports::outgoing::SectionOrderRepository;
use crate::modules::layout::domain::{ReorderError, SectionDescriptor};

pub struct ReorderSectionsService<R>
where
    R: SectionOrderRepository,
{
    repository: R,
}

impl<R> ReorderSectionsService<R>
where
    R: SectionOrderRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ReorderSectionsUseCase for ReorderSectionsService<R>
where
    R: SectionOrderRepository + Send + Sync,
{
    async fn execute(
        &self,
        from_index: usize,
        to_index: usize,
    ) -> Result<Vec<SectionDescriptor>, ReorderSectionsError> {
        // A drop onto the starting slot never reaches the store, but a bad
        // index is still reported.
        if from_index == to_index {
            let sections = self.repository.sections().await?;
            if from_index >= sections.len() {
                return Err(ReorderError::IndexOutOfRange {
                    from: from_index,
                    to: to_index,
                    len: sections.len(),
                }
                .into());
            }
            return Ok(sections);
        }

        let sections = self.repository.reorder(from_index, to_index).await?;
        info!(from_index, to_index, "Sections reordered");

        Ok(sections)
    }
}
