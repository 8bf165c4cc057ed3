use async_trait::async_trait;
use tracing::info;

use crate::modules::layout::application::ports::incoming::use_cases::{
    ReplaceSectionsError, ReplaceSectionsUseCase,
};
use crate::modules::layout::application::ports::outgoing::SectionOrderRepository;
use crate::modules::layout::domain::SectionDescriptor;

pub struct ReplaceSectionsService<R>
where
    R: SectionOrderRepository,
{
    repository: R,
}

impl<R> ReplaceSectionsService<R>
where
    R: SectionOrderRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ReplaceSectionsUseCase for ReplaceSectionsService<R>
where
    R: SectionOrderRepository + Send + Sync,
{
    async fn execute(
        &self,
        sections: Vec<SectionDescriptor>,
    ) -> Result<Vec<SectionDescriptor>, ReplaceSectionsError> {
        let stored = self.repository.replace(sections).await?;
        info!(count = stored.len(), "Sections replaced");

        Ok(stored)
    }
}
