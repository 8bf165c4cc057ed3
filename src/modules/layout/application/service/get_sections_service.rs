use async_trait::async_trait;

use crate::modules::layout::application::ports::incoming::use_cases::{
    GetSectionsError, GetSectionsUseCase,
};
use crate::modules::layout::application::ports::outgoing::SectionOrderRepository;
use crate::modules::layout::domain::SectionDescriptor;

pub struct GetSectionsService<R>
where
    R: SectionOrderRepository,
{
    repository: R,
}

impl<R> GetSectionsService<R>
where
    R: SectionOrderRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetSectionsUseCase for GetSectionsService<R>
where
    R: SectionOrderRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<SectionDescriptor>, GetSectionsError> {
        Ok(self.repository.sections().await?)
    }
}
