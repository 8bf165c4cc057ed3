use async_trait::async_trait;
use tracing::info;

use crate::modules::portfolio::application::ports::incoming::use_cases::{
    ManageTagsError, ManageTagsUseCase,
};
use crate::modules::portfolio::application::ports::outgoing::{PortfolioRepository, TagKind};

pub struct ManageTagsService<R>
where
    R: PortfolioRepository,
{
    repository: R,
}

impl<R> ManageTagsService<R>
where
    R: PortfolioRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ManageTagsUseCase for ManageTagsService<R>
where
    R: PortfolioRepository + Send + Sync,
{
    async fn add(&self, kind: TagKind, value: String) -> Result<Vec<String>, ManageTagsError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(ManageTagsError::EmptyValue);
        }

        let tags = self.repository.add_tag(kind, value.to_string()).await?;
        info!(list = kind.as_str(), value, "Tag added");

        Ok(tags)
    }

    async fn remove(&self, kind: TagKind, value: String) -> Result<Vec<String>, ManageTagsError> {
        if value.is_empty() {
            return Err(ManageTagsError::EmptyValue);
        }

        let tags = self.repository.remove_tag(kind, &value).await?;
        info!(list = kind.as_str(), value = %value, "Tag removed");

        Ok(tags)
    }
}
