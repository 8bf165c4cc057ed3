use async_trait::async_trait;

use crate::modules::portfolio::application::ports::incoming::use_cases::{
    GetPortfolioError, GetPortfolioUseCase,
};
use crate::modules::portfolio::application::ports::outgoing::PortfolioRepository;
use crate::modules::portfolio::domain::PortfolioData;

pub struct GetPortfolioService<R>
where
    R: PortfolioRepository,
{
    repository: R,
}

impl<R> GetPortfolioService<R>
where
    R: PortfolioRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetPortfolioUseCase for GetPortfolioService<R>
where
    R: PortfolioRepository + Send + Sync,
{
    async fn execute(&self) -> Result<PortfolioData, GetPortfolioError> {
        Ok(self.repository.snapshot().await?)
    }
}
