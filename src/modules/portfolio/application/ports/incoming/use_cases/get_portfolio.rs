use async_trait::async_trait;

use crate::modules::portfolio::application::ports::outgoing::PortfolioRepositoryError;
use crate::modules::portfolio::domain::PortfolioData;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetPortfolioError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<PortfolioRepositoryError> for GetPortfolioError {
    fn from(err: PortfolioRepositoryError) -> Self {
        match err {
            PortfolioRepositoryError::StoreUnavailable(msg) => GetPortfolioError::RepositoryError(msg),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait GetPortfolioUseCase: Send + Sync {
    async fn execute(&self) -> Result<PortfolioData, GetPortfolioError>;
}
