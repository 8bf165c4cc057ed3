use std::time::Duration;

use async_trait::async_trait;
use tracing::info;

use crate::modules::portfolio::application::ports::incoming::use_cases::{
    UpdateProfileError, UpdateProfileUseCase,
};
use crate::modules::portfolio::application::ports::outgoing::PortfolioRepository;
use crate::modules::portfolio::domain::{Profile, ProfilePatch};

pub struct UpdateProfileService<R>
where
    R: PortfolioRepository,
{
    repository: R,
    submit_delay: Duration,
}

impl<R> UpdateProfileService<R>
where
    R: PortfolioRepository,
{
    pub fn new(repository: R, submit_delay: Duration) -> Self {
        Self {
            repository,
            submit_delay,
        }
    }
}

#[async_trait]
impl<R> UpdateProfileUseCase for UpdateProfileService<R>
where
    R: PortfolioRepository + Send + Sync,
{
    async fn execute(&self, patch: ProfilePatch) -> Result<Profile, UpdateProfileError> {
        if !self.submit_delay.is_zero() {
            tokio::time::sleep(self.submit_delay).await;
        }

        let profile = self.repository.update_profile(patch).await?;
        info!(name = %profile.name, "Profile updated");

        Ok(profile)
    }
}
