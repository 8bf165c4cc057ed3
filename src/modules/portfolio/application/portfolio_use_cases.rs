use std::sync::Arc;
use std::time::Duration;

use crate::modules::portfolio::application::ports::incoming::use_cases::{
    GetPortfolioUseCase, ManageEntryUseCase, ManageTagsUseCase, UpdateProfileUseCase,
};
use crate::modules::portfolio::application::ports::outgoing::PortfolioRepository;
use crate::modules::portfolio::application::service::{
    GetPortfolioService, ManageEntryService, ManageTagsService, UpdateProfileService,
};
use crate::modules::portfolio::domain::{Certification, Education, Experience, Project, Social};

#[derive(Clone)]
pub struct PortfolioUseCases {
    pub get_portfolio: Arc<dyn GetPortfolioUseCase + Send + Sync>,
    pub update_profile: Arc<dyn UpdateProfileUseCase + Send + Sync>,
    pub tags: Arc<dyn ManageTagsUseCase + Send + Sync>,
    pub education: Arc<dyn ManageEntryUseCase<Education> + Send + Sync>,
    pub experience: Arc<dyn ManageEntryUseCase<Experience> + Send + Sync>,
    pub certifications: Arc<dyn ManageEntryUseCase<Certification> + Send + Sync>,
    pub projects: Arc<dyn ManageEntryUseCase<Project> + Send + Sync>,
    pub socials: Arc<dyn ManageEntryUseCase<Social> + Send + Sync>,
}

impl PortfolioUseCases {
    /// Wires every portfolio use case to the same repository. `submit_delay`
    /// is waited out before each form submission touches the store.
    pub fn new<R>(repository: R, submit_delay: Duration) -> Self
    where
        R: PortfolioRepository + Clone + 'static,
    {
        Self {
            get_portfolio: Arc::new(GetPortfolioService::new(repository.clone())),
            update_profile: Arc::new(UpdateProfileService::new(
                repository.clone(),
                submit_delay,
            )),
            tags: Arc::new(ManageTagsService::new(repository.clone())),
            education: Arc::new(ManageEntryService::new(repository.clone(), submit_delay)),
            experience: Arc::new(ManageEntryService::new(repository.clone(), submit_delay)),
            certifications: Arc::new(ManageEntryService::new(repository.clone(), submit_delay)),
            projects: Arc::new(ManageEntryService::new(repository.clone(), submit_delay)),
            socials: Arc::new(ManageEntryService::new(repository, submit_delay)),
        }
    }
}
