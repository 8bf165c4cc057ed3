use std::sync::Arc;
use std::time::Duration;

use actix_web::web;

use crate::modules::edit_mode::adapter::outgoing::AtomicEditModeStore;
use crate::modules::edit_mode::application::service::EditModeService;
use crate::modules::layout::adapter::outgoing::InMemorySectionOrderRepository;
use crate::modules::layout::application::layout_use_cases::LayoutUseCases;
use crate::modules::portfolio::adapter::outgoing::InMemoryPortfolioRepository;
use crate::modules::portfolio::application::portfolio_use_cases::PortfolioUseCases;
use crate::modules::portfolio::application::ports::outgoing::PortfolioRepository;
use crate::modules::portfolio::domain::PortfolioData;
use crate::AppState;

/// Builds an `AppState` backed by fresh in-memory stores. Edit mode is on
/// unless a test turns it off.
pub struct TestAppStateBuilder {
    portfolio: Option<PortfolioUseCases>,
    portfolio_data: PortfolioData,
    edit_mode: bool,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            portfolio: None,
            portfolio_data: PortfolioData::default(),
            edit_mode: true,
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_edit_mode(mut self, enabled: bool) -> Self {
        self.edit_mode = enabled;
        self
    }

    pub fn with_portfolio(mut self, data: PortfolioData) -> Self {
        self.portfolio_data = data;
        self
    }

    pub fn with_portfolio_repository(
        mut self,
        repository: impl PortfolioRepository + Clone + 'static,
    ) -> Self {
        self.portfolio = Some(PortfolioUseCases::new(repository, Duration::ZERO));
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        let portfolio = self.portfolio.unwrap_or_else(|| {
            PortfolioUseCases::new(
                InMemoryPortfolioRepository::new(self.portfolio_data),
                Duration::ZERO,
            )
        });
        web::Data::new(AppState {
            portfolio,
            layout: LayoutUseCases::new(InMemorySectionOrderRepository::default()),
            edit_mode: Arc::new(EditModeService::new(AtomicEditModeStore::new(self.edit_mode))),
        })
    }
}
