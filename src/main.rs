pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

use std::sync::Arc;
use std::time::Duration;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::openapi::ApiDoc;
use crate::config::AppConfig;
use crate::modules::edit_mode::adapter::outgoing::AtomicEditModeStore;
use crate::modules::edit_mode::application::ports::incoming::use_cases::EditModeUseCase;
use crate::modules::edit_mode::application::service::EditModeService;
use crate::modules::layout::adapter::outgoing::InMemorySectionOrderRepository;
use crate::modules::layout::application::layout_use_cases::LayoutUseCases;
use crate::modules::portfolio::adapter::outgoing::InMemoryPortfolioRepository;
use crate::modules::portfolio::application::portfolio_use_cases::PortfolioUseCases;
use crate::shared::api::custom_json_config;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub portfolio: PortfolioUseCases,
    pub layout: LayoutUseCases,
    pub edit_mode: Arc<dyn EditModeUseCase + Send + Sync>,
}

impl AppState {
    /// Fresh stores for one process: the given portfolio, default section
    /// order and edit mode off.
    pub fn in_memory(portfolio: InMemoryPortfolioRepository, submit_delay: Duration) -> Self {
        Self {
            portfolio: PortfolioUseCases::new(portfolio, submit_delay),
            layout: LayoutUseCases::new(InMemorySectionOrderRepository::default()),
            edit_mode: Arc::new(EditModeService::new(AtomicEditModeStore::default())),
        }
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Try .env.{environment} first, then fall back to .env
    config::load_env_files();
    let config = AppConfig::from_env().context("Invalid configuration")?;

    let portfolio_repo = match &config.seed_path {
        Some(path) => {
            let repo = InMemoryPortfolioRepository::from_seed_file(path).with_context(|| {
                format!("Failed to load portfolio seed from {}", path.display())
            })?;
            info!(path = %path.display(), "Portfolio seeded");
            repo
        }
        None => InMemoryPortfolioRepository::default(),
    };

    let state = AppState::in_memory(portfolio_repo, config.submit_delay);

    let server_url = config.server_url();
    info!(
        url = %server_url,
        environment = %config.environment,
        submit_delay = ?config.submit_delay,
        "Server starting"
    );

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(custom_json_config())
            .configure(init_routes)
    })
    .bind(&server_url)
    .with_context(|| format!("Cannot bind {server_url}"))?
    .run()
    .await?;

    Ok(())
}

fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    // Portfolio
    cfg.service(crate::modules::portfolio::adapter::incoming::web::routes::get_portfolio_handler);
    cfg.service(crate::modules::portfolio::adapter::incoming::web::routes::update_profile_handler);
    cfg.service(crate::modules::portfolio::adapter::incoming::web::routes::add_skill_handler);
    cfg.service(crate::modules::portfolio::adapter::incoming::web::routes::remove_skill_handler);
    cfg.service(crate::modules::portfolio::adapter::incoming::web::routes::add_technology_handler);
    cfg.service(
        crate::modules::portfolio::adapter::incoming::web::routes::remove_technology_handler,
    );
    crate::modules::portfolio::adapter::incoming::web::routes::configure_entry_routes(cfg);
    // Sections
    cfg.service(crate::modules::layout::adapter::incoming::web::routes::get_sections_handler);
    cfg.service(crate::modules::layout::adapter::incoming::web::routes::reorder_sections_handler);
    cfg.service(crate::modules::layout::adapter::incoming::web::routes::replace_sections_handler);
    // Edit mode
    cfg.service(crate::modules::edit_mode::adapter::incoming::web::routes::get_edit_mode_handler);
    cfg.service(
        crate::modules::edit_mode::adapter::incoming::web::routes::toggle_edit_mode_handler,
    );
    cfg.service(crate::modules::edit_mode::adapter::incoming::web::routes::set_edit_mode_handler);
    // Docs
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    );
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}
