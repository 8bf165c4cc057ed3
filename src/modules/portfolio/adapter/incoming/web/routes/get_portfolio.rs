use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::portfolio::application::ports::incoming::use_cases::GetPortfolioError;
use crate::modules::portfolio::domain::PortfolioData;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Whole portfolio
///
/// Profile, skills, technologies and every entry collection in display order.
#[utoipa::path(
    get,
    path = "/api/portfolio",
    tag = "portfolio",
    responses(
        (status = 200, description = "Current portfolio", body = inline(SuccessResponse<PortfolioData>)),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/portfolio")]
pub async fn get_portfolio_handler(data: web::Data<AppState>) -> impl Responder {
    match data.portfolio.get_portfolio.execute().await {
        Ok(portfolio) => ApiResponse::success(portfolio),
        Err(GetPortfolioError::RepositoryError(e)) => {
            error!("Failed to read portfolio: {}", e);
            ApiResponse::internal_error()
        }
    }
}
