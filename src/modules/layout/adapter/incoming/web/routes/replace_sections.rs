use actix_web::{put, web, Responder};
use tracing::{error, warn};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::edit_mode::adapter::incoming::web::extractors::EditModeEnabled;
use crate::modules::layout::application::ports::incoming::use_cases::ReplaceSectionsError;
use crate::modules::layout::domain::SectionDescriptor;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Replace the whole section list
///
/// `order` values decide the sequence and are renumbered from zero.
#[utoipa::path(
    put,
    path = "/api/sections",
    tag = "sections",
    request_body = Vec<SectionDescriptor>,
    responses(
        (status = 200, description = "Stored sections", body = inline(SuccessResponse<Vec<SectionDescriptor>>)),
        (status = 400, description = "Repeated kind or id, or blank id", body = ErrorResponse),
        (status = 403, description = "Edit mode is off", body = ErrorResponse)
    )
)]
#[put("/api/sections")]
pub async fn replace_sections_handler(
    _guard: EditModeEnabled,
    req: web::Json<Vec<SectionDescriptor>>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.layout.replace.execute(req.into_inner()).await {
        Ok(sections) => ApiResponse::success(sections),

        Err(ReplaceSectionsError::Invalid(e)) => {
            warn!("Rejected section list: {}", e);
            ApiResponse::bad_request("INVALID_SECTIONS", &e.to_string())
        }

        Err(ReplaceSectionsError::RepositoryError(e)) => {
            error!("Repository error replacing sections: {}", e);
            ApiResponse::internal_error()
        }
    }
}
