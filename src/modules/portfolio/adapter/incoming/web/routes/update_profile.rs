use actix_web::{put, web, Responder};
use tracing::{error, warn};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::edit_mode::adapter::incoming::web::extractors::EditModeEnabled;
use crate::modules::portfolio::application::forms::ProfileForm;
use crate::modules::portfolio::application::ports::incoming::use_cases::UpdateProfileError;
use crate::modules::portfolio::domain::Profile;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Submit the profile form
///
/// Optional fields left empty are cleared; an empty avatar keeps the
/// current one.
#[utoipa::path(
    put,
    path = "/api/profile",
    tag = "portfolio",
    request_body = ProfileForm,
    responses(
        (status = 200, description = "Updated profile", body = inline(SuccessResponse<Profile>)),
        (
            status = 422,
            description = "Field validation failed",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "VALIDATION_FAILED",
                    "message": "One or more fields are invalid",
                    "fields": { "name": "Name is required" }
                }
            })
        ),
        (status = 403, description = "Edit mode is off", body = ErrorResponse)
    )
)]
#[put("/api/profile")]
pub async fn update_profile_handler(
    _guard: EditModeEnabled,
    req: web::Json<ProfileForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    let patch = match req.into_inner().submit() {
        Ok(patch) => patch,
        Err(fields) => {
            warn!("Rejected profile form: {}", fields);
            return ApiResponse::validation_failed(fields.into_map());
        }
    };

    match data.portfolio.update_profile.execute(patch).await {
        Ok(profile) => ApiResponse::success(profile),

        Err(UpdateProfileError::RepositoryError(e)) => {
            error!("Repository error updating profile: {}", e);
            ApiResponse::internal_error()
        }
    }
}
