use actix_web::{get, web, Responder};

use super::EditModeBody;
use crate::api::schemas::SuccessResponse;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Current edit-mode state
#[utoipa::path(
    get,
    path = "/api/edit-mode",
    tag = "edit-mode",
    responses(
        (status = 200, description = "Current flag", body = inline(SuccessResponse<EditModeBody>))
    )
)]
#[get("/api/edit-mode")]
pub async fn get_edit_mode_handler(data: web::Data<AppState>) -> impl Responder {
    let enabled = data.edit_mode.is_enabled().await;
    ApiResponse::success(EditModeBody { enabled })
}
