use actix_web::{put, web, Responder};

use super::EditModeBody;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Set edit mode explicitly
#[utoipa::path(
    put,
    path = "/api/edit-mode",
    tag = "edit-mode",
    request_body = EditModeBody,
    responses(
        (status = 200, description = "Flag after the change", body = inline(SuccessResponse<EditModeBody>)),
        (status = 400, description = "Malformed body", body = ErrorResponse)
    )
)]
#[put("/api/edit-mode")]
pub async fn set_edit_mode_handler(
    req: web::Json<EditModeBody>,
    data: web::Data<AppState>,
) -> impl Responder {
    let enabled = data.edit_mode.set(req.enabled).await;
    ApiResponse::success(EditModeBody { enabled })
}
