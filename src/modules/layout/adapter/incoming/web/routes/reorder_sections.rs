use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::edit_mode::adapter::incoming::web::extractors::EditModeEnabled;
use crate::modules::layout::application::ports::incoming::use_cases::ReorderSectionsError;
use crate::modules::layout::domain::SectionDescriptor;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct ReorderSectionsRequest {
    #[schema(example = 0)]
    pub from_index: usize,
    #[schema(example = 3)]
    pub to_index: usize,
}

/// Move one section to a new position
#[utoipa::path(
    post,
    path = "/api/sections/reorder",
    tag = "sections",
    request_body = ReorderSectionsRequest,
    responses(
        (status = 200, description = "Sections after the move", body = inline(SuccessResponse<Vec<SectionDescriptor>>)),
        (status = 400, description = "Index out of range", body = ErrorResponse),
        (status = 403, description = "Edit mode is off", body = ErrorResponse)
    )
)]
#[post("/api/sections/reorder")]
pub async fn reorder_sections_handler(
    _guard: EditModeEnabled,
    req: web::Json<ReorderSectionsRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.layout.reorder.execute(req.from_index, req.to_index).await {
        Ok(sections) => ApiResponse::success(sections),

        Err(ReorderSectionsError::OutOfRange(e)) => {
            warn!("Rejected reorder: {}", e);
            ApiResponse::bad_request("INDEX_OUT_OF_RANGE", &e.to_string())
        }

        Err(ReorderSectionsError::RepositoryError(e)) => {
            error!("Repository error reordering sections: {}", e);
            ApiResponse::internal_error()
        }
    }
}
