use actix_web::{delete, post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::edit_mode::adapter::incoming::web::extractors::EditModeEnabled;
use crate::modules::portfolio::application::ports::incoming::use_cases::ManageTagsError;
use crate::modules::portfolio::application::ports::outgoing::TagKind;
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct AddTagRequest {
    #[schema(example = "Rust")]
    pub value: String,
}

fn tags_response(result: Result<Vec<String>, ManageTagsError>, kind: TagKind) -> HttpResponse {
    match result {
        Ok(tags) => ApiResponse::success(tags),

        Err(ManageTagsError::EmptyValue) => {
            warn!(list = kind.as_str(), "Rejected blank tag");
            ApiResponse::bad_request("EMPTY_VALUE", "Value must not be empty")
        }

        Err(ManageTagsError::RepositoryError(e)) => {
            error!("Repository error updating {}: {}", kind.as_str(), e);
            ApiResponse::internal_error()
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Handlers
// ──────────────────────────────────────────────────────────
//

/// Append a skill
#[utoipa::path(
    post,
    path = "/api/skills",
    tag = "portfolio",
    request_body = AddTagRequest,
    responses(
        (status = 200, description = "Skills after the change", body = inline(SuccessResponse<Vec<String>>)),
        (status = 400, description = "Blank value", body = ErrorResponse),
        (status = 403, description = "Edit mode is off", body = ErrorResponse)
    )
)]
#[post("/api/skills")]
pub async fn add_skill_handler(
    _guard: EditModeEnabled,
    req: web::Json<AddTagRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let result = data
        .portfolio
        .tags
        .add(TagKind::Skills, req.into_inner().value)
        .await;
    tags_response(result, TagKind::Skills)
}

/// Remove every skill equal to `value`
#[utoipa::path(
    delete,
    path = "/api/skills/{value}",
    tag = "portfolio",
    params(("value" = String, Path, description = "Skill to remove")),
    responses(
        (status = 200, description = "Skills after the change", body = inline(SuccessResponse<Vec<String>>)),
        (status = 403, description = "Edit mode is off", body = ErrorResponse)
    )
)]
#[delete("/api/skills/{value}")]
pub async fn remove_skill_handler(
    _guard: EditModeEnabled,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let result = data
        .portfolio
        .tags
        .remove(TagKind::Skills, path.into_inner())
        .await;
    tags_response(result, TagKind::Skills)
}

/// Append a technology
#[utoipa::path(
    post,
    path = "/api/technologies",
    tag = "portfolio",
    request_body = AddTagRequest,
    responses(
        (status = 200, description = "Technologies after the change", body = inline(SuccessResponse<Vec<String>>)),
        (status = 400, description = "Blank value", body = ErrorResponse),
        (status = 403, description = "Edit mode is off", body = ErrorResponse)
    )
)]
#[post("/api/technologies")]
pub async fn add_technology_handler(
    _guard: EditModeEnabled,
    req: web::Json<AddTagRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let result = data
        .portfolio
        .tags
        .add(TagKind::Technologies, req.into_inner().value)
        .await;
    tags_response(result, TagKind::Technologies)
}

/// Remove every technology equal to `value`
#[utoipa::path(
    delete,
    path = "/api/technologies/{value}",
    tag = "portfolio",
    params(("value" = String, Path, description = "Technology to remove")),
    responses(
        (status = 200, description = "Technologies after the change", body = inline(SuccessResponse<Vec<String>>)),
        (status = 403, description = "Edit mode is off", body = ErrorResponse)
    )
)]
#[delete("/api/technologies/{value}")]
pub async fn remove_technology_handler(
    _guard: EditModeEnabled,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let result = data
        .portfolio
        .tags
        .remove(TagKind::Technologies, path.into_inner())
        .await;
    tags_response(result, TagKind::Technologies)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    #[actix_web::test]
    async fn duplicate_skill_is_kept_then_removed_together() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .service(add_skill_handler)
                .service(remove_skill_handler),
        )
        .await;

        for _ in 0..2 {
            let req = test::TestRequest::post()
                .uri("/api/skills")
                .set_json(json!({ "value": "Go" }))
                .to_request();
            test::call_service(&app, req).await;
        }
        let req = test::TestRequest::delete().uri("/api/skills/Go").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["data"], json!([]));
    }

    #[actix_web::test]
    async fn encoded_values_are_decoded_before_removal() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .service(add_technology_handler)
                .service(remove_technology_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/technologies")
            .set_json(json!({ "value": "Node JS" }))
            .to_request();
        let added: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(added["data"], json!(["Node JS"]));

        let req = test::TestRequest::delete()
            .uri("/api/technologies/Node%20JS")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["data"], json!([]));
    }

    #[actix_web::test]
    async fn blank_value_is_a_400() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .service(add_technology_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/technologies")
            .set_json(json!({ "value": "   " }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "EMPTY_VALUE");
    }

    #[actix_web::test]
    async fn forbidden_outside_edit_mode() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().with_edit_mode(false).build())
                .service(remove_skill_handler),
        )
        .await;

        let req = test::TestRequest::delete().uri("/api/skills/Go").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }
}
