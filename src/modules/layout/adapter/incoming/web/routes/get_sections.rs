use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::layout::application::ports::incoming::use_cases::GetSectionsError;
use crate::modules::layout::domain::SectionDescriptor;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Content sections in render order
#[utoipa::path(
    get,
    path = "/api/sections",
    tag = "sections",
    responses(
        (status = 200, description = "Sections in render order", body = inline(SuccessResponse<Vec<SectionDescriptor>>)),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/sections")]
pub async fn get_sections_handler(data: web::Data<AppState>) -> impl Responder {
    match data.layout.get_sections.execute().await {
        Ok(sections) => ApiResponse::success(sections),
        Err(GetSectionsError::RepositoryError(e)) => {
            error!("Failed to read sections: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    #[actix_web::test]
    async fn lists_default_sections() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .service(get_sections_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/sections").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        let sections = body["data"].as_array().unwrap();
        assert_eq!(sections.len(), 5);
        assert_eq!(sections[1]["kind"], "technologies");
        assert_eq!(sections[1]["title"], "Technologies Used");
        assert_eq!(sections[1]["order"], 1);
    }
}
