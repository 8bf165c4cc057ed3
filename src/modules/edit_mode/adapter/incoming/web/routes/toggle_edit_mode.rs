use actix_web::{post, web, Responder};

use super::EditModeBody;
use crate::api::schemas::SuccessResponse;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Flip edit mode
#[utoipa::path(
    post,
    path = "/api/edit-mode/toggle",
    tag = "edit-mode",
    responses(
        (status = 200, description = "Flag after the flip", body = inline(SuccessResponse<EditModeBody>))
    )
)]
#[post("/api/edit-mode/toggle")]
pub async fn toggle_edit_mode_handler(data: web::Data<AppState>) -> impl Responder {
    let enabled = data.edit_mode.toggle().await;
    ApiResponse::success(EditModeBody { enabled })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use serde_json::Value;

    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    #[actix_web::test]
    async fn toggling_twice_restores_the_flag() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().with_edit_mode(false).build())
                .service(toggle_edit_mode_handler),
        )
        .await;

        let first: Value = test::call_and_read_body_json(
            &app,
            test::TestRequest::post().uri("/api/edit-mode/toggle").to_request(),
        )
        .await;
        let second: Value = test::call_and_read_body_json(
            &app,
            test::TestRequest::post().uri("/api/edit-mode/toggle").to_request(),
        )
        .await;

        assert_eq!(first["data"]["enabled"], true);
        assert_eq!(second["data"]["enabled"], false);
    }
}
