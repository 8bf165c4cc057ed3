use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use futures::future::LocalBoxFuture;
use tracing::{error, warn};

use crate::shared::api::ApiResponse;
use crate::AppState;

/// Proof that edit mode was on when the request arrived. Put it first in a
/// mutating handler's arguments so a disabled editor is rejected before
/// the body is read.
#[derive(Debug, Clone, Copy)]
pub struct EditModeEnabled;

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for EditModeEnabled {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let state = req.app_data::<web::Data<AppState>>().cloned();
        let path = req.path().to_string();

        Box::pin(async move {
            let Some(state) = state else {
                error!("AppState missing from app data");
                return Err(create_api_error(ApiResponse::internal_error()));
            };

            if state.edit_mode.is_enabled().await {
                Ok(EditModeEnabled)
            } else {
                warn!(path = %path, "Rejected mutation while edit mode is off");
                Err(create_api_error(ApiResponse::forbidden(
                    "EDIT_MODE_DISABLED",
                    "Turn on edit mode to make changes",
                )))
            }
        })
    }
}
