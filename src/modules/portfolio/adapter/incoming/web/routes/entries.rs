//! Create, update and delete routes shared by every entry collection.
//!
//! Each collection implements [`EntryRoute`] once; the handlers are generic
//! over it and registered per collection by [`configure_entry_routes`].

use std::sync::Arc;

use actix_web::{web, HttpResponse};
use tracing::{error, warn};

use crate::modules::edit_mode::adapter::incoming::web::extractors::EditModeEnabled;
use crate::modules::portfolio::application::forms::{
    CertificationForm, EducationForm, EntryForm, ExperienceForm, FormSubmission, ProjectForm,
    SocialForm,
};
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    ManageEntryError, ManageEntryUseCase,
};
use crate::modules::portfolio::domain::{
    Certification, Education, Entry, EntityId, Experience, Project, Social,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Binds an entry type to its collection path, form and use case.
pub trait EntryRoute: Entry {
    type Form: EntryForm<Entry = Self>;

    const PATH: &'static str;

    fn use_case(state: &AppState) -> &Arc<dyn ManageEntryUseCase<Self> + Send + Sync>;
}

impl EntryRoute for Education {
    type Form = EducationForm;
    const PATH: &'static str = "/api/education";

    fn use_case(state: &AppState) -> &Arc<dyn ManageEntryUseCase<Self> + Send + Sync> {
        &state.portfolio.education
    }
}

impl EntryRoute for Experience {
    type Form = ExperienceForm;
    const PATH: &'static str = "/api/experience";

    fn use_case(state: &AppState) -> &Arc<dyn ManageEntryUseCase<Self> + Send + Sync> {
        &state.portfolio.experience
    }
}

impl EntryRoute for Certification {
    type Form = CertificationForm;
    const PATH: &'static str = "/api/certifications";

    fn use_case(state: &AppState) -> &Arc<dyn ManageEntryUseCase<Self> + Send + Sync> {
        &state.portfolio.certifications
    }
}

impl EntryRoute for Project {
    type Form = ProjectForm;
    const PATH: &'static str = "/api/projects";

    fn use_case(state: &AppState) -> &Arc<dyn ManageEntryUseCase<Self> + Send + Sync> {
        &state.portfolio.projects
    }
}

impl EntryRoute for Social {
    type Form = SocialForm;
    const PATH: &'static str = "/api/socials";

    fn use_case(state: &AppState) -> &Arc<dyn ManageEntryUseCase<Self> + Send + Sync> {
        &state.portfolio.socials
    }
}

pub fn configure_entry_routes(cfg: &mut web::ServiceConfig) {
    register::<Education>(cfg);
    register::<Experience>(cfg);
    register::<Certification>(cfg);
    register::<Project>(cfg);
    register::<Social>(cfg);
}

fn register<T: EntryRoute>(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource(T::PATH).route(web::post().to(create_entry_handler::<T>)))
        .service(
            web::resource(format!("{}/{{id}}", T::PATH))
                .route(web::put().to(update_entry_handler::<T>))
                .route(web::delete().to(delete_entry_handler::<T>)),
        );
}

fn validate<T: EntryRoute>(form: T::Form) -> Result<T::Draft, HttpResponse> {
    form.submit().map_err(|fields| {
        warn!(kind = T::KIND.as_str(), "Rejected form: {}", fields);
        ApiResponse::validation_failed(fields.into_map())
    })
}

fn repository_failure<T: EntryRoute>(err: ManageEntryError) -> HttpResponse {
    match err {
        ManageEntryError::RepositoryError(e) => {
            error!("Repository error on {}: {}", T::KIND.as_str(), e);
            ApiResponse::internal_error()
        }
    }
}

/// POST /api/{collection}: 201 with the stored record.
pub async fn create_entry_handler<T: EntryRoute>(
    _guard: EditModeEnabled,
    req: web::Json<T::Form>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let draft = match validate::<T>(req.into_inner()) {
        Ok(draft) => draft,
        Err(response) => return response,
    };

    match T::use_case(&data).submit(FormSubmission::Create(draft)).await {
        Ok(created) => ApiResponse::created(created),
        Err(e) => repository_failure::<T>(e),
    }
}

/// PUT /api/{collection}/{id}: 200 with the record, `data: null` when the
/// id is not in the collection.
pub async fn update_entry_handler<T: EntryRoute>(
    _guard: EditModeEnabled,
    path: web::Path<String>,
    req: web::Json<T::Form>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let draft = match validate::<T>(req.into_inner()) {
        Ok(draft) => draft,
        Err(response) => return response,
    };
    let id = EntityId::from(path.into_inner());

    match T::use_case(&data)
        .submit(FormSubmission::Update(id, draft))
        .await
    {
        Ok(updated) => ApiResponse::success(updated),
        Err(e) => repository_failure::<T>(e),
    }
}

/// DELETE /api/{collection}/{id}: 204 whether or not the id existed.
pub async fn delete_entry_handler<T: EntryRoute>(
    _guard: EditModeEnabled,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let id = EntityId::from(path.into_inner());

    match T::use_case(&data).delete(&id).await {
        Ok(_) => ApiResponse::no_content(),
        Err(e) => repository_failure::<T>(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    use crate::modules::portfolio::domain::PROJECT_PLACEHOLDER_IMAGE;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    fn education_body() -> Value {
        json!({
            "degree": "BSc Computer Science",
            "institution": "Tech University",
            "start_date": "2020-01-01",
            "end_date": "2022-06-01",
            "gpa": "3.8"
        })
    }

    #[actix_web::test]
    async fn create_returns_201_with_id_and_period() {
        let state = TestAppStateBuilder::default().build();
        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .configure(configure_entry_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/education")
            .set_json(education_body())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["period"], "2020 - 2022");
        assert!(body["data"]["id"].as_str().is_some_and(|id| !id.is_empty()));

        let stored = state.portfolio.get_portfolio.execute().await.unwrap();
        assert_eq!(stored.education.len(), 1);
    }

    #[actix_web::test]
    async fn invalid_form_is_a_422_and_stores_nothing() {
        let state = TestAppStateBuilder::default().build();
        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .configure(configure_entry_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/experience")
            .set_json(json!({
                "role": "Engineer",
                "company": "",
                "start_date": "2022-01-01",
                "end_date": "2021-01-01",
                "is_current_role": false
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["fields"]["company"], "Company is required");
        assert_eq!(
            body["error"]["fields"]["end_date"],
            "End date must be after start date"
        );
        let stored = state.portfolio.get_portfolio.execute().await.unwrap();
        assert!(stored.experience.is_empty());
    }

    #[actix_web::test]
    async fn update_replaces_fields_of_existing_entry() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .configure(configure_entry_routes),
        )
        .await;
        let created: Value = test::call_and_read_body_json(
            &app,
            test::TestRequest::post()
                .uri("/api/education")
                .set_json(education_body())
                .to_request(),
        )
        .await;
        let id = created["data"]["id"].as_str().unwrap().to_string();

        let mut changed = education_body();
        changed["end_date"] = json!("");
        changed["gpa"] = json!("");
        let req = test::TestRequest::put()
            .uri(&format!("/api/education/{id}"))
            .set_json(changed)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["id"], id.as_str());
        assert_eq!(body["data"]["period"], "2020 - Present");
        assert!(body["data"]["gpa"].is_null());
    }

    #[actix_web::test]
    async fn update_of_unknown_id_returns_null_data() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .configure(configure_entry_routes),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/education/does-not-exist")
            .set_json(education_body())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert!(body["data"].is_null());
    }

    #[actix_web::test]
    async fn delete_is_204_for_known_and_unknown_ids() {
        let state = TestAppStateBuilder::default().build();
        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .configure(configure_entry_routes),
        )
        .await;
        let created: Value = test::call_and_read_body_json(
            &app,
            test::TestRequest::post()
                .uri("/api/socials")
                .set_json(json!({
                    "platform": "github",
                    "handle": "janedoe",
                    "url": "https://github.com/janedoe"
                }))
                .to_request(),
        )
        .await;
        assert_eq!(created["data"]["platform"], "GitHub");
        assert_eq!(created["data"]["icon"], "github");
        let id = created["data"]["id"].as_str().unwrap().to_string();

        let first = test::call_service(
            &app,
            test::TestRequest::delete()
                .uri(&format!("/api/socials/{id}"))
                .to_request(),
        )
        .await;
        let second = test::call_service(
            &app,
            test::TestRequest::delete()
                .uri(&format!("/api/socials/{id}"))
                .to_request(),
        )
        .await;

        assert_eq!(first.status(), StatusCode::NO_CONTENT);
        assert_eq!(second.status(), StatusCode::NO_CONTENT);
        let stored = state.portfolio.get_portfolio.execute().await.unwrap();
        assert!(stored.socials.is_empty());
    }

    #[actix_web::test]
    async fn project_technologies_are_split_and_image_defaults() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .configure(configure_entry_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/projects")
            .set_json(json!({
                "title": "Portfolio editor",
                "description": "Edits portfolios",
                "technologies": "Rust, actix-web, ,serde",
                "status": "in-progress"
            }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["data"]["technologies"], json!(["Rust", "actix-web", "serde"]));
        assert_eq!(body["data"]["image"], PROJECT_PLACEHOLDER_IMAGE);
        assert_eq!(body["data"]["status"], "in-progress");
    }

    #[actix_web::test]
    async fn certification_earned_without_date_is_rejected() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .configure(configure_entry_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/certifications")
            .set_json(json!({ "title": "CKA", "issuer": "CNCF", "earned": true }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body["error"]["fields"]["date_earned"],
            "Date earned is required for earned certifications"
        );
    }

    #[actix_web::test]
    async fn mutations_are_forbidden_outside_edit_mode() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().with_edit_mode(false).build())
                .configure(configure_entry_routes),
        )
        .await;

        let create = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/education")
                .set_json(education_body())
                .to_request(),
        )
        .await;
        let delete = test::call_service(
            &app,
            test::TestRequest::delete()
                .uri("/api/education/any")
                .to_request(),
        )
        .await;

        assert_eq!(create.status(), StatusCode::FORBIDDEN);
        assert_eq!(delete.status(), StatusCode::FORBIDDEN);
    }
}
