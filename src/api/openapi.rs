use utoipa::openapi::path::{HttpMethod, OperationBuilder, ParameterBuilder, ParameterIn};
use utoipa::openapi::request_body::RequestBodyBuilder;
use utoipa::openapi::{ContentBuilder, Ref, Required, ResponseBuilder};
use utoipa::{Modify, OpenApi};

use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use crate::modules::edit_mode::adapter::incoming::web::routes::EditModeBody;
use crate::modules::layout::adapter::incoming::web::routes::ReorderSectionsRequest;
use crate::modules::layout::domain::{SectionDescriptor, SectionKind};
use crate::modules::portfolio::adapter::incoming::web::routes::{AddTagRequest, EntryRoute};
use crate::modules::portfolio::application::forms::{
    CertificationForm, EducationForm, ExperienceForm, ProfileForm, ProjectForm, SocialForm,
};
use crate::modules::portfolio::domain::{
    Certification, Education, EntityId, Experience, PortfolioData, Profile, Project,
    ProjectStatus, Social, SocialIcon,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio Editor API",
        version = "1.0.0",
        description = "Edit a single portfolio: profile, skills, entry collections and section order"
    ),
    paths(
        // Portfolio
        crate::modules::portfolio::adapter::incoming::web::routes::get_portfolio_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::update_profile_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::add_skill_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::remove_skill_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::add_technology_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::remove_technology_handler,

        // Sections
        crate::modules::layout::adapter::incoming::web::routes::get_sections_handler,
        crate::modules::layout::adapter::incoming::web::routes::reorder_sections_handler,
        crate::modules::layout::adapter::incoming::web::routes::replace_sections_handler,

        // Edit mode
        crate::modules::edit_mode::adapter::incoming::web::routes::get_edit_mode_handler,
        crate::modules::edit_mode::adapter::incoming::web::routes::toggle_edit_mode_handler,
        crate::modules::edit_mode::adapter::incoming::web::routes::set_edit_mode_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<PortfolioData>,
            ErrorResponse,
            ErrorDetail,

            // Portfolio
            PortfolioData,
            Profile,
            Education,
            Experience,
            Certification,
            Project,
            ProjectStatus,
            Social,
            SocialIcon,
            EntityId,
            AddTagRequest,

            // Forms
            ProfileForm,
            EducationForm,
            ExperienceForm,
            CertificationForm,
            ProjectForm,
            SocialForm,

            // Sections and edit mode
            SectionDescriptor,
            SectionKind,
            ReorderSectionsRequest,
            EditModeBody
        )
    ),
    modifiers(&EntryPathsAddon),
    tags(
        (name = "portfolio", description = "Profile, skills and technologies"),
        (name = "entries", description = "Education, experience, certification, project and social entries"),
        (name = "sections", description = "Section order"),
        (name = "edit-mode", description = "Edit-mode flag gating every mutation"),
    )
)]
pub struct ApiDoc;

/// Documents the entry routes, which are generic handlers registered once
/// per collection and so cannot carry `#[utoipa::path]` themselves.
struct EntryPathsAddon;

impl Modify for EntryPathsAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        add_entry_paths::<Education>(openapi, "EducationForm", "Education");
        add_entry_paths::<Experience>(openapi, "ExperienceForm", "Experience");
        add_entry_paths::<Certification>(openapi, "CertificationForm", "Certification");
        add_entry_paths::<Project>(openapi, "ProjectForm", "Project");
        add_entry_paths::<Social>(openapi, "SocialForm", "Social");
    }
}

fn add_entry_paths<T: EntryRoute>(openapi: &mut utoipa::openapi::OpenApi, form: &str, entity: &str) {
    let kind = T::KIND.as_str();
    let form_body = || {
        RequestBodyBuilder::new()
            .content(
                "application/json",
                ContentBuilder::new()
                    .schema(Some(Ref::from_schema_name(form)))
                    .build(),
            )
            .build()
    };
    let entity_response = |description: &str| {
        ResponseBuilder::new()
            .description(description)
            .content(
                "application/json",
                ContentBuilder::new()
                    .schema(Some(Ref::from_schema_name(entity)))
                    .build(),
            )
            .build()
    };
    let error_response = |description: &str| {
        ResponseBuilder::new()
            .description(description)
            .content(
                "application/json",
                ContentBuilder::new()
                    .schema(Some(Ref::from_schema_name("ErrorResponse")))
                    .build(),
            )
            .build()
    };
    let id_param = || {
        ParameterBuilder::new()
            .name("id")
            .parameter_in(ParameterIn::Path)
            .required(Required::True)
            .schema(Some(Ref::from_schema_name("EntityId")))
            .build()
    };

    let create = OperationBuilder::new()
        .tag("entries")
        .summary(Some(format!("Create a {kind} entry")))
        .request_body(Some(form_body()))
        .response("201", entity_response("Stored entry"))
        .response("403", error_response("Edit mode is off"))
        .response("422", error_response("Field validation failed"))
        .build();

    let update = OperationBuilder::new()
        .tag("entries")
        .summary(Some(format!("Update a {kind} entry")))
        .parameter(id_param())
        .request_body(Some(form_body()))
        .response("200", entity_response("Updated entry, or null data when the id is unknown"))
        .response("403", error_response("Edit mode is off"))
        .response("422", error_response("Field validation failed"))
        .build();

    let delete = OperationBuilder::new()
        .tag("entries")
        .summary(Some(format!("Delete a {kind} entry")))
        .parameter(id_param())
        .response("204", ResponseBuilder::new().description("Deleted, or nothing to delete").build())
        .response("403", error_response("Edit mode is off"))
        .build();

    let item_path = format!("{}/{{id}}", T::PATH);
    openapi.paths.add_path_operation(T::PATH, vec![HttpMethod::Post], create);
    openapi.paths.add_path_operation(&item_path, vec![HttpMethod::Put], update);
    openapi.paths.add_path_operation(&item_path, vec![HttpMethod::Delete], delete);
}
