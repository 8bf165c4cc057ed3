use serde::Deserialize;
use utoipa::ToSchema;

use super::validation::{format_date, non_blank, FieldErrors};
use super::EntryForm;
use crate::modules::portfolio::domain::{
    Project, ProjectDraft, ProjectStatus, PROJECT_PLACEHOLDER_IMAGE,
};

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct ProjectForm {
    #[schema(example = "E-commerce Platform")]
    pub title: String,
    pub description: String,
    /// Empty means the placeholder image
    pub image: String,
    #[schema(example = "https://example.com")]
    pub url: String,
    #[schema(example = "https://github.com/username/project")]
    pub github_url: String,
    pub start_date: String,
    pub end_date: String,
    pub status: ProjectStatus,
    /// Comma separated, e.g. "React, Node.js, MongoDB"
    #[schema(example = "Rust, Actix, PostgreSQL")]
    pub technologies: String,
}

impl From<&Project> for ProjectForm {
    fn from(project: &Project) -> Self {
        let image = if project.image == PROJECT_PLACEHOLDER_IMAGE {
            String::new()
        } else {
            project.image.clone()
        };

        Self {
            title: project.title.clone(),
            description: project.description.clone(),
            image,
            url: project.url.clone().unwrap_or_default(),
            github_url: project.github_url.clone().unwrap_or_default(),
            start_date: format_date(project.start_date),
            end_date: format_date(project.end_date),
            status: project.status,
            technologies: project.technologies.join(", "),
        }
    }
}

fn split_technologies(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tech| !tech.is_empty())
        .map(str::to_string)
        .collect()
}

impl EntryForm for ProjectForm {
    type Entry = Project;

    fn submit(self) -> Result<ProjectDraft, FieldErrors> {
        let mut errors = FieldErrors::default();

        errors.require("title", &self.title, "Project title is required");
        errors.require("description", &self.description, "Project description is required");
        errors.optional_url("url", &self.url, "Please enter a valid URL");
        errors.optional_url("github_url", &self.github_url, "Please enter a valid GitHub URL");
        let start_date = errors.date("start_date", &self.start_date, None);
        let end_date = errors.date("end_date", &self.end_date, None);
        errors.not_before(
            "end_date",
            start_date,
            end_date,
            "End date must be after start date",
        );

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ProjectDraft {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            image: self.image.trim().to_string(),
            technologies: split_technologies(&self.technologies),
            url: non_blank(&self.url),
            github_url: non_blank(&self.github_url),
            status: self.status,
            start_date,
            end_date,
        })
    }
}
