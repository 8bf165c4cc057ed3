use serde::Deserialize;
use utoipa::ToSchema;

use super::validation::{format_date, non_blank, FieldErrors};
use super::EntryForm;
use crate::modules::portfolio::domain::{Experience, ExperienceDraft};

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct ExperienceForm {
    #[schema(example = "Senior Software Engineer")]
    pub role: String,
    #[schema(example = "Google Inc.")]
    pub company: String,
    #[schema(example = "San Francisco, CA")]
    pub location: String,
    pub is_current_role: bool,
    #[schema(example = "2021-03-01")]
    pub start_date: String,
    /// Ignored while `is_current_role` is set
    pub end_date: String,
    pub description: String,
}

impl From<&Experience> for ExperienceForm {
    fn from(experience: &Experience) -> Self {
        Self {
            role: experience.role.clone(),
            company: experience.company.clone(),
            location: experience.location.clone().unwrap_or_default(),
            is_current_role: experience.is_current_role,
            start_date: format_date(Some(experience.start_date)),
            end_date: format_date(experience.end_date),
            description: experience.description.clone().unwrap_or_default(),
        }
    }
}

impl EntryForm for ExperienceForm {
    type Entry = Experience;

    fn submit(self) -> Result<ExperienceDraft, FieldErrors> {
        let mut errors = FieldErrors::default();

        errors.require("role", &self.role, "Role is required");
        errors.require("company", &self.company, "Company is required");
        let start_date = errors.date("start_date", &self.start_date, Some("Start date is required"));

        // A current role has no end; whatever is typed there is dropped.
        let end_date = if self.is_current_role {
            None
        } else {
            let end_date = errors.date(
                "end_date",
                &self.end_date,
                Some("End date is required for past roles"),
            );
            errors.not_before(
                "end_date",
                start_date,
                end_date,
                "End date must be after start date",
            );
            end_date
        };

        match start_date {
            Some(start_date) if errors.is_empty() => Ok(ExperienceDraft {
                role: self.role.trim().to_string(),
                company: self.company.trim().to_string(),
                start_date,
                end_date,
                is_current_role: self.is_current_role,
                location: non_blank(&self.location),
                description: non_blank(&self.description),
            }),
            _ => Err(errors),
        }
    }
}
