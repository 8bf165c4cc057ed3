use serde::Deserialize;
use utoipa::ToSchema;

use super::validation::{format_date, non_blank, FieldErrors};
use super::EntryForm;
use crate::modules::portfolio::domain::{Education, EducationDraft};

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct EducationForm {
    #[schema(example = "Bachelor of Technology in Computer Science")]
    pub degree: String,
    #[schema(example = "University of Technology")]
    pub institution: String,
    #[schema(example = "2020-08-01")]
    pub start_date: String,
    /// Leave empty if ongoing
    #[schema(example = "2024-06-30")]
    pub end_date: String,
    #[schema(example = "3.8/4.0")]
    pub gpa: String,
    pub description: String,
}

impl From<&Education> for EducationForm {
    fn from(education: &Education) -> Self {
        Self {
            degree: education.degree.clone(),
            institution: education.institution.clone(),
            start_date: format_date(Some(education.start_date)),
            end_date: format_date(education.end_date),
            gpa: education.gpa.clone().unwrap_or_default(),
            description: education.description.clone().unwrap_or_default(),
        }
    }
}

impl EntryForm for EducationForm {
    type Entry = Education;

    fn submit(self) -> Result<EducationDraft, FieldErrors> {
        let mut errors = FieldErrors::default();

        errors.require("degree", &self.degree, "Degree is required");
        errors.require("institution", &self.institution, "Institution is required");
        let start_date = errors.date("start_date", &self.start_date, Some("Start date is required"));
        let end_date = errors.date("end_date", &self.end_date, None);
        errors.not_before(
            "end_date",
            start_date,
            end_date,
            "End date must be after start date",
        );

        match start_date {
            Some(start_date) if errors.is_empty() => Ok(EducationDraft {
                degree: self.degree.trim().to_string(),
                institution: self.institution.trim().to_string(),
                start_date,
                end_date,
                gpa: non_blank(&self.gpa),
                description: non_blank(&self.description),
            }),
            _ => Err(errors),
        }
    }
}
