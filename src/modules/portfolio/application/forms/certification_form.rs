use serde::Deserialize;
use utoipa::ToSchema;

use super::validation::{format_date, non_blank, FieldErrors};
use super::EntryForm;
use crate::modules::portfolio::domain::{Certification, CertificationDraft};

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct CertificationForm {
    #[schema(example = "AWS Certified Solutions Architect")]
    pub title: String,
    #[schema(example = "Amazon Web Services")]
    pub issuer: String,
    pub earned: bool,
    /// Only required once `earned` is set; kept as typed otherwise
    pub date_earned: String,
    pub expiry_date: String,
    #[schema(example = "ABC123XYZ789")]
    pub credential_id: String,
    #[schema(example = "https://example.com/certificate")]
    pub url: String,
}

impl From<&Certification> for CertificationForm {
    fn from(certification: &Certification) -> Self {
        Self {
            title: certification.title.clone(),
            issuer: certification.issuer.clone(),
            earned: certification.earned,
            date_earned: format_date(certification.date_earned),
            expiry_date: format_date(certification.expiry_date),
            credential_id: certification.credential_id.clone().unwrap_or_default(),
            url: certification.url.clone().unwrap_or_default(),
        }
    }
}

impl EntryForm for CertificationForm {
    type Entry = Certification;

    fn submit(self) -> Result<CertificationDraft, FieldErrors> {
        let mut errors = FieldErrors::default();

        errors.require("title", &self.title, "Certification title is required");
        errors.require("issuer", &self.issuer, "Issuer is required");
        let date_earned = errors.date(
            "date_earned",
            &self.date_earned,
            self.earned
                .then_some("Date earned is required for earned certifications"),
        );
        errors.optional_url("url", &self.url, "Please enter a valid URL");
        let expiry_date = errors.date("expiry_date", &self.expiry_date, None);
        errors.not_before(
            "expiry_date",
            date_earned,
            expiry_date,
            "Expiry date must be after the date earned",
        );

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(CertificationDraft {
            title: self.title.trim().to_string(),
            issuer: self.issuer.trim().to_string(),
            earned: self.earned,
            date_earned,
            expiry_date,
            credential_id: non_blank(&self.credential_id),
            url: non_blank(&self.url),
        })
    }
}
