//! Draft-and-validate layer in front of the portfolio store.
//!
//! A form is the unsaved copy of an entry exactly as typed (dates and URLs
//! are still strings). `submit` validates synchronously and, on success,
//! yields the typed draft the store accepts. Forms never touch the store.

mod certification_form;
mod education_form;
mod experience_form;
mod profile_form;
mod project_form;
mod social_form;
mod submission;
mod validation;

use serde::de::DeserializeOwned;

use crate::modules::portfolio::domain::Entry;

pub use certification_form::CertificationForm;
pub use education_form::EducationForm;
pub use experience_form::ExperienceForm;
pub use profile_form::ProfileForm;
pub use project_form::ProjectForm;
pub use social_form::SocialForm;
pub use submission::FormSubmission;
pub use validation::FieldErrors;

/// A form whose successful submission becomes a draft of `Self::Entry`.
pub trait EntryForm: DeserializeOwned + Send + 'static {
    type Entry: Entry;

    fn submit(self) -> Result<<Self::Entry as Entry>::Draft, FieldErrors>;
}
