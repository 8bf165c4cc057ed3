use serde::Deserialize;
use utoipa::ToSchema;

use super::validation::{non_blank, FieldErrors};
use crate::modules::portfolio::domain::{Profile, ProfilePatch};
use crate::shared::PatchField;

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct ProfileForm {
    #[schema(example = "John Doe")]
    pub name: String,
    #[schema(example = "Open to work")]
    pub status: String,
    pub bio: String,
    #[schema(example = "john@example.com")]
    pub email: String,
    pub phone: String,
    pub location: String,
    /// Empty keeps the current avatar
    pub avatar: String,
}

impl From<&Profile> for ProfileForm {
    fn from(profile: &Profile) -> Self {
        Self {
            name: profile.name.clone(),
            status: profile.status.clone(),
            bio: profile.bio.clone(),
            email: profile.email.clone().unwrap_or_default(),
            phone: profile.phone.clone().unwrap_or_default(),
            location: profile.location.clone().unwrap_or_default(),
            avatar: profile.avatar.clone(),
        }
    }
}

impl ProfileForm {
    pub fn submit(self) -> Result<ProfilePatch, FieldErrors> {
        let mut errors = FieldErrors::default();

        errors.require("name", &self.name, "Name is required");
        errors.require("bio", &self.bio, "Bio is required");
        errors.require("status", &self.status, "Status is required");
        errors.optional_email("email", &self.email, "Please enter a valid email address");
        errors.optional_url("avatar", &self.avatar, "Please enter a valid image URL");

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ProfilePatch {
            name: PatchField::Value(self.name.trim().to_string()),
            status: PatchField::Value(self.status.trim().to_string()),
            bio: PatchField::Value(self.bio.trim().to_string()),
            email: non_blank(&self.email).into(),
            phone: non_blank(&self.phone).into(),
            location: non_blank(&self.location).into(),
            avatar: match non_blank(&self.avatar) {
                Some(avatar) => PatchField::Value(avatar),
                None => PatchField::Unset,
            },
        })
    }
}
