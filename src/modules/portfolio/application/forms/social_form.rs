use serde::Deserialize;
use utoipa::ToSchema;

use super::validation::{is_valid_url, FieldErrors};
use super::EntryForm;
use crate::modules::portfolio::domain::{Social, SocialDraft, SocialIcon};

/// A platform the social form offers, with the label and icon it implies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformOption {
    pub value: &'static str,
    pub label: &'static str,
    pub icon: SocialIcon,
}

pub const PLATFORM_OPTIONS: [PlatformOption; 8] = [
    PlatformOption { value: "instagram", label: "Instagram", icon: SocialIcon::Instagram },
    PlatformOption { value: "linkedin", label: "LinkedIn", icon: SocialIcon::Linkedin },
    PlatformOption { value: "youtube", label: "YouTube", icon: SocialIcon::Youtube },
    PlatformOption { value: "twitter", label: "Twitter", icon: SocialIcon::Twitter },
    PlatformOption { value: "behance", label: "Behance", icon: SocialIcon::Behance },
    PlatformOption { value: "dribbble", label: "Dribbble", icon: SocialIcon::Circle },
    PlatformOption { value: "github", label: "GitHub", icon: SocialIcon::Github },
    PlatformOption { value: "website", label: "Website", icon: SocialIcon::Globe },
];

/// Looks a platform up by key or label, ignoring case.
pub fn platform_option(platform: &str) -> Option<&'static PlatformOption> {
    let platform = platform.trim();
    PLATFORM_OPTIONS.iter().find(|option| {
        option.value.eq_ignore_ascii_case(platform) || option.label.eq_ignore_ascii_case(platform)
    })
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct SocialForm {
    /// Catalogue key ("github") or label ("GitHub"); free text otherwise
    #[schema(example = "github")]
    pub platform: String,
    #[schema(example = "@johndoe")]
    pub handle: String,
    #[schema(example = "https://github.com/johndoe")]
    pub url: String,
    /// Icon key; only consulted for platforms outside the catalogue
    pub icon: String,
}

impl From<&Social> for SocialForm {
    fn from(social: &Social) -> Self {
        Self {
            platform: social.platform.clone(),
            handle: social.handle.clone(),
            url: social.url.clone(),
            icon: social.icon.key().to_string(),
        }
    }
}

impl EntryForm for SocialForm {
    type Entry = Social;

    fn submit(self) -> Result<SocialDraft, FieldErrors> {
        let mut errors = FieldErrors::default();

        errors.require("platform", &self.platform, "Platform is required");
        errors.require("handle", &self.handle, "Handle/Username is required");
        let url = self.url.trim();
        if url.is_empty() {
            errors.insert("url", "URL is required");
        } else if !is_valid_url(url) {
            errors.insert("url", "Please enter a valid URL");
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        let (platform, icon) = match platform_option(&self.platform) {
            Some(option) => (option.label.to_string(), option.icon),
            None => (
                self.platform.trim().to_string(),
                SocialIcon::from_key(self.icon.trim()).unwrap_or(SocialIcon::Globe),
            ),
        };

        Ok(SocialDraft {
            platform,
            handle: self.handle.trim().to_string(),
            icon,
            url: url.to_string(),
        })
    }
}
