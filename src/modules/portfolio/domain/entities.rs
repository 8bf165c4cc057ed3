use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::collection::{Entry, EntryCollection, EntryKind, TagList};
use super::derived::{certification_status, compute_period};
use super::entity_id::EntityId;
use crate::shared::PatchField;

pub const PROJECT_PLACEHOLDER_IMAGE: &str = "/placeholder.svg?height=240&width=320";

//
// ──────────────────────────────────────────────────────────
// Profile (singleton)
// ──────────────────────────────────────────────────────────
//

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct Profile {
    pub name: String,
    pub avatar: String,
    pub status: String,
    pub bio: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Your Name".to_string(),
            avatar: String::new(),
            status: "Available for opportunities".to_string(),
            bio: "Tell visitors about yourself.".to_string(),
            email: None,
            phone: None,
            location: None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProfilePatch {
    pub name: PatchField<String>,
    pub avatar: PatchField<String>,
    pub status: PatchField<String>,
    pub bio: PatchField<String>,
    pub email: PatchField<String>,
    pub phone: PatchField<String>,
    pub location: PatchField<String>,
}

impl Profile {
    pub fn apply_patch(&mut self, patch: ProfilePatch) {
        patch.name.apply_to(&mut self.name);
        patch.avatar.apply_to(&mut self.avatar);
        patch.status.apply_to(&mut self.status);
        patch.bio.apply_to(&mut self.bio);
        patch.email.apply_to_optional(&mut self.email);
        patch.phone.apply_to_optional(&mut self.phone);
        patch.location.apply_to_optional(&mut self.location);
    }
}

//
// ──────────────────────────────────────────────────────────
// Education
// ──────────────────────────────────────────────────────────
//

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct Education {
    pub id: EntityId,
    pub degree: String,
    pub institution: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    /// Derived from the dates, e.g. "2020 - 2024"
    #[serde(default)]
    period: String,
    pub gpa: Option<String>,
    pub description: Option<String>,
}

impl Education {
    pub fn period(&self) -> &str {
        &self.period
    }
}

#[derive(Debug, Clone)]
pub struct EducationDraft {
    pub degree: String,
    pub institution: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub gpa: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct EducationPatch {
    pub degree: PatchField<String>,
    pub institution: PatchField<String>,
    pub start_date: PatchField<NaiveDate>,
    pub end_date: PatchField<NaiveDate>,
    pub gpa: PatchField<String>,
    pub description: PatchField<String>,
}

impl From<EducationDraft> for EducationPatch {
    fn from(draft: EducationDraft) -> Self {
        Self {
            degree: PatchField::Value(draft.degree),
            institution: PatchField::Value(draft.institution),
            start_date: PatchField::Value(draft.start_date),
            end_date: draft.end_date.into(),
            gpa: draft.gpa.into(),
            description: draft.description.into(),
        }
    }
}

impl Entry for Education {
    type Draft = EducationDraft;
    type Patch = EducationPatch;

    const KIND: EntryKind = EntryKind::Education;

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn from_draft(id: EntityId, draft: EducationDraft) -> Self {
        let mut education = Self {
            id,
            degree: draft.degree,
            institution: draft.institution,
            start_date: draft.start_date,
            end_date: draft.end_date,
            period: String::new(),
            gpa: draft.gpa,
            description: draft.description,
        };
        education.refresh_derived();
        education
    }

    fn apply_patch(&mut self, patch: EducationPatch) {
        patch.degree.apply_to(&mut self.degree);
        patch.institution.apply_to(&mut self.institution);
        patch.start_date.apply_to(&mut self.start_date);
        patch.end_date.apply_to_optional(&mut self.end_date);
        patch.gpa.apply_to_optional(&mut self.gpa);
        patch.description.apply_to_optional(&mut self.description);
        self.refresh_derived();
    }

    fn refresh_derived(&mut self) {
        self.period = compute_period(self.start_date, self.end_date, false);
    }

    fn collection(data: &PortfolioData) -> &EntryCollection<Self> {
        &data.education
    }

    fn collection_mut(data: &mut PortfolioData) -> &mut EntryCollection<Self> {
        &mut data.education
    }
}

//
// ──────────────────────────────────────────────────────────
// Experience
// ──────────────────────────────────────────────────────────
//

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct Experience {
    pub id: EntityId,
    pub role: String,
    pub company: String,
    pub start_date: NaiveDate,
    /// Always empty while `is_current_role` is set
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    period: String,
    #[serde(default)]
    pub is_current_role: bool,
    pub location: Option<String>,
    pub description: Option<String>,
}

impl Experience {
    pub fn period(&self) -> &str {
        &self.period
    }
}

#[derive(Debug, Clone)]
pub struct ExperienceDraft {
    pub role: String,
    pub company: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub is_current_role: bool,
    pub location: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ExperiencePatch {
    pub role: PatchField<String>,
    pub company: PatchField<String>,
    pub start_date: PatchField<NaiveDate>,
    pub end_date: PatchField<NaiveDate>,
    pub is_current_role: PatchField<bool>,
    pub location: PatchField<String>,
    pub description: PatchField<String>,
}

impl From<ExperienceDraft> for ExperiencePatch {
    fn from(draft: ExperienceDraft) -> Self {
        Self {
            role: PatchField::Value(draft.role),
            company: PatchField::Value(draft.company),
            start_date: PatchField::Value(draft.start_date),
            end_date: draft.end_date.into(),
            is_current_role: PatchField::Value(draft.is_current_role),
            location: draft.location.into(),
            description: draft.description.into(),
        }
    }
}

impl Entry for Experience {
    type Draft = ExperienceDraft;
    type Patch = ExperiencePatch;

    const KIND: EntryKind = EntryKind::Experience;

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn from_draft(id: EntityId, draft: ExperienceDraft) -> Self {
        let mut experience = Self {
            id,
            role: draft.role,
            company: draft.company,
            start_date: draft.start_date,
            end_date: draft.end_date,
            period: String::new(),
            is_current_role: draft.is_current_role,
            location: draft.location,
            description: draft.description,
        };
        experience.refresh_derived();
        experience
    }

    fn apply_patch(&mut self, patch: ExperiencePatch) {
        patch.role.apply_to(&mut self.role);
        patch.company.apply_to(&mut self.company);
        patch.start_date.apply_to(&mut self.start_date);
        patch.end_date.apply_to_optional(&mut self.end_date);
        patch.is_current_role.apply_to(&mut self.is_current_role);
        patch.location.apply_to_optional(&mut self.location);
        patch.description.apply_to_optional(&mut self.description);
        self.refresh_derived();
    }

    fn refresh_derived(&mut self) {
        if self.is_current_role {
            self.end_date = None;
        }
        self.period = compute_period(self.start_date, self.end_date, self.is_current_role);
    }

    fn collection(data: &PortfolioData) -> &EntryCollection<Self> {
        &data.experience
    }

    fn collection_mut(data: &mut PortfolioData) -> &mut EntryCollection<Self> {
        &mut data.experience
    }
}

//
// ──────────────────────────────────────────────────────────
// Certification
// ──────────────────────────────────────────────────────────
//

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct Certification {
    pub id: EntityId,
    pub title: String,
    pub issuer: String,
    pub earned: bool,
    /// Derived from `earned`
    #[serde(default)]
    status: String,
    pub date_earned: Option<NaiveDate>,
    pub expiry_date: Option<NaiveDate>,
    pub credential_id: Option<String>,
    pub url: Option<String>,
}

impl Certification {
    pub fn status(&self) -> &str {
        &self.status
    }
}

#[derive(Debug, Clone)]
pub struct CertificationDraft {
    pub title: String,
    pub issuer: String,
    pub earned: bool,
    pub date_earned: Option<NaiveDate>,
    pub expiry_date: Option<NaiveDate>,
    pub credential_id: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct CertificationPatch {
    pub title: PatchField<String>,
    pub issuer: PatchField<String>,
    pub earned: PatchField<bool>,
    pub date_earned: PatchField<NaiveDate>,
    pub expiry_date: PatchField<NaiveDate>,
    pub credential_id: PatchField<String>,
    pub url: PatchField<String>,
}

impl From<CertificationDraft> for CertificationPatch {
    fn from(draft: CertificationDraft) -> Self {
        Self {
            title: PatchField::Value(draft.title),
            issuer: PatchField::Value(draft.issuer),
            earned: PatchField::Value(draft.earned),
            date_earned: draft.date_earned.into(),
            expiry_date: draft.expiry_date.into(),
            credential_id: draft.credential_id.into(),
            url: draft.url.into(),
        }
    }
}

impl Entry for Certification {
    type Draft = CertificationDraft;
    type Patch = CertificationPatch;

    const KIND: EntryKind = EntryKind::Certification;

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn from_draft(id: EntityId, draft: CertificationDraft) -> Self {
        let mut certification = Self {
            id,
            title: draft.title,
            issuer: draft.issuer,
            earned: draft.earned,
            status: String::new(),
            date_earned: draft.date_earned,
            expiry_date: draft.expiry_date,
            credential_id: draft.credential_id,
            url: draft.url,
        };
        certification.refresh_derived();
        certification
    }

    fn apply_patch(&mut self, patch: CertificationPatch) {
        patch.title.apply_to(&mut self.title);
        patch.issuer.apply_to(&mut self.issuer);
        patch.earned.apply_to(&mut self.earned);
        patch.date_earned.apply_to_optional(&mut self.date_earned);
        patch.expiry_date.apply_to_optional(&mut self.expiry_date);
        patch.credential_id.apply_to_optional(&mut self.credential_id);
        patch.url.apply_to_optional(&mut self.url);
        self.refresh_derived();
    }

    fn refresh_derived(&mut self) {
        self.status = certification_status(self.earned).to_string();
    }

    fn collection(data: &PortfolioData) -> &EntryCollection<Self> {
        &data.certifications
    }

    fn collection_mut(data: &mut PortfolioData) -> &mut EntryCollection<Self> {
        &mut data.certifications
    }
}

//
// ──────────────────────────────────────────────────────────
// Project
// ──────────────────────────────────────────────────────────
//

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    #[default]
    Completed,
    InProgress,
    Planned,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct Project {
    pub id: EntityId,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    pub url: Option<String>,
    pub github_url: Option<String>,
    #[serde(default)]
    pub status: ProjectStatus,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Clone)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub image: String,
    pub technologies: Vec<String>,
    pub url: Option<String>,
    pub github_url: Option<String>,
    pub status: ProjectStatus,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default)]
pub struct ProjectPatch {
    pub title: PatchField<String>,
    pub description: PatchField<String>,
    pub image: PatchField<String>,
    pub technologies: PatchField<Vec<String>>,
    pub url: PatchField<String>,
    pub github_url: PatchField<String>,
    pub status: PatchField<ProjectStatus>,
    pub start_date: PatchField<NaiveDate>,
    pub end_date: PatchField<NaiveDate>,
}

impl From<ProjectDraft> for ProjectPatch {
    fn from(draft: ProjectDraft) -> Self {
        Self {
            title: PatchField::Value(draft.title),
            description: PatchField::Value(draft.description),
            image: PatchField::Value(draft.image),
            technologies: PatchField::Value(draft.technologies),
            url: draft.url.into(),
            github_url: draft.github_url.into(),
            status: PatchField::Value(draft.status),
            start_date: draft.start_date.into(),
            end_date: draft.end_date.into(),
        }
    }
}

fn image_or_placeholder(image: String) -> String {
    if image.trim().is_empty() {
        PROJECT_PLACEHOLDER_IMAGE.to_string()
    } else {
        image
    }
}

impl Entry for Project {
    type Draft = ProjectDraft;
    type Patch = ProjectPatch;

    const KIND: EntryKind = EntryKind::Project;

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn from_draft(id: EntityId, draft: ProjectDraft) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            image: image_or_placeholder(draft.image),
            technologies: draft.technologies,
            url: draft.url,
            github_url: draft.github_url,
            status: draft.status,
            start_date: draft.start_date,
            end_date: draft.end_date,
        }
    }

    fn apply_patch(&mut self, patch: ProjectPatch) {
        patch.title.apply_to(&mut self.title);
        patch.description.apply_to(&mut self.description);
        if let PatchField::Value(image) = patch.image {
            self.image = image_or_placeholder(image);
        }
        patch.technologies.apply_to(&mut self.technologies);
        patch.url.apply_to_optional(&mut self.url);
        patch.github_url.apply_to_optional(&mut self.github_url);
        patch.status.apply_to(&mut self.status);
        patch.start_date.apply_to_optional(&mut self.start_date);
        patch.end_date.apply_to_optional(&mut self.end_date);
    }

    fn refresh_derived(&mut self) {
        self.image = image_or_placeholder(std::mem::take(&mut self.image));
    }

    fn collection(data: &PortfolioData) -> &EntryCollection<Self> {
        &data.projects
    }

    fn collection_mut(data: &mut PortfolioData) -> &mut EntryCollection<Self> {
        &mut data.projects
    }
}

//
// ──────────────────────────────────────────────────────────
// Social
// ──────────────────────────────────────────────────────────
//

/// Keys into the fixed icon set the client knows how to draw.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SocialIcon {
    Instagram,
    Linkedin,
    Youtube,
    Twitter,
    Behance,
    Circle,
    Github,
    Globe,
}

impl SocialIcon {
    pub fn key(&self) -> &'static str {
        match self {
            SocialIcon::Instagram => "instagram",
            SocialIcon::Linkedin => "linkedin",
            SocialIcon::Youtube => "youtube",
            SocialIcon::Twitter => "twitter",
            SocialIcon::Behance => "behance",
            SocialIcon::Circle => "circle",
            SocialIcon::Github => "github",
            SocialIcon::Globe => "globe",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "instagram" => Some(SocialIcon::Instagram),
            "linkedin" => Some(SocialIcon::Linkedin),
            "youtube" => Some(SocialIcon::Youtube),
            "twitter" => Some(SocialIcon::Twitter),
            "behance" => Some(SocialIcon::Behance),
            "circle" => Some(SocialIcon::Circle),
            "github" => Some(SocialIcon::Github),
            "globe" => Some(SocialIcon::Globe),
            _ => None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct Social {
    pub id: EntityId,
    pub platform: String,
    pub handle: String,
    pub icon: SocialIcon,
    pub url: String,
}

#[derive(Debug, Clone)]
pub struct SocialDraft {
    pub platform: String,
    pub handle: String,
    pub icon: SocialIcon,
    pub url: String,
}

#[derive(Debug, Clone, Default)]
pub struct SocialPatch {
    pub platform: PatchField<String>,
    pub handle: PatchField<String>,
    pub icon: PatchField<SocialIcon>,
    pub url: PatchField<String>,
}

impl From<SocialDraft> for SocialPatch {
    fn from(draft: SocialDraft) -> Self {
        Self {
            platform: PatchField::Value(draft.platform),
            handle: PatchField::Value(draft.handle),
            icon: PatchField::Value(draft.icon),
            url: PatchField::Value(draft.url),
        }
    }
}

impl Entry for Social {
    type Draft = SocialDraft;
    type Patch = SocialPatch;

    const KIND: EntryKind = EntryKind::Social;

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn from_draft(id: EntityId, draft: SocialDraft) -> Self {
        Self {
            id,
            platform: draft.platform,
            handle: draft.handle,
            icon: draft.icon,
            url: draft.url,
        }
    }

    fn apply_patch(&mut self, patch: SocialPatch) {
        patch.platform.apply_to(&mut self.platform);
        patch.handle.apply_to(&mut self.handle);
        patch.icon.apply_to(&mut self.icon);
        patch.url.apply_to(&mut self.url);
    }

    fn collection(data: &PortfolioData) -> &EntryCollection<Self> {
        &data.socials
    }

    fn collection_mut(data: &mut PortfolioData) -> &mut EntryCollection<Self> {
        &mut data.socials
    }
}

//
// ──────────────────────────────────────────────────────────
// Whole portfolio
// ──────────────────────────────────────────────────────────
//

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, ToSchema)]
#[serde(default)]
pub struct PortfolioData {
    pub profile: Profile,
    #[schema(value_type = Vec<String>)]
    pub skills: TagList,
    #[schema(value_type = Vec<String>)]
    pub technologies: TagList,
    #[schema(value_type = Vec<Education>)]
    pub education: EntryCollection<Education>,
    #[schema(value_type = Vec<Experience>)]
    pub experience: EntryCollection<Experience>,
    #[schema(value_type = Vec<Certification>)]
    pub certifications: EntryCollection<Certification>,
    #[schema(value_type = Vec<Project>)]
    pub projects: EntryCollection<Project>,
    #[schema(value_type = Vec<Social>)]
    pub socials: EntryCollection<Social>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Duplicate {kind} id: {id}")]
pub struct DuplicateIdError {
    pub kind: &'static str,
    pub id: EntityId,
}

impl PortfolioData {
    /// Prepares data loaded from outside the process: rejects repeated ids
    /// and recomputes every derived field.
    pub fn normalized(mut self) -> Result<Self, DuplicateIdError> {
        check_unique(&self.education)?;
        check_unique(&self.experience)?;
        check_unique(&self.certifications)?;
        check_unique(&self.projects)?;
        check_unique(&self.socials)?;

        self.education.refresh_derived();
        self.experience.refresh_derived();
        self.certifications.refresh_derived();
        self.projects.refresh_derived();
        self.socials.refresh_derived();
        Ok(self)
    }
}

fn check_unique<T: Entry>(collection: &EntryCollection<T>) -> Result<(), DuplicateIdError> {
    match collection.first_duplicate_id() {
        Some(id) => Err(DuplicateIdError {
            kind: T::KIND.as_str(),
            id: id.clone(),
        }),
        None => Ok(()),
    }
}
