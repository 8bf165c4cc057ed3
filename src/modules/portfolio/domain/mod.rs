mod collection;
mod derived;
mod entities;
mod entity_id;

pub use collection::{Entry, EntryCollection, EntryKind, TagList};
pub use entities::{
    Certification, CertificationDraft, CertificationPatch, DuplicateIdError, Education,
    EducationDraft, EducationPatch, Experience, ExperienceDraft, ExperiencePatch, PortfolioData,
    Profile, ProfilePatch, Project, ProjectDraft, ProjectPatch, ProjectStatus, Social,
    SocialDraft, SocialIcon, SocialPatch, PROJECT_PLACEHOLDER_IMAGE,
};
pub use entity_id::EntityId;
