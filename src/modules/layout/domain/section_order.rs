use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Education,
    Technologies,
    Experience,
    Certifications,
    Projects,
}

impl SectionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKind::Education => "education",
            SectionKind::Technologies => "technologies",
            SectionKind::Experience => "experience",
            SectionKind::Certifications => "certifications",
            SectionKind::Projects => "projects",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct SectionDescriptor {
    #[schema(example = "education")]
    pub id: String,
    pub kind: SectionKind,
    #[schema(example = "Education")]
    pub title: String,
    #[schema(example = 0)]
    pub order: usize,
}

impl SectionDescriptor {
    fn new(kind: SectionKind, title: &str, order: usize) -> Self {
        Self {
            id: kind.as_str().to_string(),
            kind,
            title: title.to_string(),
            order,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReorderError {
    #[error("Cannot move section {from} to {to}: only {len} sections exist")]
    IndexOutOfRange { from: usize, to: usize, len: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SetSectionsError {
    #[error("Section id must not be empty")]
    EmptyId,

    #[error("Section id '{0}' appears more than once")]
    DuplicateId(String),

    #[error("Section kind '{}' appears more than once", .0.as_str())]
    DuplicateKind(SectionKind),
}

/// The content sections in render order.
///
/// Stored sorted, with every `order` equal to the section's position. Both
/// mutations restore that before returning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionOrder {
    sections: Vec<SectionDescriptor>,
}

impl Default for SectionOrder {
    fn default() -> Self {
        Self {
            sections: vec![
                SectionDescriptor::new(SectionKind::Education, "Education", 0),
                SectionDescriptor::new(SectionKind::Technologies, "Technologies Used", 1),
                SectionDescriptor::new(SectionKind::Experience, "Professional Experience", 2),
                SectionDescriptor::new(SectionKind::Certifications, "Certifications & Awards", 3),
                SectionDescriptor::new(SectionKind::Projects, "Projects", 4),
            ],
        }
    }
}

impl SectionOrder {
    pub fn sections(&self) -> &[SectionDescriptor] {
        &self.sections
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Moves the section at `from` so it ends up at `to`; the sections in
    /// between shift by one.
    pub fn reorder(&mut self, from: usize, to: usize) -> Result<(), ReorderError> {
        let len = self.sections.len();
        if from >= len || to >= len {
            return Err(ReorderError::IndexOutOfRange { from, to, len });
        }

        let moved = self.sections.remove(from);
        self.sections.insert(to, moved);
        self.renumber();
        Ok(())
    }

    /// Replaces every section. Incoming `order` values only decide the
    /// sequence (ties keep their given order); they are renumbered from 0.
    pub fn replace(&mut self, mut sections: Vec<SectionDescriptor>) -> Result<(), SetSectionsError> {
        let mut ids = HashSet::new();
        let mut kinds = HashSet::new();
        for section in &sections {
            if section.id.trim().is_empty() {
                return Err(SetSectionsError::EmptyId);
            }
            if !ids.insert(section.id.as_str()) {
                return Err(SetSectionsError::DuplicateId(section.id.clone()));
            }
            if !kinds.insert(section.kind) {
                return Err(SetSectionsError::DuplicateKind(section.kind));
            }
        }

        sections.sort_by_key(|section| section.order);
        self.sections = sections;
        self.renumber();
        Ok(())
    }

    fn renumber(&mut self) {
        for (index, section) in self.sections.iter_mut().enumerate() {
            section.order = index;
        }
    }
}
