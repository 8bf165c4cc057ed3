use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::entities::PortfolioData;
use super::entity_id::EntityId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Education,
    Experience,
    Certification,
    Project,
    Social,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Education => "education",
            EntryKind::Experience => "experience",
            EntryKind::Certification => "certification",
            EntryKind::Project => "project",
            EntryKind::Social => "social",
        }
    }
}

/// A record living in one of the id-addressed portfolio collections.
///
/// `Draft` is the record without its id (what a create form produces) and
/// `Patch` is the partial update. Derived fields are never part of either:
/// the entry recomputes them in `from_draft` and `apply_patch`.
pub trait Entry: Clone + Serialize + Send + Sync + 'static {
    type Draft: Send + 'static;
    type Patch: From<Self::Draft> + Default + Send + 'static;

    const KIND: EntryKind;

    fn id(&self) -> &EntityId;

    fn from_draft(id: EntityId, draft: Self::Draft) -> Self;

    fn apply_patch(&mut self, patch: Self::Patch);

    /// Recomputes derived fields after the record was loaded from outside.
    fn refresh_derived(&mut self) {}

    fn collection(data: &PortfolioData) -> &EntryCollection<Self>;

    fn collection_mut(data: &mut PortfolioData) -> &mut EntryCollection<Self>;
}

/// Ordered, id-addressed list of entries. Insertion order is display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryCollection<T> {
    items: Vec<T>,
}

impl<T> Default for EntryCollection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Entry> EntryCollection<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &EntityId) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Appends a new entry under a freshly generated id.
    pub fn add(&mut self, draft: T::Draft) -> T {
        let mut id = EntityId::generate();
        while self.get(&id).is_some() {
            id = EntityId::generate();
        }

        let entry = T::from_draft(id, draft);
        self.items.push(entry.clone());
        entry
    }

    /// Merges `patch` into the entry with `id`. Returns `None` and leaves the
    /// collection untouched when no entry matches.
    pub fn update(&mut self, id: &EntityId, patch: T::Patch) -> Option<T> {
        let entry = self.items.iter_mut().find(|item| item.id() == id)?;
        entry.apply_patch(patch);
        Some(entry.clone())
    }

    /// Removes the entry with `id`; `false` when nothing matched.
    pub fn delete(&mut self, id: &EntityId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        self.items.len() != before
    }

    pub(crate) fn first_duplicate_id(&self) -> Option<&EntityId> {
        let mut seen = HashSet::new();
        self.items
            .iter()
            .map(Entry::id)
            .find(|id| !seen.insert(*id))
    }

    pub(crate) fn refresh_derived(&mut self) {
        self.items.iter_mut().for_each(Entry::refresh_derived);
    }
}

/// Plain ordered list of strings (skills, technologies). Duplicates are
/// allowed and removal is by value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagList {
    values: Vec<String>,
}

impl TagList {
    pub fn new(values: Vec<String>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn add(&mut self, value: String) {
        self.values.push(value);
    }

    /// Removes every entry equal to `value`, returning how many went away.
    pub fn remove(&mut self, value: &str) -> usize {
        let before = self.values.len();
        self.values.retain(|v| v != value);
        before - self.values.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::portfolio::domain::entities::{Social, SocialDraft, SocialIcon, SocialPatch};
    use crate::shared::PatchField;

    fn social_draft(platform: &str) -> SocialDraft {
        SocialDraft {
            platform: platform.to_string(),
            handle: "@robin".to_string(),
            icon: SocialIcon::Github,
            url: "https://github.com/robin".to_string(),
        }
    }

    fn collection_with(n: usize) -> EntryCollection<Social> {
        let mut collection = EntryCollection::default();
        for i in 0..n {
            collection.add(social_draft(&format!("Platform {i}")));
        }
        collection
    }

    #[test]
    fn add_grows_by_one_with_unique_id() {
        let mut collection = collection_with(3);
        let existing: Vec<EntityId> = collection.items().iter().map(|s| s.id.clone()).collect();

        let added = collection.add(social_draft("GitHub"));

        assert_eq!(collection.len(), 4);
        assert!(!existing.contains(&added.id));
        assert_eq!(collection.items().last(), Some(&added));
    }

    #[test]
    fn update_changes_only_patched_fields() {
        let mut collection = collection_with(2);
        let target = collection.items()[0].clone();
        let untouched = collection.items()[1].clone();

        let updated = collection
            .update(
                &target.id,
                SocialPatch {
                    handle: PatchField::Value("@hood".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.handle, "@hood");
        assert_eq!(updated.platform, target.platform);
        assert_eq!(updated.url, target.url);
        assert_eq!(updated.icon, target.icon);
        assert_eq!(collection.items()[1], untouched);
    }

    #[test]
    fn update_on_missing_id_is_a_no_op() {
        let mut collection = collection_with(2);
        let before = collection.clone();

        let result = collection.update(
            &EntityId::from("missing"),
            SocialPatch {
                handle: PatchField::Value("@nobody".to_string()),
                ..Default::default()
            },
        );

        assert!(result.is_none());
        assert_eq!(collection, before);
    }

    #[test]
    fn delete_removes_exactly_the_matching_entry() {
        let mut collection = collection_with(3);
        let victim = collection.items()[1].id.clone();

        assert!(collection.delete(&victim));
        assert_eq!(collection.len(), 2);
        assert!(collection.get(&victim).is_none());
    }

    #[test]
    fn delete_on_missing_id_is_a_no_op() {
        let mut collection = collection_with(2);
        let before = collection.clone();

        assert!(!collection.delete(&EntityId::from("missing")));
        assert_eq!(collection, before);
    }

    #[test]
    fn removing_a_tag_removes_every_copy() {
        let mut tags = TagList::default();
        tags.add("Go".to_string());
        tags.add("Go".to_string());

        assert_eq!(tags.remove("Go"), 2);
        assert!(tags.values().is_empty());
    }

    #[test]
    fn removing_a_tag_keeps_other_values_in_order() {
        let mut tags = TagList::new(vec!["Rust".into(), "Go".into(), "SQL".into(), "Go".into()]);

        tags.remove("Go");

        assert_eq!(tags.values(), ["Rust".to_string(), "SQL".to_string()]);
    }

    #[test]
    fn duplicate_ids_are_detected() {
        let social = Social::from_draft(EntityId::from("same"), social_draft("A"));
        let collection = EntryCollection::new(vec![social.clone(), social]);

        assert_eq!(collection.first_duplicate_id(), Some(&EntityId::from("same")));
    }
}
