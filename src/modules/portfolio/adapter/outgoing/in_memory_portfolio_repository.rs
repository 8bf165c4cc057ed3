use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::modules::portfolio::application::ports::outgoing::{
    PortfolioRepository, PortfolioRepositoryError, TagKind,
};
use crate::modules::portfolio::domain::{
    DuplicateIdError, Entry, EntityId, PortfolioData, Profile, ProfilePatch, TagList,
};

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Cannot read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid seed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    DuplicateId(#[from] DuplicateIdError),
}

/// Process-lifetime portfolio store. Cloning shares the same data.
#[derive(Clone, Default)]
pub struct InMemoryPortfolioRepository {
    data: Arc<RwLock<PortfolioData>>,
}

impl InMemoryPortfolioRepository {
    pub fn new(data: PortfolioData) -> Self {
        Self {
            data: Arc::new(RwLock::new(data)),
        }
    }

    /// Loads the initial portfolio from a JSON file shaped like the
    /// `GET /api/portfolio` payload. Derived fields in the file are ignored.
    pub fn from_seed_file(path: &Path) -> Result<Self, SeedError> {
        let raw = std::fs::read_to_string(path)?;
        let data: PortfolioData = serde_json::from_str(&raw)?;
        Ok(Self::new(data.normalized()?))
    }
}

fn tags_mut(data: &mut PortfolioData, kind: TagKind) -> &mut TagList {
    match kind {
        TagKind::Skills => &mut data.skills,
        TagKind::Technologies => &mut data.technologies,
    }
}

#[async_trait]
impl PortfolioRepository for InMemoryPortfolioRepository {
    async fn snapshot(&self) -> Result<PortfolioData, PortfolioRepositoryError> {
        Ok(self.data.read().clone())
    }

    async fn update_profile(
        &self,
        patch: ProfilePatch,
    ) -> Result<Profile, PortfolioRepositoryError> {
        let mut data = self.data.write();
        data.profile.apply_patch(patch);
        Ok(data.profile.clone())
    }

    async fn add_tag(
        &self,
        kind: TagKind,
        value: String,
    ) -> Result<Vec<String>, PortfolioRepositoryError> {
        let mut data = self.data.write();
        let tags = tags_mut(&mut data, kind);
        tags.add(value);
        Ok(tags.values().to_vec())
    }

    async fn remove_tag(
        &self,
        kind: TagKind,
        value: &str,
    ) -> Result<Vec<String>, PortfolioRepositoryError> {
        let mut data = self.data.write();
        let tags = tags_mut(&mut data, kind);
        tags.remove(value);
        Ok(tags.values().to_vec())
    }

    async fn add_entry<T: Entry>(&self, draft: T::Draft) -> Result<T, PortfolioRepositoryError> {
        let mut data = self.data.write();
        Ok(T::collection_mut(&mut data).add(draft))
    }

    async fn update_entry<T: Entry>(
        &self,
        id: &EntityId,
        patch: T::Patch,
    ) -> Result<Option<T>, PortfolioRepositoryError> {
        let mut data = self.data.write();
        Ok(T::collection_mut(&mut data).update(id, patch))
    }

    async fn delete_entry<T: Entry>(&self, id: &EntityId) -> Result<bool, PortfolioRepositoryError> {
        let mut data = self.data.write();
        Ok(T::collection_mut(&mut data).delete(id))
    }
}
