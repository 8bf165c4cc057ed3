use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::edit_mode::application::ports::outgoing::EditModeStore;

#[derive(Clone, Default)]
pub struct AtomicEditModeStore {
    enabled: Arc<AtomicBool>,
}

impl AtomicEditModeStore {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled: Arc::new(AtomicBool::new(enabled)),
        }
    }
}

#[async_trait]
impl EditModeStore for AtomicEditModeStore {
    async fn get(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }

    async fn toggle(&self) -> bool {
        !self.enabled.fetch_xor(true, Ordering::SeqCst)
    }

    async fn set(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::SeqCst);
    }
}
