use async_trait::async_trait;
use tracing::info;

use crate::modules::edit_mode::application::ports::incoming::use_cases::EditModeUseCase;
use crate::modules::edit_mode::application::ports::outgoing::EditModeStore;

pub struct EditModeService<S>
where
    S: EditModeStore,
{
    store: S,
}

impl<S> EditModeService<S>
where
    S: EditModeStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S> EditModeUseCase for EditModeService<S>
where
    S: EditModeStore + Send + Sync,
{
    async fn is_enabled(&self) -> bool {
        self.store.get().await
    }

    async fn toggle(&self) -> bool {
        let enabled = self.store.toggle().await;
        info!(enabled, "Edit mode toggled");
        enabled
    }

    async fn set(&self, enabled: bool) -> bool {
        self.store.set(enabled).await;
        info!(enabled, "Edit mode set");
        enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mockall::{mock, predicate::*};

    mock! {
        pub EditModeStoreMock {}
        #[async_trait]
        impl EditModeStore for EditModeStoreMock {
            async fn get(&self) -> bool;
            async fn toggle(&self) -> bool;
            async fn set(&self, enabled: bool);
        }
    }

    #[tokio::test]
    async fn is_enabled_reads_the_store() {
        let mut store = MockEditModeStoreMock::new();
        store.expect_get().times(1).returning(|| true);

        let service = EditModeService::new(store);

        assert!(service.is_enabled().await);
    }

    #[tokio::test]
    async fn toggle_returns_the_new_value() {
        let mut store = MockEditModeStoreMock::new();
        store.expect_toggle().times(1).returning(|| false);

        let service = EditModeService::new(store);

        assert!(!service.toggle().await);
    }

    #[tokio::test]
    async fn set_writes_the_requested_value() {
        let mut store = MockEditModeStoreMock::new();
        store
            .expect_set()
            .with(eq(true))
            .times(1)
            .returning(|_| ());

        let service = EditModeService::new(store);

        assert!(service.set(true).await);
    }
}
