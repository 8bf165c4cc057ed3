use async_trait::async_trait;

/// Process-wide edit-mode flag. Starts disabled.
#[async_trait]
pub trait EditModeStore: Send + Sync {
    async fn get(&self) -> bool;

    /// Flips the flag atomically and returns the new value.
    async fn toggle(&self) -> bool;

    async fn set(&self, enabled: bool);
}
