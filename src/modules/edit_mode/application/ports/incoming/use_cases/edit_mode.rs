use async_trait::async_trait;

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
// Every operation returns the flag as it is afterwards.
//

#[async_trait]
pub trait EditModeUseCase: Send + Sync {
    async fn is_enabled(&self) -> bool;

    async fn toggle(&self) -> bool;

    async fn set(&self, enabled: bool) -> bool;
}
