use async_trait::async_trait;
use promise_core::CoreResult;

/// Read-only lookup of a value by its string id
#[async_trait]
pub trait ReadOnlyDao<V>: Send + Sync {
    async fn get(&self, id: &str) -> CoreResult<V>;
}
