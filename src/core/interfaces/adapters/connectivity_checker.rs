use async_trait::async_trait;

#[async_trait]
pub trait ConnectivityChecker: Send + Sync {
    async fn is_connected(&self) -> bool;
}
