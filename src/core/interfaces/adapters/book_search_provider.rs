use async_trait::async_trait;

use crate::core::models::Book;

/// Failures never reach the caller: an unreachable endpoint, a bad status or a
/// malformed body all come back as an empty list.
#[async_trait]
pub trait BookSearchProvider: Send + Sync {
    async fn search_books(&self, query: &str) -> Vec<Book>;
}
