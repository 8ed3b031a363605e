//! Read-only article source supplied by the hosting application.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::articles::{Article, ArticleId};

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("article source unavailable: {0}")]
    Unavailable(String),
}

/// Supplies the article collection. Implementations are read-only from the
/// core's perspective; the core never writes back.
#[async_trait]
pub trait ArticleSource: Send + Sync {
    /// The full collection, in source order.
    async fn articles(&self) -> Result<Vec<Article>, SourceError>;

    /// Single-record lookup; `None` when the id is unknown.
    async fn article(&self, id: ArticleId) -> Result<Option<Article>, SourceError>;
}
