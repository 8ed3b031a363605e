//! In-memory article source: mock data standing in for a real backend.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::application::source::{ArticleSource, SourceError};
use crate::domain::articles::{self, Article, ArticleId};
use crate::domain::error::DomainError;

/// Read-only collection with an optional simulated fetch delay, standing in
/// for the network round-trip a real backend would add. The delay lives
/// here, outside the pure listing and rendering components.
#[derive(Debug, Clone)]
pub struct InMemoryArticles {
    articles: Vec<Article>,
    latency: Duration,
}

impl InMemoryArticles {
    /// Accept a collection after checking its invariants.
    pub fn new(articles: Vec<Article>) -> Result<Self, DomainError> {
        articles::validate_collection(&articles)?;
        Ok(Self {
            articles,
            latency: Duration::ZERO,
        })
    }

    /// Source seeded with the bundled fixture dataset.
    pub fn seeded() -> Self {
        Self::new(articles::seed_articles()).expect("seed dataset upholds collection invariants")
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    async fn simulate_fetch(&self) {
        if !self.latency.is_zero() {
            debug!(latency_ms = self.latency.as_millis() as u64, "simulating fetch latency");
            tokio::time::sleep(self.latency).await;
        }
    }
}

#[async_trait]
impl ArticleSource for InMemoryArticles {
    async fn articles(&self) -> Result<Vec<Article>, SourceError> {
        self.simulate_fetch().await;
        Ok(self.articles.clone())
    }

    async fn article(&self, id: ArticleId) -> Result<Option<Article>, SourceError> {
        self.simulate_fetch().await;
        Ok(self
            .articles
            .iter()
            .find(|article| article.id == id)
            .cloned())
    }
}
