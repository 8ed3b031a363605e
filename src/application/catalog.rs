//! Catalog service: the operations the blog pages perform, composed from the
//! article source, the listing engine and the renderer.

use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use crate::application::listing::{self, InvalidQuery, Listing, Query};
use crate::application::render::{self, Document, MalformedInput};
use crate::application::source::{ArticleSource, SourceError};
use crate::domain::articles::{Article, ArticleId};
use crate::domain::types::SortKey;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("article `{0}` not found")]
    NotFound(String),
    #[error(transparent)]
    Query(#[from] InvalidQuery),
    #[error(transparent)]
    Render(#[from] MalformedInput),
    #[error(transparent)]
    Source(#[from] SourceError),
}

/// Read-side facade over one article source.
#[derive(Clone)]
pub struct Catalog {
    source: Arc<dyn ArticleSource>,
}

impl Catalog {
    pub fn new(source: Arc<dyn ArticleSource>) -> Self {
        Self { source }
    }

    /// Evaluate a listing query against the source's current collection.
    pub async fn search(&self, query: &Query) -> Result<Listing, CatalogError> {
        let articles = self.source.articles().await?;
        Ok(listing::execute(&articles, query)?)
    }

    /// Fetch one published article. Unknown and unpublished ids are both
    /// `NotFound`: drafts are invisible to public reads.
    pub async fn article(&self, id: ArticleId) -> Result<Article, CatalogError> {
        self.source
            .article(id)
            .await?
            .filter(|article| article.published)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    /// Fetch one published article by slug.
    pub async fn article_by_slug(&self, slug: &str) -> Result<Article, CatalogError> {
        let articles = self.source.articles().await?;
        articles
            .into_iter()
            .find(|article| article.published && article.slug == slug)
            .ok_or_else(|| CatalogError::NotFound(slug.to_string()))
    }

    /// Published articles to suggest next to `id`, newest first, excluding
    /// the subject itself.
    pub async fn related(&self, id: ArticleId, limit: u32) -> Result<Vec<Article>, CatalogError> {
        if limit == 0 {
            return Ok(Vec::new());
        }

        let articles = self.source.articles().await?;
        let pool: Vec<Article> = articles
            .into_iter()
            .filter(|article| article.id != id)
            .collect();
        let query = Query::new("", SortKey::Newest, 1, limit);
        let listing = listing::execute(&pool, &query)?;

        debug!(article = %id, related = listing.items.len(), "related articles selected");
        Ok(listing.items)
    }

    /// Detail-page composition: article lookup plus body rendering.
    pub async fn rendered(&self, id: ArticleId) -> Result<(Article, Document), CatalogError> {
        let article = self.article(id).await?;
        let document = render::render(&article.body)?;
        Ok((article, document))
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use crate::domain::articles::Author;
    use crate::infra::memory::InMemoryArticles;

    use super::*;

    fn catalog() -> Catalog {
        let articles = vec![
            Article::new(
                ArticleId(1),
                "Published Piece",
                "# Hello\n\nA **fine** body.",
                true,
                datetime!(2024-01-01 0:00 UTC),
                Author::new(1, "John Doe", "john@example.com"),
            )
            .expect("valid article"),
            Article::new(
                ArticleId(2),
                "Another Piece",
                "Plain body.",
                true,
                datetime!(2024-01-02 0:00 UTC),
                Author::new(2, "Jane Smith", "jane@example.com"),
            )
            .expect("valid article"),
            Article::new(
                ArticleId(3),
                "Unlisted Draft",
                "Unfinished.",
                false,
                datetime!(2024-01-03 0:00 UTC),
                Author::new(2, "Jane Smith", "jane@example.com"),
            )
            .expect("valid article"),
        ];
        let source = InMemoryArticles::new(articles).expect("valid collection");
        Catalog::new(Arc::new(source))
    }

    #[tokio::test]
    async fn search_runs_the_listing_pipeline() {
        let listing = catalog()
            .search(&Query::new("", SortKey::Newest, 1, 10))
            .await
            .expect("listing");

        let ids: Vec<u64> = listing.items.iter().map(|article| article.id.0).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[tokio::test]
    async fn unknown_and_unpublished_ids_are_not_found() {
        let catalog = catalog();

        assert!(matches!(
            catalog.article(ArticleId(99)).await,
            Err(CatalogError::NotFound(_))
        ));
        assert!(matches!(
            catalog.article(ArticleId(3)).await,
            Err(CatalogError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn slug_lookup_finds_published_articles_only() {
        let catalog = catalog();

        let article = catalog
            .article_by_slug("published-piece")
            .await
            .expect("article");
        assert_eq!(article.id, ArticleId(1));

        assert!(matches!(
            catalog.article_by_slug("unlisted-draft").await,
            Err(CatalogError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn related_excludes_the_subject_and_drafts() {
        let related = catalog().related(ArticleId(1), 3).await.expect("related");

        let ids: Vec<u64> = related.iter().map(|article| article.id.0).collect();
        assert_eq!(ids, vec![2]);
    }

    #[tokio::test]
    async fn zero_related_limit_is_empty_not_an_error() {
        let related = catalog().related(ArticleId(1), 0).await.expect("related");
        assert!(related.is_empty());
    }

    #[tokio::test]
    async fn rendered_composes_lookup_and_rendering() {
        let (article, document) = catalog().rendered(ArticleId(1)).await.expect("rendered");

        assert_eq!(article.id, ArticleId(1));
        assert_eq!(document.blocks.len(), 2);
        assert_eq!(document.plain_text(), "Hello\nA fine body.");
    }
}
