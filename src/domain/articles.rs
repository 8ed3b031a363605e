//! Article records and the invariants an article collection must uphold.

mod data;

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;
use time::OffsetDateTime;

use crate::domain::error::DomainError;
use crate::domain::slug;

pub use data::seed_articles;

/// Unique article identity, immutable for the lifetime of the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ArticleId(pub u64);

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Author {
    pub id: u64,
    pub name: String,
    pub email: String,
}

impl Author {
    pub fn new(id: u64, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }
}

/// One blog post record. Constructed once from a source collection; the core
/// only ever reads articles.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Article {
    pub id: ArticleId,
    pub slug: String,
    pub title: String,
    pub body: String,
    pub published: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub author: Author,
    pub thumbnail: Option<String>,
    pub read_time: Option<u32>,
    pub tags: Vec<String>,
}

impl Article {
    /// Build an article with a slug derived from its title.
    pub fn new(
        id: ArticleId,
        title: impl Into<String>,
        body: impl Into<String>,
        published: bool,
        created_at: OffsetDateTime,
        author: Author,
    ) -> Result<Self, DomainError> {
        let title = title.into();
        let slug = slug::derive_slug(&title)
            .map_err(|err| DomainError::validation(format!("title `{title}`: {err}")))?;

        Ok(Self {
            id,
            slug,
            title,
            body: body.into(),
            published,
            created_at,
            author,
            thumbnail: None,
            read_time: None,
            tags: Vec::new(),
        })
    }

    pub fn with_thumbnail(mut self, url: impl Into<String>) -> Self {
        self.thumbnail = Some(url.into());
        self
    }

    /// Estimated reading time in minutes. Must be positive; see [`Article::validate`].
    pub fn with_read_time(mut self, minutes: u32) -> Self {
        self.read_time = Some(minutes);
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Check record-level invariants: non-empty title, positive read time.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.title.trim().is_empty() {
            return Err(DomainError::validation("article title must not be empty"));
        }
        if self.read_time == Some(0) {
            return Err(DomainError::validation(format!(
                "article `{}` has a zero read time",
                self.id
            )));
        }
        Ok(())
    }
}

/// Check collection-level invariants: every record valid, ids and slugs unique.
pub fn validate_collection(articles: &[Article]) -> Result<(), DomainError> {
    let mut ids = HashSet::new();
    let mut slugs = HashSet::new();

    for article in articles {
        article.validate()?;
        if !ids.insert(article.id) {
            return Err(DomainError::invariant(format!(
                "duplicate article id `{}`",
                article.id
            )));
        }
        if !slugs.insert(article.slug.as_str()) {
            return Err(DomainError::invariant(format!(
                "duplicate article slug `{}`",
                article.slug
            )));
        }
    }

    Ok(())
}
