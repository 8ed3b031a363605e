//! Deterministic filter → sort → paginate pipeline over an article collection.
//!
//! The pipeline is a pure function of its inputs: no I/O, no shared state,
//! identical inputs produce identical listings. Callers own query state and
//! re-invoke on every change.

use std::cmp::Ordering;

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::application::pagination;
use crate::domain::articles::Article;
use crate::domain::types::SortKey;

/// Rejection reasons for a malformed listing request. Recoverable: surface a
/// message and retry with corrected input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvalidQuery {
    #[error("unrecognized sort key `{key}`")]
    UnrecognizedSortKey { key: String },
    #[error("page number must be at least 1")]
    ZeroPage,
    #[error("page size must be at least 1")]
    ZeroPageSize,
}

/// A listing request: free-text term, sort order, 1-based page, page size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Query {
    pub search: String,
    pub sort: SortKey,
    pub page: u32,
    pub page_size: u32,
}

impl Query {
    pub fn new(search: impl Into<String>, sort: SortKey, page: u32, page_size: u32) -> Self {
        Self {
            search: search.into(),
            sort,
            page,
            page_size,
        }
    }

    /// Build a query from untyped UI state. The sort key arrives as text and
    /// unrecognized values are rejected here rather than silently defaulted.
    pub fn parse(
        search: impl Into<String>,
        sort: &str,
        page: u32,
        page_size: u32,
    ) -> Result<Self, InvalidQuery> {
        let sort = SortKey::try_from(sort).map_err(|()| InvalidQuery::UnrecognizedSortKey {
            key: sort.to_string(),
        })?;
        let query = Self::new(search, sort, page, page_size);
        query.validate()?;
        Ok(query)
    }

    pub fn validate(&self) -> Result<(), InvalidQuery> {
        if self.page == 0 {
            return Err(InvalidQuery::ZeroPage);
        }
        if self.page_size == 0 {
            return Err(InvalidQuery::ZeroPageSize);
        }
        Ok(())
    }
}

/// One page of results plus the pagination metadata the caller needs to
/// render page controls.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Listing {
    pub items: Vec<Article>,
    pub total_matched: usize,
    pub total_pages: u32,
    pub page: u32,
    pub page_size: u32,
}

impl Listing {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// 1-based inclusive range of the items shown on this page
    /// ("Showing 10 to 12 of 12"), or `None` for an empty page.
    pub fn shown_range(&self) -> Option<(usize, usize)> {
        if self.items.is_empty() {
            return None;
        }
        let start = (self.page as usize - 1) * self.page_size as usize + 1;
        Some((start, start + self.items.len() - 1))
    }
}

/// Evaluate a query against the collection.
///
/// Filtering keeps published articles whose title, body or author name
/// contains the search term case-insensitively (an empty term keeps all
/// published articles). Sorting is stable with explicit tie-breaks. A page
/// past the end returns an empty slice together with the real page count;
/// clamping is the caller's decision.
pub fn execute(articles: &[Article], query: &Query) -> Result<Listing, InvalidQuery> {
    query.validate()?;

    let mut matched: Vec<&Article> = articles
        .iter()
        .filter(|article| article.published && matches_term(article, &query.search))
        .collect();
    matched.sort_by(|a, b| compare(a, b, query.sort));

    let total_matched = matched.len();
    let total_pages = pagination::total_pages(total_matched, query.page_size);
    let bounds = pagination::page_bounds(total_matched, query.page, query.page_size);
    let items: Vec<Article> = matched[bounds].iter().map(|article| (*article).clone()).collect();

    debug!(
        search = %query.search,
        sort = %query.sort,
        page = query.page,
        total_matched,
        total_pages,
        "listing query evaluated"
    );

    Ok(Listing {
        items,
        total_matched,
        total_pages,
        page: query.page,
        page_size: query.page_size,
    })
}

fn matches_term(article: &Article, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    article.title.to_lowercase().contains(&needle)
        || article.body.to_lowercase().contains(&needle)
        || article.author.name.to_lowercase().contains(&needle)
}

fn compare(a: &Article, b: &Article, sort: SortKey) -> Ordering {
    match sort {
        SortKey::Newest => b
            .created_at
            .cmp(&a.created_at)
            .then_with(|| a.id.cmp(&b.id)),
        SortKey::Oldest => a
            .created_at
            .cmp(&b.created_at)
            .then_with(|| a.id.cmp(&b.id)),
        SortKey::Popular => read_minutes(b)
            .cmp(&read_minutes(a))
            .then_with(|| b.created_at.cmp(&a.created_at)),
        SortKey::Title => a.title.cmp(&b.title).then_with(|| a.id.cmp(&b.id)),
    }
}

fn read_minutes(article: &Article) -> u32 {
    article.read_time.unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use time::OffsetDateTime;
    use time::macros::datetime;

    use crate::domain::articles::{ArticleId, Author};

    use super::*;

    fn author(id: u64, name: &str) -> Author {
        Author::new(id, name, format!("{}@example.com", id))
    }

    fn article(id: u64, title: &str, created_at: OffsetDateTime) -> Article {
        Article::new(
            ArticleId(id),
            title,
            "Body text.",
            true,
            created_at,
            author(1, "John Doe"),
        )
        .expect("valid article")
    }

    fn collection() -> Vec<Article> {
        vec![
            article(1, "Alpha", datetime!(2024-01-01 0:00 UTC)),
            article(2, "Beta", datetime!(2024-01-02 0:00 UTC)),
        ]
    }

    fn ids(listing: &Listing) -> Vec<u64> {
        listing.items.iter().map(|article| article.id.0).collect()
    }

    #[test]
    fn newest_sorts_descending_by_creation_time() {
        let listing = execute(
            &collection(),
            &Query::new("", SortKey::Newest, 1, 10),
        )
        .expect("listing");

        assert_eq!(ids(&listing), vec![2, 1]);
        assert_eq!(listing.total_matched, 2);
        assert_eq!(listing.total_pages, 1);
    }

    #[test]
    fn oldest_sorts_ascending_by_creation_time() {
        let listing = execute(
            &collection(),
            &Query::new("", SortKey::Oldest, 1, 10),
        )
        .expect("listing");

        assert_eq!(ids(&listing), vec![1, 2]);
    }

    #[test]
    fn equal_timestamps_break_ties_by_ascending_id() {
        let when = datetime!(2024-01-01 0:00 UTC);
        let articles = vec![article(3, "C", when), article(1, "A", when), article(2, "B", when)];

        let newest = execute(&articles, &Query::new("", SortKey::Newest, 1, 10)).expect("listing");
        assert_eq!(ids(&newest), vec![1, 2, 3]);

        let oldest = execute(&articles, &Query::new("", SortKey::Oldest, 1, 10)).expect("listing");
        assert_eq!(ids(&oldest), vec![1, 2, 3]);
    }

    #[test]
    fn popular_sorts_by_read_time_with_missing_as_zero() {
        let articles = vec![
            article(1, "Short", datetime!(2024-01-03 0:00 UTC)).with_read_time(3),
            article(2, "Long", datetime!(2024-01-01 0:00 UTC)).with_read_time(12),
            article(3, "Unknown", datetime!(2024-01-02 0:00 UTC)),
        ];

        let listing =
            execute(&articles, &Query::new("", SortKey::Popular, 1, 10)).expect("listing");
        assert_eq!(ids(&listing), vec![2, 1, 3]);
    }

    #[test]
    fn popular_ties_break_by_newest_creation() {
        let articles = vec![
            article(1, "A", datetime!(2024-01-01 0:00 UTC)).with_read_time(5),
            article(2, "B", datetime!(2024-01-02 0:00 UTC)).with_read_time(5),
        ];

        let listing =
            execute(&articles, &Query::new("", SortKey::Popular, 1, 10)).expect("listing");
        assert_eq!(ids(&listing), vec![2, 1]);
    }

    #[test]
    fn title_sorts_lexicographically() {
        let articles = vec![
            article(1, "Zig for Rustaceans", datetime!(2024-01-01 0:00 UTC)),
            article(2, "Async in Depth", datetime!(2024-01-02 0:00 UTC)),
        ];

        let listing = execute(&articles, &Query::new("", SortKey::Title, 1, 10)).expect("listing");
        assert_eq!(ids(&listing), vec![2, 1]);
    }

    #[test]
    fn unpublished_articles_never_appear() {
        let mut articles = collection();
        articles.push(
            Article::new(
                ArticleId(3),
                "Hidden Draft",
                "Secret body.",
                false,
                datetime!(2024-06-01 0:00 UTC),
                author(2, "Jane Smith"),
            )
            .expect("valid article"),
        );

        for sort in SortKey::ALL {
            let listing = execute(&articles, &Query::new("", sort, 1, 10)).expect("listing");
            assert!(!ids(&listing).contains(&3));
        }

        // Not even when the term only matches the draft.
        let listing =
            execute(&articles, &Query::new("Hidden", SortKey::Newest, 1, 10)).expect("listing");
        assert_eq!(listing.total_matched, 0);
        assert_eq!(listing.total_pages, 1);
    }

    #[test]
    fn search_is_case_insensitive_over_all_fields() {
        let mut articles = collection();
        articles[0].body = "Deep dive into WebAssembly internals.".to_string();
        articles[1].author = author(2, "Jane Smith");

        let by_title = execute(&articles, &Query::new("ALPHA", SortKey::Newest, 1, 10)).unwrap();
        assert_eq!(ids(&by_title), vec![1]);

        let by_body =
            execute(&articles, &Query::new("webassembly", SortKey::Newest, 1, 10)).unwrap();
        assert_eq!(ids(&by_body), vec![1]);

        let by_author = execute(&articles, &Query::new("jane", SortKey::Newest, 1, 10)).unwrap();
        assert_eq!(ids(&by_author), vec![2]);
    }

    #[test]
    fn non_matching_term_yields_empty_first_page() {
        let listing = execute(
            &collection(),
            &Query::new("quantum", SortKey::Newest, 1, 10),
        )
        .expect("listing");

        assert!(listing.is_empty());
        assert_eq!(listing.total_matched, 0);
        assert_eq!(listing.total_pages, 1);
        assert_eq!(listing.shown_range(), None);
    }

    #[test]
    fn page_past_the_end_is_reported_not_clamped() {
        let listing = execute(
            &collection(),
            &Query::new("", SortKey::Newest, 2, 10),
        )
        .expect("listing");

        assert!(listing.is_empty());
        assert_eq!(listing.total_matched, 2);
        assert_eq!(listing.total_pages, 1);
        assert_eq!(listing.page, 2);
    }

    #[test]
    fn pagination_slices_in_sorted_order() {
        let articles: Vec<Article> = (1..=5)
            .map(|id| {
                article(
                    id,
                    &format!("Article {id}"),
                    datetime!(2024-01-01 0:00 UTC) + time::Duration::days(id as i64),
                )
            })
            .collect();

        let first = execute(&articles, &Query::new("", SortKey::Newest, 1, 2)).unwrap();
        assert_eq!(ids(&first), vec![5, 4]);
        assert_eq!(first.total_pages, 3);
        assert_eq!(first.shown_range(), Some((1, 2)));

        let last = execute(&articles, &Query::new("", SortKey::Newest, 3, 2)).unwrap();
        assert_eq!(ids(&last), vec![1]);
        assert_eq!(last.shown_range(), Some((5, 5)));
    }

    #[test]
    fn parse_rejects_unrecognized_sort_key() {
        let err = Query::parse("", "bogus", 1, 10).expect_err("rejected");
        assert_eq!(
            err,
            InvalidQuery::UnrecognizedSortKey {
                key: "bogus".to_string()
            }
        );
    }

    #[test]
    fn zero_page_and_page_size_are_rejected() {
        assert_eq!(
            execute(&collection(), &Query::new("", SortKey::Newest, 0, 10)),
            Err(InvalidQuery::ZeroPage)
        );
        assert_eq!(
            execute(&collection(), &Query::new("", SortKey::Newest, 1, 0)),
            Err(InvalidQuery::ZeroPageSize)
        );
    }

    #[test]
    fn execution_is_idempotent_and_sorting_stable() {
        let articles = collection();
        let query = Query::new("", SortKey::Title, 1, 10);

        let first = execute(&articles, &query).expect("listing");
        let second = execute(&articles, &query).expect("listing");
        assert_eq!(first, second);

        // Re-sorting an already-sorted result changes nothing.
        let resorted = execute(&first.items, &query).expect("listing");
        assert_eq!(resorted.items, first.items);
    }

    #[test]
    fn inputs_are_never_mutated() {
        let articles = collection();
        let snapshot = articles.clone();
        let _ = execute(&articles, &Query::new("alpha", SortKey::Title, 1, 1)).unwrap();
        assert_eq!(articles, snapshot);
    }
}
