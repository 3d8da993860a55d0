//! News repository port.
//!
//! Defines the persistence contract for the News aggregate. The
//! PostgreSQL adapter and the in-memory test double must satisfy this
//! contract identically for identical inputs; the contract test suite
//! in `tests/` pins the shared semantics.

use async_trait::async_trait;
use futures::stream::BoxStream;

use crate::domain::foundation::{DomainError, ListQuery, NewsId};
use crate::domain::news::News;

/// Lazy, finite, single-pass cursor over a list read.
///
/// Not restartable: once drained it yields nothing further.
pub type NewsStream = BoxStream<'static, Result<News, DomainError>>;

/// Optional filters for News list reads.
///
/// Present filters narrow the result set (logical AND). `search` is a
/// case-insensitive substring match OR'd across slug, title and body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsFilter {
    pub shown: Option<bool>,
    pub search: Option<String>,
}

impl NewsFilter {
    /// Filter on visibility only.
    pub fn shown(shown: bool) -> Self {
        Self {
            shown: Some(shown),
            ..Self::default()
        }
    }

    /// Builder: add a search term.
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }
}

/// Repository port for News persistence.
#[async_trait]
pub trait NewsRepository: Send + Sync {
    /// Inserts a new entry. No existence precondition; success is not
    /// verified by re-read.
    async fn add(&self, news: &News) -> Result<(), DomainError>;

    /// Finds an entry by id. Returns `None` on miss, never an error.
    async fn get_by_id(&self, id: &NewsId) -> Result<Option<News>, DomainError>;

    /// Finds an entry by its natural key. Returns `None` on miss; used
    /// by the service for uniqueness lookups.
    async fn get_by_slug(&self, slug: &str) -> Result<Option<News>, DomainError>;

    /// Full replace by id.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no entry with this id exists
    /// - `DatabaseError` on persistence failure
    async fn update(&self, news: &News) -> Result<(), DomainError>;

    /// Removes the entry if present. Idempotent: a missing id is a
    /// no-op, not an error.
    async fn delete(&self, id: &NewsId) -> Result<(), DomainError>;

    /// Streams the sorted, filtered, paginated entries.
    ///
    /// `offset`/`limit` apply to the sorted, filtered sequence. An
    /// unrecognized `sort_field` falls back to `created_at` descending.
    async fn find_many(
        &self,
        query: &ListQuery,
        filter: &NewsFilter,
    ) -> Result<NewsStream, DomainError>;

    /// Counts entries matching the same predicate as `find_many`,
    /// ignoring sort and pagination.
    async fn count_many(&self, filter: &NewsFilter) -> Result<u64, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn news_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn NewsRepository) {}
    }

    #[test]
    fn default_filter_is_empty() {
        let filter = NewsFilter::default();
        assert!(filter.shown.is_none());
        assert!(filter.search.is_none());
    }

    #[test]
    fn builder_combines_filters() {
        let filter = NewsFilter::shown(true).with_search("report");
        assert_eq!(filter.shown, Some(true));
        assert_eq!(filter.search.as_deref(), Some("report"));
    }
}
