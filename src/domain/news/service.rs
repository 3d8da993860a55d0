//! NewsService - invariant enforcement around the News repository.

use std::sync::Arc;

use futures::TryStreamExt;
use tracing::debug;

use crate::domain::foundation::{DomainError, ListQuery, NewsId};
use crate::domain::news::News;
use crate::ports::{NewsFilter, NewsRepository};

/// Domain service owning all write access to the News repository.
///
/// Enforces the natural-key uniqueness invariant before create/update
/// and the existence invariant before update/delete. No other
/// component may call the repository's write methods.
pub struct NewsService {
    repository: Arc<dyn NewsRepository>,
}

impl NewsService {
    pub fn new(repository: Arc<dyn NewsRepository>) -> Self {
        Self { repository }
    }

    /// Creates a news entry after checking slug uniqueness.
    ///
    /// The slug check and the insert are not atomic and the store does
    /// not carry a unique index on the slug, so two concurrent creates
    /// with the same slug can both pass the check. Accepted
    /// best-effort behavior; see DESIGN.md.
    ///
    /// # Errors
    ///
    /// - `AlreadyExists` if a live entry holds the same slug
    pub async fn create(&self, news: News) -> Result<News, DomainError> {
        if self
            .repository
            .get_by_slug(news.slug().as_str())
            .await?
            .is_some()
        {
            return Err(DomainError::already_exists("News", news.slug().as_str()));
        }
        self.repository.add(&news).await?;
        debug!(id = %news.id(), slug = %news.slug(), "news created");
        Ok(news)
    }

    /// Fetches an entry by id.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no entry with this id exists
    pub async fn get_by_id(&self, id: &NewsId) -> Result<News, DomainError> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("News", id))
    }

    /// Replaces an entry wholesale.
    ///
    /// Re-checks slug uniqueness only when the slug changed, tolerating
    /// the entry colliding with itself. Refreshes `updated_at` before
    /// the write.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the id does not exist
    /// - `AlreadyExists` if the new slug is held by another entry
    pub async fn update(&self, mut news: News) -> Result<News, DomainError> {
        let existing = self.get_by_id(news.id()).await?;

        if news.slug() != existing.slug() {
            if let Some(collision) = self.repository.get_by_slug(news.slug().as_str()).await? {
                if collision.id() != news.id() {
                    return Err(DomainError::already_exists("News", news.slug().as_str()));
                }
            }
        }

        news.touch();
        self.repository.update(&news).await?;
        debug!(id = %news.id(), slug = %news.slug(), "news updated");
        Ok(news)
    }

    /// Deletes an entry.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the id does not exist; no mutation is performed
    pub async fn delete(&self, id: &NewsId) -> Result<(), DomainError> {
        self.get_by_id(id).await?;
        self.repository.delete(id).await?;
        debug!(id = %id, "news deleted");
        Ok(())
    }

    /// Lists entries, draining the repository cursor into an eagerly
    /// built ordered list (bounded by `query.limit`). Callers rely on
    /// a fully materialized, indexable page.
    pub async fn find_many(
        &self,
        query: &ListQuery,
        filter: &NewsFilter,
    ) -> Result<Vec<News>, DomainError> {
        let stream = self.repository.find_many(query, filter).await?;
        stream.try_collect().await
    }

    /// Counts entries matching the filter.
    pub async fn count_many(&self, filter: &NewsFilter) -> Result<u64, DomainError> {
        self.repository.count_many(filter).await
    }
}
