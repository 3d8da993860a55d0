//! In-memory NewsRepository - test double backed by a local collection.
//!
//! Reproduces the PostgreSQL adapter's filter/sort/paginate semantics
//! so the contract test suite can run against either implementation.

use std::cmp::Ordering;
use std::sync::Mutex;

use async_trait::async_trait;
use futures::stream::{self, StreamExt};

use super::query::{contains_ci, ordered, paginate};
use crate::domain::foundation::{DomainError, ListQuery, NewsId, SortOrder};
use crate::domain::news::News;
use crate::ports::{NewsFilter, NewsRepository, NewsStream};

/// In-memory News repository.
#[derive(Default)]
pub struct InMemoryNewsRepository {
    items: Mutex<Vec<News>>,
}

impl InMemoryNewsRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn matches(news: &News, filter: &NewsFilter) -> bool {
        if let Some(shown) = filter.shown {
            if news.shown() != shown {
                return false;
            }
        }
        if let Some(search) = &filter.search {
            let hit = contains_ci(news.slug().as_str(), search)
                || contains_ci(news.title().as_str(), search)
                || contains_ci(news.body(), search);
            if !hit {
                return false;
            }
        }
        true
    }

    fn sorted(items: Vec<News>, query: &ListQuery) -> Vec<News> {
        let (field, order): (&str, SortOrder) = match query.sort_field.as_str() {
            "slug" | "title" | "order" | "created_at" | "updated_at" => {
                (query.sort_field.as_str(), query.sort_order)
            }
            // Unknown sort field: deterministic fallback, never an error.
            _ => ("created_at", SortOrder::Desc),
        };

        let primary = move |a: &News, b: &News| -> Ordering {
            match field {
                "slug" => a.slug().as_str().cmp(b.slug().as_str()),
                "title" => a.title().as_str().cmp(b.title().as_str()),
                "order" => a.order().cmp(&b.order()),
                "updated_at" => a.updated_at().cmp(b.updated_at()),
                _ => a.created_at().cmp(b.created_at()),
            }
        };
        ordered(items, order, primary, |a, b| {
            a.id().as_uuid().cmp(b.id().as_uuid())
        })
    }
}

#[async_trait]
impl NewsRepository for InMemoryNewsRepository {
    async fn add(&self, news: &News) -> Result<(), DomainError> {
        self.items.lock().unwrap().push(news.clone());
        Ok(())
    }

    async fn get_by_id(&self, id: &NewsId) -> Result<Option<News>, DomainError> {
        Ok(self
            .items
            .lock()
            .unwrap()
            .iter()
            .find(|n| n.id() == id)
            .cloned())
    }

    async fn get_by_slug(&self, slug: &str) -> Result<Option<News>, DomainError> {
        Ok(self
            .items
            .lock()
            .unwrap()
            .iter()
            .find(|n| n.slug().as_str() == slug)
            .cloned())
    }

    async fn update(&self, news: &News) -> Result<(), DomainError> {
        let mut items = self.items.lock().unwrap();
        match items.iter_mut().find(|n| n.id() == news.id()) {
            Some(slot) => {
                *slot = news.clone();
                Ok(())
            }
            None => Err(DomainError::not_found("News", news.id())),
        }
    }

    async fn delete(&self, id: &NewsId) -> Result<(), DomainError> {
        self.items.lock().unwrap().retain(|n| n.id() != id);
        Ok(())
    }

    async fn find_many(
        &self,
        query: &ListQuery,
        filter: &NewsFilter,
    ) -> Result<NewsStream, DomainError> {
        let matching: Vec<News> = self
            .items
            .lock()
            .unwrap()
            .iter()
            .filter(|n| Self::matches(n, filter))
            .cloned()
            .collect();

        let page = paginate(Self::sorted(matching, query), query.offset, query.limit);
        Ok(stream::iter(page.into_iter().map(Ok)).boxed())
    }

    async fn count_many(&self, filter: &NewsFilter) -> Result<u64, DomainError> {
        let count = self
            .items
            .lock()
            .unwrap()
            .iter()
            .filter(|n| Self::matches(n, filter))
            .count();
        Ok(count as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{ErrorCode, Slug, Title};
    use futures::TryStreamExt;

    fn entry(slug: &str, title: &str) -> News {
        News::new(
            Slug::new(slug).unwrap(),
            Title::new(title).unwrap(),
            format!("Body of {}", title),
            None,
        )
    }

    #[tokio::test]
    async fn add_then_get_by_id_round_trips() {
        let repo = InMemoryNewsRepository::new();
        let news = entry("a", "A");
        repo.add(&news).await.unwrap();

        let found = repo.get_by_id(news.id()).await.unwrap();
        assert_eq!(found, Some(news));
    }

    #[tokio::test]
    async fn get_by_slug_returns_none_on_miss() {
        let repo = InMemoryNewsRepository::new();
        assert_eq!(repo.get_by_slug("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn update_missing_id_raises_not_found() {
        let repo = InMemoryNewsRepository::new();
        let err = repo.update(&entry("ghost", "Ghost")).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn delete_missing_id_is_noop() {
        let repo = InMemoryNewsRepository::new();
        assert!(repo.delete(&NewsId::new()).await.is_ok());
    }

    #[tokio::test]
    async fn find_many_filters_on_shown() {
        let repo = InMemoryNewsRepository::new();
        repo.add(&entry("visible", "Visible")).await.unwrap();
        repo.add(&entry("hidden", "Hidden").with_shown(false))
            .await
            .unwrap();

        let page: Vec<News> = repo
            .find_many(&ListQuery::newest_first(0, 10), &NewsFilter::shown(true))
            .await
            .unwrap()
            .try_collect()
            .await
            .unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].slug().as_str(), "visible");
    }

    #[tokio::test]
    async fn search_matches_title_case_insensitively() {
        let repo = InMemoryNewsRepository::new();
        repo.add(&entry("one", "Quarterly Report")).await.unwrap();
        repo.add(&entry("two", "Team Outing")).await.unwrap();

        let filter = NewsFilter::default().with_search("REPORT");
        let page: Vec<News> = repo
            .find_many(&ListQuery::newest_first(0, 10), &filter)
            .await
            .unwrap()
            .try_collect()
            .await
            .unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].slug().as_str(), "one");
        assert_eq!(repo.count_many(&filter).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn unknown_sort_field_falls_back_to_created_at_desc() {
        let repo = InMemoryNewsRepository::new();
        for slug in ["a", "b", "c"] {
            repo.add(&entry(slug, slug)).await.unwrap();
        }

        let query = ListQuery::new("nonsense", SortOrder::Asc, 0, 10);
        let page: Vec<News> = repo
            .find_many(&query, &NewsFilter::default())
            .await
            .unwrap()
            .try_collect()
            .await
            .unwrap();
        assert_eq!(page.len(), 3);
        for pair in page.windows(2) {
            assert!(pair[0].created_at() >= pair[1].created_at());
        }
    }
}
