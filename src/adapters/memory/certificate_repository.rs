//! In-memory CertificateRepository test double.

use std::cmp::Ordering;
use std::sync::Mutex;

use async_trait::async_trait;
use futures::stream::{self, StreamExt};

use super::query::{contains_ci, ordered, paginate};
use crate::domain::certificate::Certificate;
use crate::domain::foundation::{CertificateId, DomainError, ListQuery, SortOrder};
use crate::ports::{CertificateFilter, CertificateRepository, CertificateStream};

/// In-memory Certificate repository.
#[derive(Default)]
pub struct InMemoryCertificateRepository {
    items: Mutex<Vec<Certificate>>,
}

impl InMemoryCertificateRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn matches(cert: &Certificate, filter: &CertificateFilter) -> bool {
        if let Some(section) = &filter.section {
            if cert.section().as_str() != section {
                return false;
            }
        }
        if let Some(shown) = filter.shown {
            if cert.shown() != shown {
                return false;
            }
        }
        if let Some(search) = &filter.search {
            let hit = contains_ci(cert.title().as_str(), search)
                || contains_ci(cert.section().as_str(), search);
            if !hit {
                return false;
            }
        }
        true
    }

    fn sorted(items: Vec<Certificate>, query: &ListQuery) -> Vec<Certificate> {
        let (field, order): (&str, SortOrder) = match query.sort_field.as_str() {
            "title" | "section" | "order" | "created_at" | "updated_at" => {
                (query.sort_field.as_str(), query.sort_order)
            }
            _ => ("created_at", SortOrder::Desc),
        };

        let primary = move |a: &Certificate, b: &Certificate| -> Ordering {
            match field {
                "title" => a.title().as_str().cmp(b.title().as_str()),
                "section" => a.section().as_str().cmp(b.section().as_str()),
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
impl CertificateRepository for InMemoryCertificateRepository {
    async fn add(&self, certificate: &Certificate) -> Result<(), DomainError> {
        self.items.lock().unwrap().push(certificate.clone());
        Ok(())
    }

    async fn get_by_id(&self, id: &CertificateId) -> Result<Option<Certificate>, DomainError> {
        Ok(self
            .items
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id() == id)
            .cloned())
    }

    async fn get_by_title(
        &self,
        title: &str,
        section: &str,
    ) -> Result<Option<Certificate>, DomainError> {
        Ok(self
            .items
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.title().as_str() == title && c.section().as_str() == section)
            .cloned())
    }

    async fn update(&self, certificate: &Certificate) -> Result<(), DomainError> {
        let mut items = self.items.lock().unwrap();
        match items.iter_mut().find(|c| c.id() == certificate.id()) {
            Some(slot) => {
                *slot = certificate.clone();
                Ok(())
            }
            None => Err(DomainError::not_found("Certificate", certificate.id())),
        }
    }

    async fn delete(&self, id: &CertificateId) -> Result<(), DomainError> {
        self.items.lock().unwrap().retain(|c| c.id() != id);
        Ok(())
    }

    async fn find_many(
        &self,
        query: &ListQuery,
        filter: &CertificateFilter,
    ) -> Result<CertificateStream, DomainError> {
        let matching: Vec<Certificate> = self
            .items
            .lock()
            .unwrap()
            .iter()
            .filter(|c| Self::matches(c, filter))
            .cloned()
            .collect();

        let page = paginate(Self::sorted(matching, query), query.offset, query.limit);
        Ok(stream::iter(page.into_iter().map(Ok)).boxed())
    }

    async fn count_many(&self, filter: &CertificateFilter) -> Result<u64, DomainError> {
        let count = self
            .items
            .lock()
            .unwrap()
            .iter()
            .filter(|c| Self::matches(c, filter))
            .count();
        Ok(count as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{Slug, Title};
    use futures::TryStreamExt;

    fn cert(title: &str, section: &str) -> Certificate {
        Certificate::new(
            Title::new(title).unwrap(),
            Slug::new(section).unwrap(),
            None,
        )
    }

    #[tokio::test]
    async fn get_by_title_respects_section_scope() {
        let repo = InMemoryCertificateRepository::new();
        repo.add(&cert("ISO 9001", "quality")).await.unwrap();

        assert!(repo
            .get_by_title("ISO 9001", "quality")
            .await
            .unwrap()
            .is_some());
        assert!(repo
            .get_by_title("ISO 9001", "safety")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn section_filter_narrows_results() {
        let repo = InMemoryCertificateRepository::new();
        repo.add(&cert("ISO 9001", "quality")).await.unwrap();
        repo.add(&cert("OHSAS 18001", "safety")).await.unwrap();

        let filter = CertificateFilter::section("safety");
        let page: Vec<Certificate> = repo
            .find_many(&ListQuery::newest_first(0, 10), &filter)
            .await
            .unwrap()
            .try_collect()
            .await
            .unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].section().as_str(), "safety");
        assert_eq!(repo.count_many(&filter).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn search_combined_with_section_is_an_intersection() {
        let repo = InMemoryCertificateRepository::new();
        repo.add(&cert("ISO 9001", "quality")).await.unwrap();
        repo.add(&cert("ISO 14001", "environment")).await.unwrap();

        let filter = CertificateFilter::section("quality").with_search("iso");
        let page: Vec<Certificate> = repo
            .find_many(&ListQuery::newest_first(0, 10), &filter)
            .await
            .unwrap()
            .try_collect()
            .await
            .unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].title().as_str(), "ISO 9001");
    }

    #[tokio::test]
    async fn sorts_by_order_ascending() {
        let repo = InMemoryCertificateRepository::new();
        repo.add(&cert("B", "s").with_order(2)).await.unwrap();
        repo.add(&cert("A", "s").with_order(1)).await.unwrap();
        repo.add(&cert("C", "s").with_order(3)).await.unwrap();

        let query = ListQuery::new("order", SortOrder::Asc, 0, 10);
        let page: Vec<Certificate> = repo
            .find_many(&query, &CertificateFilter::default())
            .await
            .unwrap()
            .try_collect()
            .await
            .unwrap();
        let orders: Vec<i32> = page.iter().map(|c| c.order()).collect();
        assert_eq!(orders, vec![1, 2, 3]);
    }
}
