//! Certificate repository port.
//!
//! Same contract shape as the News port, with the natural-key lookup
//! taking the section scope.

use async_trait::async_trait;
use futures::stream::BoxStream;

use crate::domain::certificate::Certificate;
use crate::domain::foundation::{CertificateId, DomainError, ListQuery};

/// Lazy, finite, single-pass cursor over a list read.
pub type CertificateStream = BoxStream<'static, Result<Certificate, DomainError>>;

/// Optional filters for Certificate list reads.
///
/// `search` matches case-insensitively against title and section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CertificateFilter {
    pub section: Option<String>,
    pub shown: Option<bool>,
    pub search: Option<String>,
}

impl CertificateFilter {
    /// Filter on one section.
    pub fn section(section: impl Into<String>) -> Self {
        Self {
            section: Some(section.into()),
            ..Self::default()
        }
    }

    /// Builder: restrict to a visibility state.
    pub fn with_shown(mut self, shown: bool) -> Self {
        self.shown = Some(shown);
        self
    }

    /// Builder: add a search term.
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }
}

/// Repository port for Certificate persistence.
#[async_trait]
pub trait CertificateRepository: Send + Sync {
    /// Inserts a new certificate. No existence precondition.
    async fn add(&self, certificate: &Certificate) -> Result<(), DomainError>;

    /// Finds a certificate by id. Returns `None` on miss.
    async fn get_by_id(&self, id: &CertificateId) -> Result<Option<Certificate>, DomainError>;

    /// Finds a certificate by its scoped natural key (title within a
    /// section). Returns `None` on miss.
    async fn get_by_title(
        &self,
        title: &str,
        section: &str,
    ) -> Result<Option<Certificate>, DomainError>;

    /// Full replace by id.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no certificate with this id exists
    /// - `DatabaseError` on persistence failure
    async fn update(&self, certificate: &Certificate) -> Result<(), DomainError>;

    /// Removes the certificate if present. Idempotent on a missing id.
    async fn delete(&self, id: &CertificateId) -> Result<(), DomainError>;

    /// Streams the sorted, filtered, paginated certificates.
    async fn find_many(
        &self,
        query: &ListQuery,
        filter: &CertificateFilter,
    ) -> Result<CertificateStream, DomainError>;

    /// Counts certificates matching the same predicate as `find_many`.
    async fn count_many(&self, filter: &CertificateFilter) -> Result<u64, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn certificate_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn CertificateRepository) {}
    }

    #[test]
    fn builder_combines_filters() {
        let filter = CertificateFilter::section("quality")
            .with_shown(true)
            .with_search("iso");
        assert_eq!(filter.section.as_deref(), Some("quality"));
        assert_eq!(filter.shown, Some(true));
        assert_eq!(filter.search.as_deref(), Some("iso"));
    }
}
