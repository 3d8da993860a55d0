//! CertificateService - invariant enforcement around the Certificate
//! repository.

use std::sync::Arc;

use futures::TryStreamExt;
use tracing::debug;

use crate::domain::certificate::Certificate;
use crate::domain::foundation::{CertificateId, DomainError, ListQuery};
use crate::ports::{CertificateFilter, CertificateRepository};

/// Domain service owning all write access to the Certificate
/// repository.
///
/// The natural key is the title scoped by section: uniqueness is
/// checked within one section only.
pub struct CertificateService {
    repository: Arc<dyn CertificateRepository>,
}

impl CertificateService {
    pub fn new(repository: Arc<dyn CertificateRepository>) -> Self {
        Self { repository }
    }

    /// Creates a certificate after checking title uniqueness within
    /// its section.
    ///
    /// The check and the insert are not atomic; see the note on
    /// [`NewsService::create`](crate::domain::news::NewsService::create).
    ///
    /// # Errors
    ///
    /// - `AlreadyExists` if the section already holds this title
    pub async fn create(&self, certificate: Certificate) -> Result<Certificate, DomainError> {
        if self
            .repository
            .get_by_title(
                certificate.title().as_str(),
                certificate.section().as_str(),
            )
            .await?
            .is_some()
        {
            return Err(DomainError::already_exists(
                "Certificate",
                certificate.title().as_str(),
            )
            .with_detail("scope", certificate.section().as_str()));
        }
        self.repository.add(&certificate).await?;
        debug!(
            id = %certificate.id(),
            section = %certificate.section(),
            "certificate created"
        );
        Ok(certificate)
    }

    /// Fetches a certificate by id.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no certificate with this id exists
    pub async fn get_by_id(&self, id: &CertificateId) -> Result<Certificate, DomainError> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Certificate", id))
    }

    /// Replaces a certificate wholesale.
    ///
    /// Re-checks uniqueness only when the scoped natural key changed.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the id does not exist
    /// - `AlreadyExists` if another certificate in the target section
    ///   holds the title
    pub async fn update(&self, mut certificate: Certificate) -> Result<Certificate, DomainError> {
        let existing = self.get_by_id(certificate.id()).await?;

        let key_changed = certificate.title() != existing.title()
            || certificate.section() != existing.section();
        if key_changed {
            if let Some(collision) = self
                .repository
                .get_by_title(
                    certificate.title().as_str(),
                    certificate.section().as_str(),
                )
                .await?
            {
                if collision.id() != certificate.id() {
                    return Err(DomainError::already_exists(
                        "Certificate",
                        certificate.title().as_str(),
                    )
                    .with_detail("scope", certificate.section().as_str()));
                }
            }
        }

        certificate.touch();
        self.repository.update(&certificate).await?;
        debug!(id = %certificate.id(), "certificate updated");
        Ok(certificate)
    }

    /// Deletes a certificate.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the id does not exist; no mutation is performed
    pub async fn delete(&self, id: &CertificateId) -> Result<(), DomainError> {
        self.get_by_id(id).await?;
        self.repository.delete(id).await?;
        debug!(id = %id, "certificate deleted");
        Ok(())
    }

    /// Lists certificates as a fully materialized page.
    pub async fn find_many(
        &self,
        query: &ListQuery,
        filter: &CertificateFilter,
    ) -> Result<Vec<Certificate>, DomainError> {
        let stream = self.repository.find_many(query, filter).await?;
        stream.try_collect().await
    }

    /// Counts certificates matching the filter.
    pub async fn count_many(&self, filter: &CertificateFilter) -> Result<u64, DomainError> {
        self.repository.count_many(filter).await
    }
}
