//! Certificate command and query handlers.

use std::sync::Arc;

use async_trait::async_trait;

use crate::application::mediator::{mismatched_request, CommandHandler, QueryHandler};
use crate::application::requests::{Command, CommandOutcome, Query, QueryOutcome};
use crate::domain::certificate::CertificateService;
use crate::domain::foundation::DomainError;

pub struct CreateCertificateHandler {
    service: Arc<CertificateService>,
}

impl CreateCertificateHandler {
    pub fn new(service: Arc<CertificateService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl CommandHandler for CreateCertificateHandler {
    async fn handle(&self, command: &Command) -> Result<CommandOutcome, DomainError> {
        match command {
            Command::CreateCertificate(cmd) => {
                let created = self.service.create(cmd.certificate.clone()).await?;
                Ok(CommandOutcome::Certificate(created))
            }
            _ => Err(mismatched_request("CreateCertificateHandler")),
        }
    }
}

pub struct UpdateCertificateHandler {
    service: Arc<CertificateService>,
}

impl UpdateCertificateHandler {
    pub fn new(service: Arc<CertificateService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl CommandHandler for UpdateCertificateHandler {
    async fn handle(&self, command: &Command) -> Result<CommandOutcome, DomainError> {
        match command {
            Command::UpdateCertificate(cmd) => {
                let updated = self.service.update(cmd.certificate.clone()).await?;
                Ok(CommandOutcome::Certificate(updated))
            }
            _ => Err(mismatched_request("UpdateCertificateHandler")),
        }
    }
}

pub struct DeleteCertificateHandler {
    service: Arc<CertificateService>,
}

impl DeleteCertificateHandler {
    pub fn new(service: Arc<CertificateService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl CommandHandler for DeleteCertificateHandler {
    async fn handle(&self, command: &Command) -> Result<CommandOutcome, DomainError> {
        match command {
            Command::DeleteCertificate(cmd) => {
                self.service.delete(&cmd.id).await?;
                Ok(CommandOutcome::Done)
            }
            _ => Err(mismatched_request("DeleteCertificateHandler")),
        }
    }
}

pub struct GetCertificateByIdHandler {
    service: Arc<CertificateService>,
}

impl GetCertificateByIdHandler {
    pub fn new(service: Arc<CertificateService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl QueryHandler for GetCertificateByIdHandler {
    async fn handle(&self, query: &Query) -> Result<QueryOutcome, DomainError> {
        match query {
            Query::GetCertificateById(qry) => {
                let certificate = self.service.get_by_id(&qry.id).await?;
                Ok(QueryOutcome::Certificate(certificate))
            }
            _ => Err(mismatched_request("GetCertificateByIdHandler")),
        }
    }
}

pub struct ListCertificatesHandler {
    service: Arc<CertificateService>,
}

impl ListCertificatesHandler {
    pub fn new(service: Arc<CertificateService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl QueryHandler for ListCertificatesHandler {
    async fn handle(&self, query: &Query) -> Result<QueryOutcome, DomainError> {
        match query {
            Query::ListCertificates(qry) => {
                let page = self.service.find_many(&qry.query, &qry.filter).await?;
                Ok(QueryOutcome::CertificatePage(page))
            }
            _ => Err(mismatched_request("ListCertificatesHandler")),
        }
    }
}

pub struct CountCertificatesHandler {
    service: Arc<CertificateService>,
}

impl CountCertificatesHandler {
    pub fn new(service: Arc<CertificateService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl QueryHandler for CountCertificatesHandler {
    async fn handle(&self, query: &Query) -> Result<QueryOutcome, DomainError> {
        match query {
            Query::CountCertificates(qry) => {
                let count = self.service.count_many(&qry.filter).await?;
                Ok(QueryOutcome::Count(count))
            }
            _ => Err(mismatched_request("CountCertificatesHandler")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryCertificateRepository;
    use crate::application::requests::CreateCertificate;
    use crate::domain::certificate::Certificate;
    use crate::domain::foundation::{ErrorCode, Slug, Title};

    fn service() -> Arc<CertificateService> {
        Arc::new(CertificateService::new(Arc::new(
            InMemoryCertificateRepository::new(),
        )))
    }

    fn cert(title: &str) -> Certificate {
        Certificate::new(
            Title::new(title).unwrap(),
            Slug::new("quality").unwrap(),
            None,
        )
    }

    #[tokio::test]
    async fn create_handler_delegates_to_service() {
        let svc = service();
        let handler = CreateCertificateHandler::new(svc.clone());

        let cmd = Command::CreateCertificate(CreateCertificate {
            certificate: cert("ISO 9001"),
        });
        let outcome = handler.handle(&cmd).await.unwrap();
        assert!(matches!(outcome, CommandOutcome::Certificate(_)));
    }

    #[tokio::test]
    async fn duplicate_create_surfaces_already_exists() {
        let svc = service();
        let handler = CreateCertificateHandler::new(svc);

        let cmd = Command::CreateCertificate(CreateCertificate {
            certificate: cert("ISO 9001"),
        });
        handler.handle(&cmd).await.unwrap();

        let dup = Command::CreateCertificate(CreateCertificate {
            certificate: cert("ISO 9001"),
        });
        let err = handler.handle(&dup).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::AlreadyExists);
    }
}
