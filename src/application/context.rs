//! AppContext - explicit, typed singleton wiring.
//!
//! Constructed once at process start and passed by reference into the
//! boundary layer. Holds the services and the mediator; there is no
//! ambient global state and no runtime container lookup.

use std::sync::Arc;

use sqlx::PgPool;

use super::handlers::{
    AuditTrailHandler, CountCertificatesHandler, CountNewsHandler, CreateCertificateHandler,
    CreateNewsHandler, DeleteCertificateHandler, DeleteNewsHandler, GetCertificateByIdHandler,
    GetNewsByIdHandler, ListCertificatesHandler, ListNewsHandler, UpdateCertificateHandler,
    UpdateNewsHandler,
};
use super::mediator::Mediator;
use super::requests::{CommandKind, QueryKind};
use crate::adapters::memory::{InMemoryCertificateRepository, InMemoryNewsRepository};
use crate::adapters::postgres::{PostgresCertificateRepository, PostgresNewsRepository};
use crate::domain::certificate::CertificateService;
use crate::domain::foundation::DomainError;
use crate::domain::news::NewsService;
use crate::ports::{CertificateRepository, NewsRepository};

/// Process-wide singletons: services and the mediator.
pub struct AppContext {
    pub news: Arc<NewsService>,
    pub certificates: Arc<CertificateService>,
    pub mediator: Mediator,
}

impl AppContext {
    /// Wires the context over the PostgreSQL adapters.
    pub fn postgres(pool: PgPool) -> Result<Self, DomainError> {
        Self::build(
            Arc::new(PostgresNewsRepository::new(pool.clone())),
            Arc::new(PostgresCertificateRepository::new(pool)),
        )
    }

    /// Wires the context over the in-memory test doubles.
    pub fn in_memory() -> Result<Self, DomainError> {
        Self::build(
            Arc::new(InMemoryNewsRepository::new()),
            Arc::new(InMemoryCertificateRepository::new()),
        )
    }

    fn build(
        news_repository: Arc<dyn NewsRepository>,
        certificate_repository: Arc<dyn CertificateRepository>,
    ) -> Result<Self, DomainError> {
        let news = Arc::new(NewsService::new(news_repository));
        let certificates = Arc::new(CertificateService::new(certificate_repository));

        let audit = Arc::new(AuditTrailHandler::new());
        let mut mediator = Mediator::new();

        mediator.register_command(
            CommandKind::CreateNews,
            vec![Arc::new(CreateNewsHandler::new(news.clone()))],
        );
        mediator.register_command(
            CommandKind::UpdateNews,
            vec![Arc::new(UpdateNewsHandler::new(news.clone()))],
        );
        mediator.register_command(
            CommandKind::DeleteNews,
            vec![Arc::new(DeleteNewsHandler::new(news.clone())), audit.clone()],
        );
        mediator.register_command(
            CommandKind::CreateCertificate,
            vec![Arc::new(CreateCertificateHandler::new(certificates.clone()))],
        );
        mediator.register_command(
            CommandKind::UpdateCertificate,
            vec![Arc::new(UpdateCertificateHandler::new(certificates.clone()))],
        );
        mediator.register_command(
            CommandKind::DeleteCertificate,
            vec![
                Arc::new(DeleteCertificateHandler::new(certificates.clone())),
                audit,
            ],
        );

        mediator.register_query(
            QueryKind::GetNewsById,
            Arc::new(GetNewsByIdHandler::new(news.clone())),
        );
        mediator.register_query(
            QueryKind::ListNews,
            Arc::new(ListNewsHandler::new(news.clone())),
        );
        mediator.register_query(
            QueryKind::CountNews,
            Arc::new(CountNewsHandler::new(news.clone())),
        );
        mediator.register_query(
            QueryKind::GetCertificateById,
            Arc::new(GetCertificateByIdHandler::new(certificates.clone())),
        );
        mediator.register_query(
            QueryKind::ListCertificates,
            Arc::new(ListCertificatesHandler::new(certificates.clone())),
        );
        mediator.register_query(
            QueryKind::CountCertificates,
            Arc::new(CountCertificatesHandler::new(certificates.clone())),
        );

        mediator.validate()?;

        Ok(Self {
            news,
            certificates,
            mediator,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn in_memory_context_passes_registry_validation() {
        let ctx = AppContext::in_memory().unwrap();
        assert!(ctx.mediator.validate().is_ok());
    }
}
