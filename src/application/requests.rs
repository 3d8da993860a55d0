//! Command and Query DTOs with their closed kind tags.
//!
//! Dispatch is by exact tag over a closed, enumerable set: the kind
//! enums carry `ALL` tables so the mediator can verify at startup that
//! every tag has its handlers. Requests are immutable value records;
//! entity assembly from primitives belongs to the boundary layer that
//! builds them, not to the handlers.

use crate::domain::certificate::Certificate;
use crate::domain::foundation::{CertificateId, ListQuery, NewsId};
use crate::domain::news::News;
use crate::ports::{CertificateFilter, NewsFilter};

// ─────────────────────────────────────────────────────────────────────
// Commands
// ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct CreateNews {
    pub news: News,
}

#[derive(Debug, Clone)]
pub struct UpdateNews {
    pub news: News,
}

#[derive(Debug, Clone)]
pub struct DeleteNews {
    pub id: NewsId,
}

#[derive(Debug, Clone)]
pub struct CreateCertificate {
    pub certificate: Certificate,
}

#[derive(Debug, Clone)]
pub struct UpdateCertificate {
    pub certificate: Certificate,
}

#[derive(Debug, Clone)]
pub struct DeleteCertificate {
    pub id: CertificateId,
}

/// A request to mutate state. May fan out to multiple handlers.
#[derive(Debug, Clone)]
pub enum Command {
    CreateNews(CreateNews),
    UpdateNews(UpdateNews),
    DeleteNews(DeleteNews),
    CreateCertificate(CreateCertificate),
    UpdateCertificate(UpdateCertificate),
    DeleteCertificate(DeleteCertificate),
}

/// Exact dispatch tag for a [`Command`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    CreateNews,
    UpdateNews,
    DeleteNews,
    CreateCertificate,
    UpdateCertificate,
    DeleteCertificate,
}

impl CommandKind {
    /// Every command tag; the mediator's startup validation walks this.
    pub const ALL: [CommandKind; 6] = [
        CommandKind::CreateNews,
        CommandKind::UpdateNews,
        CommandKind::DeleteNews,
        CommandKind::CreateCertificate,
        CommandKind::UpdateCertificate,
        CommandKind::DeleteCertificate,
    ];
}

impl Command {
    pub fn kind(&self) -> CommandKind {
        match self {
            Command::CreateNews(_) => CommandKind::CreateNews,
            Command::UpdateNews(_) => CommandKind::UpdateNews,
            Command::DeleteNews(_) => CommandKind::DeleteNews,
            Command::CreateCertificate(_) => CommandKind::CreateCertificate,
            Command::UpdateCertificate(_) => CommandKind::UpdateCertificate,
            Command::DeleteCertificate(_) => CommandKind::DeleteCertificate,
        }
    }
}

/// Result of one command handler invocation.
#[derive(Debug, Clone)]
pub enum CommandOutcome {
    News(News),
    Certificate(Certificate),
    /// The handler completed without producing an entity (deletes,
    /// side-effect handlers).
    Done,
}

// ─────────────────────────────────────────────────────────────────────
// Queries
// ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct GetNewsById {
    pub id: NewsId,
}

#[derive(Debug, Clone)]
pub struct ListNews {
    pub query: ListQuery,
    pub filter: NewsFilter,
}

#[derive(Debug, Clone)]
pub struct CountNews {
    pub filter: NewsFilter,
}

#[derive(Debug, Clone)]
pub struct GetCertificateById {
    pub id: CertificateId,
}

#[derive(Debug, Clone)]
pub struct ListCertificates {
    pub query: ListQuery,
    pub filter: CertificateFilter,
}

#[derive(Debug, Clone)]
pub struct CountCertificates {
    pub filter: CertificateFilter,
}

/// A read request. Dispatches to exactly one handler.
#[derive(Debug, Clone)]
pub enum Query {
    GetNewsById(GetNewsById),
    ListNews(ListNews),
    CountNews(CountNews),
    GetCertificateById(GetCertificateById),
    ListCertificates(ListCertificates),
    CountCertificates(CountCertificates),
}

/// Exact dispatch tag for a [`Query`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKind {
    GetNewsById,
    ListNews,
    CountNews,
    GetCertificateById,
    ListCertificates,
    CountCertificates,
}

impl QueryKind {
    /// Every query tag; the mediator's startup validation walks this.
    pub const ALL: [QueryKind; 6] = [
        QueryKind::GetNewsById,
        QueryKind::ListNews,
        QueryKind::CountNews,
        QueryKind::GetCertificateById,
        QueryKind::ListCertificates,
        QueryKind::CountCertificates,
    ];
}

impl Query {
    pub fn kind(&self) -> QueryKind {
        match self {
            Query::GetNewsById(_) => QueryKind::GetNewsById,
            Query::ListNews(_) => QueryKind::ListNews,
            Query::CountNews(_) => QueryKind::CountNews,
            Query::GetCertificateById(_) => QueryKind::GetCertificateById,
            Query::ListCertificates(_) => QueryKind::ListCertificates,
            Query::CountCertificates(_) => QueryKind::CountCertificates,
        }
    }
}

/// Result of a query handler invocation, returned unwrapped.
#[derive(Debug, Clone)]
pub enum QueryOutcome {
    News(News),
    NewsPage(Vec<News>),
    Certificate(Certificate),
    CertificatePage(Vec<Certificate>),
    Count(u64),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{Slug, Title};

    #[test]
    fn command_kind_projection_is_exact() {
        let news = News::new(
            Slug::new("a").unwrap(),
            Title::new("A").unwrap(),
            String::new(),
            None,
        );
        let cmd = Command::CreateNews(CreateNews { news });
        assert_eq!(cmd.kind(), CommandKind::CreateNews);
    }

    #[test]
    fn kind_tables_cover_every_variant() {
        assert_eq!(CommandKind::ALL.len(), 6);
        assert_eq!(QueryKind::ALL.len(), 6);
    }

    #[test]
    fn query_kind_projection_is_exact() {
        let qry = Query::CountNews(CountNews {
            filter: NewsFilter::default(),
        });
        assert_eq!(qry.kind(), QueryKind::CountNews);
    }
}
