//! Handlers - one per Command or Query tag.

mod audit;
mod certificate;
mod news;

pub use audit::AuditTrailHandler;
pub use certificate::{
    CountCertificatesHandler, CreateCertificateHandler, DeleteCertificateHandler,
    GetCertificateByIdHandler, ListCertificatesHandler, UpdateCertificateHandler,
};
pub use news::{
    CountNewsHandler, CreateNewsHandler, DeleteNewsHandler, GetNewsByIdHandler, ListNewsHandler,
    UpdateNewsHandler,
};
