//! Ports - persistence contracts between the domain and its adapters.
//!
//! Following hexagonal architecture, each aggregate gets one repository
//! port: CRUD plus the uniform `find_many`/`count_many` list-read pair.
//! Adapters implement the ports; domain services are the only callers
//! of the write methods.

mod certificate_repository;
mod news_repository;

pub use certificate_repository::{CertificateFilter, CertificateRepository, CertificateStream};
pub use news_repository::{NewsFilter, NewsRepository, NewsStream};
