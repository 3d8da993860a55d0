//! Certificate module - aggregate and domain service for company
//! certificates.

mod aggregate;
mod service;

pub use aggregate::Certificate;
pub use service::CertificateService;
