//! News module - aggregate and domain service for site news entries.

mod aggregate;
mod service;

pub use aggregate::News;
pub use service::NewsService;
