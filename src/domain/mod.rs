//! Domain layer - aggregates, value objects, and domain services.

pub mod certificate;
pub mod foundation;
pub mod news;
