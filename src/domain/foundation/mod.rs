//! Foundation - shared domain primitives.
//!
//! Value objects, identifiers, timestamps, list-query types, and the
//! domain error system used by every aggregate.

mod errors;
mod ids;
mod image_url;
mod query;
mod slug;
mod timestamp;
mod title;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{CertificateId, NewsId};
pub use image_url::{ImageUrl, MAX_URL_LENGTH};
pub use query::{ListQuery, SortOrder};
pub use slug::{Slug, MAX_SLUG_LENGTH};
pub use timestamp::Timestamp;
pub use title::{Title, MAX_TITLE_LENGTH};
