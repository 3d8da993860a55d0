//! In-memory adapters - repository test doubles.
//!
//! Backed by `Mutex`-guarded local collections and required to satisfy
//! the exact contract of the PostgreSQL adapters, including the
//! filter/sort/paginate semantics of `find_many`/`count_many`.

mod certificate_repository;
mod news_repository;
pub(crate) mod query;

pub use certificate_repository::InMemoryCertificateRepository;
pub use news_repository::InMemoryNewsRepository;
