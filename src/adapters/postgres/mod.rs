//! PostgreSQL adapters - production repository implementations.
//!
//! Each repository translates its aggregate to and from a flat row
//! shape through pure mapping functions and composes the shared
//! filter predicate for both `find_many` and `count_many`, keeping
//! their results consistent by construction.

mod certificate_repository;
mod news_repository;

pub use certificate_repository::{CertificateRow, PostgresCertificateRepository};
pub use news_repository::{NewsRow, PostgresNewsRepository};

use sqlx::PgPool;

use crate::config::DatabaseConfig;
use crate::domain::foundation::DomainError;

/// Opens the connection pool described by the configuration, running
/// pending migrations first when `run_migrations` is set.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, DomainError> {
    let pool = config
        .pool_options()
        .connect(&config.url)
        .await
        .map_err(|e| DomainError::database(format!("Failed to connect to database: {}", e)))?;

    if config.run_migrations {
        sqlx::migrate!()
            .run(&pool)
            .await
            .map_err(|e| DomainError::database(format!("Migration failed: {}", e)))?;
    }

    Ok(pool)
}

/// Builds a `%term%` ILIKE pattern with LIKE metacharacters escaped,
/// so the search term matches as a literal substring. Every ILIKE
/// using this pattern must carry `ESCAPE '\'`.
pub(crate) fn like_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}
