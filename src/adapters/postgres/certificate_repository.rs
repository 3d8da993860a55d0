//! PostgreSQL implementation of CertificateRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::stream::{self, StreamExt};
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::domain::certificate::Certificate;
use crate::domain::foundation::{
    CertificateId, DomainError, ImageUrl, ListQuery, Slug, SortOrder, Timestamp, Title,
};
use crate::ports::{CertificateFilter, CertificateRepository, CertificateStream};

const SELECT_COLUMNS: &str =
    r#"id, title, section, image_url, shown, "order", created_at, updated_at"#;

/// Flat row shape for the `certificates` table.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct CertificateRow {
    pub id: Uuid,
    pub title: String,
    pub section: String,
    pub image_url: Option<String>,
    pub shown: bool,
    #[sqlx(rename = "order")]
    pub order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CertificateRow {
    /// Projects an aggregate to its row shape.
    pub fn from_entity(certificate: &Certificate) -> Self {
        Self {
            id: *certificate.id().as_uuid(),
            title: certificate.title().as_str().to_string(),
            section: certificate.section().as_str().to_string(),
            image_url: certificate.image_url().map(|u| u.as_str().to_string()),
            shown: certificate.shown(),
            order: certificate.order(),
            created_at: *certificate.created_at().as_datetime(),
            updated_at: *certificate.updated_at().as_datetime(),
        }
    }

    /// Rebuilds the aggregate from its row shape.
    pub fn into_entity(self) -> Result<Certificate, DomainError> {
        let title = Title::new(self.title)
            .map_err(|e| DomainError::database(format!("corrupt certificate row: {}", e)))?;
        let section = Slug::new(self.section)
            .map_err(|e| DomainError::database(format!("corrupt certificate row: {}", e)))?;
        let image_url = ImageUrl::optional(self.image_url)
            .map_err(|e| DomainError::database(format!("corrupt certificate row: {}", e)))?;

        Ok(Certificate::reconstitute(
            CertificateId::from_uuid(self.id),
            title,
            section,
            image_url,
            self.shown,
            self.order,
            Timestamp::from_datetime(self.created_at),
            Timestamp::from_datetime(self.updated_at),
        ))
    }
}

/// PostgreSQL Certificate repository.
#[derive(Clone)]
pub struct PostgresCertificateRepository {
    pool: PgPool,
}

impl PostgresCertificateRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn sort_clause(query: &ListQuery) -> (&'static str, SortOrder) {
    match query.sort_field.as_str() {
        "title" => ("title", query.sort_order),
        "section" => ("section", query.sort_order),
        "order" => (r#""order""#, query.sort_order),
        "updated_at" => ("updated_at", query.sort_order),
        "created_at" => ("created_at", query.sort_order),
        _ => ("created_at", SortOrder::Desc),
    }
}

fn push_filters(qb: &mut QueryBuilder<'_, Postgres>, filter: &CertificateFilter) {
    let mut prefix = " WHERE ";
    if let Some(section) = &filter.section {
        qb.push(prefix).push("section = ").push_bind(section.clone());
        prefix = " AND ";
    }
    if let Some(shown) = filter.shown {
        qb.push(prefix).push("shown = ").push_bind(shown);
        prefix = " AND ";
    }
    if let Some(search) = &filter.search {
        // Escaped pattern so the term matches literally; see like_pattern.
        let pattern = super::like_pattern(search);
        qb.push(prefix)
            .push("(title ILIKE ")
            .push_bind(pattern.clone())
            .push(" ESCAPE '\\'")
            .push(" OR section ILIKE ")
            .push_bind(pattern)
            .push(" ESCAPE '\\')");
    }
}

#[async_trait]
impl CertificateRepository for PostgresCertificateRepository {
    async fn add(&self, certificate: &Certificate) -> Result<(), DomainError> {
        let row = CertificateRow::from_entity(certificate);
        sqlx::query(
            r#"
            INSERT INTO certificates (
                id, title, section, image_url, shown, "order", created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(row.id)
        .bind(&row.title)
        .bind(&row.section)
        .bind(&row.image_url)
        .bind(row.shown)
        .bind(row.order)
        .bind(row.created_at)
        .bind(row.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to insert certificate: {}", e)))?;

        Ok(())
    }

    async fn get_by_id(&self, id: &CertificateId) -> Result<Option<Certificate>, DomainError> {
        let row: Option<CertificateRow> = sqlx::query_as(&format!(
            "SELECT {} FROM certificates WHERE id = $1",
            SELECT_COLUMNS
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to fetch certificate: {}", e)))?;

        row.map(CertificateRow::into_entity).transpose()
    }

    async fn get_by_title(
        &self,
        title: &str,
        section: &str,
    ) -> Result<Option<Certificate>, DomainError> {
        let row: Option<CertificateRow> = sqlx::query_as(&format!(
            "SELECT {} FROM certificates WHERE title = $1 AND section = $2",
            SELECT_COLUMNS
        ))
        .bind(title)
        .bind(section)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::database(format!("Failed to fetch certificate by title: {}", e))
        })?;

        row.map(CertificateRow::into_entity).transpose()
    }

    async fn update(&self, certificate: &Certificate) -> Result<(), DomainError> {
        let row = CertificateRow::from_entity(certificate);
        let result = sqlx::query(
            r#"
            UPDATE certificates SET
                title = $2,
                section = $3,
                image_url = $4,
                shown = $5,
                "order" = $6,
                created_at = $7,
                updated_at = $8
            WHERE id = $1
            "#,
        )
        .bind(row.id)
        .bind(&row.title)
        .bind(&row.section)
        .bind(&row.image_url)
        .bind(row.shown)
        .bind(row.order)
        .bind(row.created_at)
        .bind(row.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to update certificate: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("Certificate", certificate.id()));
        }

        Ok(())
    }

    async fn delete(&self, id: &CertificateId) -> Result<(), DomainError> {
        // Idempotent: zero affected rows is not an error.
        sqlx::query("DELETE FROM certificates WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to delete certificate: {}", e)))?;

        Ok(())
    }

    async fn find_many(
        &self,
        query: &ListQuery,
        filter: &CertificateFilter,
    ) -> Result<CertificateStream, DomainError> {
        let (column, order) = sort_clause(query);

        let mut qb: QueryBuilder<'_, Postgres> =
            QueryBuilder::new(format!("SELECT {} FROM certificates", SELECT_COLUMNS));
        push_filters(&mut qb, filter);
        qb.push(" ORDER BY ")
            .push(column)
            .push(" ")
            .push(order.sql())
            .push(", id ASC")
            .push(" LIMIT ")
            .push_bind(query.limit as i64)
            .push(" OFFSET ")
            .push_bind(query.offset as i64);

        let rows: Vec<CertificateRow> = qb
            .build_query_as()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to list certificates: {}", e)))?;

        Ok(stream::iter(rows.into_iter().map(CertificateRow::into_entity)).boxed())
    }

    async fn count_many(&self, filter: &CertificateFilter) -> Result<u64, DomainError> {
        let mut qb: QueryBuilder<'_, Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM certificates");
        push_filters(&mut qb, filter);

        let count: i64 = qb
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to count certificates: {}", e)))?;

        Ok(count as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_mapping_round_trips() {
        let cert = Certificate::new(
            Title::new("ISO 9001").unwrap(),
            Slug::new("quality").unwrap(),
            Some(ImageUrl::new("https://cdn.example.com/iso.png").unwrap()),
        )
        .with_order(5);

        let restored = CertificateRow::from_entity(&cert).into_entity().unwrap();
        assert_eq!(cert, restored);
    }

    #[test]
    fn sort_clause_falls_back_on_unknown_field() {
        let q = ListQuery::new("bogus", SortOrder::Asc, 0, 10);
        assert_eq!(sort_clause(&q), ("created_at", SortOrder::Desc));
    }

    #[test]
    fn push_filters_chains_all_three_conditions() {
        let mut qb: QueryBuilder<'_, Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM certificates");
        push_filters(
            &mut qb,
            &CertificateFilter::section("quality")
                .with_shown(true)
                .with_search("iso"),
        );
        let sql = qb.sql();
        assert!(sql.contains("WHERE section ="));
        assert!(sql.contains("AND shown ="));
        assert!(sql.contains("AND (title ILIKE"));
        assert_eq!(sql.matches("ESCAPE '\\'").count(), 2);
    }
}
