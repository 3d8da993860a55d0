//! PostgreSQL implementation of NewsRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::stream::{self, StreamExt};
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::domain::foundation::{
    DomainError, ImageUrl, ListQuery, NewsId, Slug, SortOrder, Timestamp, Title,
};
use crate::domain::news::News;
use crate::ports::{NewsFilter, NewsRepository, NewsStream};

const SELECT_COLUMNS: &str =
    r#"id, slug, title, body, image_url, shown, "order", created_at, updated_at"#;

/// Flat row shape for the `news` table.
///
/// `from_entity`/`into_entity` are pure inverse mappings (up to
/// timestamp precision) between the aggregate and this row.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct NewsRow {
    pub id: Uuid,
    pub slug: String,
    pub title: String,
    pub body: String,
    pub image_url: Option<String>,
    pub shown: bool,
    #[sqlx(rename = "order")]
    pub order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewsRow {
    /// Projects an aggregate to its row shape.
    pub fn from_entity(news: &News) -> Self {
        Self {
            id: *news.id().as_uuid(),
            slug: news.slug().as_str().to_string(),
            title: news.title().as_str().to_string(),
            body: news.body().to_string(),
            image_url: news.image_url().map(|u| u.as_str().to_string()),
            shown: news.shown(),
            order: news.order(),
            created_at: *news.created_at().as_datetime(),
            updated_at: *news.updated_at().as_datetime(),
        }
    }

    /// Rebuilds the aggregate from its row shape.
    ///
    /// Stored values passed validation when written; a failure here
    /// means the row was corrupted outside this application.
    pub fn into_entity(self) -> Result<News, DomainError> {
        let slug = Slug::new(self.slug)
            .map_err(|e| DomainError::database(format!("corrupt news row: {}", e)))?;
        let title = Title::new(self.title)
            .map_err(|e| DomainError::database(format!("corrupt news row: {}", e)))?;
        let image_url = ImageUrl::optional(self.image_url)
            .map_err(|e| DomainError::database(format!("corrupt news row: {}", e)))?;

        Ok(News::reconstitute(
            NewsId::from_uuid(self.id),
            slug,
            title,
            self.body,
            image_url,
            self.shown,
            self.order,
            Timestamp::from_datetime(self.created_at),
            Timestamp::from_datetime(self.updated_at),
        ))
    }
}

/// PostgreSQL News repository.
#[derive(Clone)]
pub struct PostgresNewsRepository {
    pool: PgPool,
}

impl PostgresNewsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Resolves the sort column against the whitelist; unknown fields fall
/// back to `created_at` descending. Only whitelisted static strings
/// reach the SQL text.
fn sort_clause(query: &ListQuery) -> (&'static str, SortOrder) {
    match query.sort_field.as_str() {
        "slug" => ("slug", query.sort_order),
        "title" => ("title", query.sort_order),
        "order" => (r#""order""#, query.sort_order),
        "updated_at" => ("updated_at", query.sort_order),
        "created_at" => ("created_at", query.sort_order),
        _ => ("created_at", SortOrder::Desc),
    }
}

/// Appends the filter predicate shared by `find_many` and `count_many`.
fn push_filters(qb: &mut QueryBuilder<'_, Postgres>, filter: &NewsFilter) {
    let mut prefix = " WHERE ";
    if let Some(shown) = filter.shown {
        qb.push(prefix).push("shown = ").push_bind(shown);
        prefix = " AND ";
    }
    if let Some(search) = &filter.search {
        // Escaped pattern so the term matches literally; see like_pattern.
        let pattern = super::like_pattern(search);
        qb.push(prefix)
            .push("(slug ILIKE ")
            .push_bind(pattern.clone())
            .push(" ESCAPE '\\'")
            .push(" OR title ILIKE ")
            .push_bind(pattern.clone())
            .push(" ESCAPE '\\'")
            .push(" OR body ILIKE ")
            .push_bind(pattern)
            .push(" ESCAPE '\\')");
    }
}

#[async_trait]
impl NewsRepository for PostgresNewsRepository {
    async fn add(&self, news: &News) -> Result<(), DomainError> {
        let row = NewsRow::from_entity(news);
        sqlx::query(
            r#"
            INSERT INTO news (
                id, slug, title, body, image_url, shown, "order", created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(row.id)
        .bind(&row.slug)
        .bind(&row.title)
        .bind(&row.body)
        .bind(&row.image_url)
        .bind(row.shown)
        .bind(row.order)
        .bind(row.created_at)
        .bind(row.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to insert news: {}", e)))?;

        Ok(())
    }

    async fn get_by_id(&self, id: &NewsId) -> Result<Option<News>, DomainError> {
        let row: Option<NewsRow> = sqlx::query_as(&format!(
            "SELECT {} FROM news WHERE id = $1",
            SELECT_COLUMNS
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to fetch news: {}", e)))?;

        row.map(NewsRow::into_entity).transpose()
    }

    async fn get_by_slug(&self, slug: &str) -> Result<Option<News>, DomainError> {
        let row: Option<NewsRow> = sqlx::query_as(&format!(
            "SELECT {} FROM news WHERE slug = $1",
            SELECT_COLUMNS
        ))
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to fetch news by slug: {}", e)))?;

        row.map(NewsRow::into_entity).transpose()
    }

    async fn update(&self, news: &News) -> Result<(), DomainError> {
        let row = NewsRow::from_entity(news);
        let result = sqlx::query(
            r#"
            UPDATE news SET
                slug = $2,
                title = $3,
                body = $4,
                image_url = $5,
                shown = $6,
                "order" = $7,
                created_at = $8,
                updated_at = $9
            WHERE id = $1
            "#,
        )
        .bind(row.id)
        .bind(&row.slug)
        .bind(&row.title)
        .bind(&row.body)
        .bind(&row.image_url)
        .bind(row.shown)
        .bind(row.order)
        .bind(row.created_at)
        .bind(row.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to update news: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("News", news.id()));
        }

        Ok(())
    }

    async fn delete(&self, id: &NewsId) -> Result<(), DomainError> {
        // Idempotent: zero affected rows is not an error.
        sqlx::query("DELETE FROM news WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to delete news: {}", e)))?;

        Ok(())
    }

    async fn find_many(
        &self,
        query: &ListQuery,
        filter: &NewsFilter,
    ) -> Result<NewsStream, DomainError> {
        let (column, order) = sort_clause(query);

        let mut qb: QueryBuilder<'_, Postgres> =
            QueryBuilder::new(format!("SELECT {} FROM news", SELECT_COLUMNS));
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

        let rows: Vec<NewsRow> = qb
            .build_query_as()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to list news: {}", e)))?;

        Ok(stream::iter(rows.into_iter().map(NewsRow::into_entity)).boxed())
    }

    async fn count_many(&self, filter: &NewsFilter) -> Result<u64, DomainError> {
        let mut qb: QueryBuilder<'_, Postgres> = QueryBuilder::new("SELECT COUNT(*) FROM news");
        push_filters(&mut qb, filter);

        let count: i64 = qb
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to count news: {}", e)))?;

        Ok(count as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_news() -> News {
        News::new(
            Slug::new("launch").unwrap(),
            Title::new("Product Launch").unwrap(),
            "We are launching.".to_string(),
            Some(ImageUrl::new("https://cdn.example.com/launch.png").unwrap()),
        )
        .with_order(2)
    }

    #[test]
    fn row_mapping_round_trips() {
        let news = test_news();
        let restored = NewsRow::from_entity(&news).into_entity().unwrap();
        assert_eq!(news, restored);
    }

    #[test]
    fn row_mapping_preserves_absent_image() {
        let news = News::new(
            Slug::new("plain").unwrap(),
            Title::new("Plain").unwrap(),
            "Body".to_string(),
            None,
        );
        let row = NewsRow::from_entity(&news);
        assert_eq!(row.image_url, None);
        assert_eq!(row.into_entity().unwrap(), news);
    }

    #[test]
    fn sort_clause_accepts_whitelisted_fields() {
        let q = ListQuery::new("slug", SortOrder::Asc, 0, 10);
        assert_eq!(sort_clause(&q), ("slug", SortOrder::Asc));

        let q = ListQuery::new("order", SortOrder::Desc, 0, 10);
        assert_eq!(sort_clause(&q), (r#""order""#, SortOrder::Desc));
    }

    #[test]
    fn sort_clause_falls_back_on_unknown_field() {
        let q = ListQuery::new("; DROP TABLE news", SortOrder::Asc, 0, 10);
        assert_eq!(sort_clause(&q), ("created_at", SortOrder::Desc));
    }

    #[test]
    fn push_filters_composes_conjunction() {
        let mut qb: QueryBuilder<'_, Postgres> = QueryBuilder::new("SELECT COUNT(*) FROM news");
        push_filters(
            &mut qb,
            &NewsFilter::shown(true).with_search("report"),
        );
        let sql = qb.sql();
        assert!(sql.contains("WHERE shown ="));
        assert!(sql.contains("AND (slug ILIKE"));
        assert!(sql.contains("OR body ILIKE"));
        // every ILIKE declares the escape character for the pattern
        assert_eq!(sql.matches("ESCAPE '\\'").count(), 3);
    }
}
