//! SQLite implementation of the mapping repository.

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::domain::entities::{Mapping, NewMapping};
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;

/// Row shape of the `urls` table.
#[derive(sqlx::FromRow)]
struct MappingRow {
    id: i64,
    code: String,
    long_url: String,
}

impl From<MappingRow> for Mapping {
    fn from(row: MappingRow) -> Self {
        Mapping::new(row.id, row.code, row.long_url)
    }
}

/// SQLite repository for mapping storage and retrieval.
///
/// Holds a connection pool shared across all requests; prepared statements
/// with bound parameters protect against SQL injection.
pub struct SqliteMappingRepository {
    pool: SqlitePool,
}

impl SqliteMappingRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MappingRepository for SqliteMappingRepository {
    async fn insert(&self, new_mapping: NewMapping) -> Result<Mapping, AppError> {
        let row = sqlx::query_as::<_, MappingRow>(
            r#"
            INSERT INTO urls (code, long_url)
            VALUES (?1, ?2)
            RETURNING id, code, long_url
            "#,
        )
        .bind(&new_mapping.code)
        .bind(&new_mapping.long_url)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Mapping>, AppError> {
        let row = sqlx::query_as::<_, MappingRow>(
            r#"
            SELECT id, code, long_url
            FROM urls
            WHERE code = ?1
            "#,
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Into::into))
    }
}
