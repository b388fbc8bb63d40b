use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::DbError;

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct SearchHistoryRow {
    pub id: i64,
    pub query: String,
    pub location: String,
    pub result_count: i64,
    pub searched_at: DateTime<Utc>,
}

/// Appends a search to the history log and returns its row id.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the insert fails.
pub async fn record_search(
    pool: &SqlitePool,
    query: &str,
    location: &str,
    result_count: usize,
) -> Result<i64, DbError> {
    let result = sqlx::query(
        "INSERT INTO search_history (query, location, result_count, searched_at) \
         VALUES (?1, ?2, ?3, ?4)",
    )
    .bind(query)
    .bind(location)
    .bind(i64::try_from(result_count).unwrap_or(i64::MAX))
    .bind(Utc::now())
    .execute(pool)
    .await?;
    Ok(result.last_insert_rowid())
}

/// The `limit` most recent searches, newest first.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn list_search_history(
    pool: &SqlitePool,
    limit: i64,
) -> Result<Vec<SearchHistoryRow>, DbError> {
    let rows = sqlx::query_as::<_, SearchHistoryRow>(
        "SELECT id, query, location, result_count, searched_at \
         FROM search_history \
         ORDER BY id DESC \
         LIMIT ?1",
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}
