use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::DbError;

/// A row from the `reviews` table.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct ReviewRow {
    pub id: i64,
    pub place_id: String,
    pub rating: i64,
    pub text: String,
    pub author: Option<String>,
    pub review_date: Option<DateTime<Utc>>,
}

/// Every stored review for `place_id`, in insertion order.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn list_reviews_for(pool: &SqlitePool, place_id: &str) -> Result<Vec<ReviewRow>, DbError> {
    let rows = sqlx::query_as::<_, ReviewRow>(
        "SELECT id, place_id, rating, text, author, review_date \
         FROM reviews \
         WHERE place_id = ?1 \
         ORDER BY id",
    )
    .bind(place_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}
