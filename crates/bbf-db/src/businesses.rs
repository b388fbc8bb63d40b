//! Database operations for `businesses` and their appended `reviews`.

use bbf_core::{Business, Review};
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{Acquire, SqliteConnection, SqlitePool};

use crate::DbError;

pub(crate) const BUSINESS_COLUMNS: &str = "place_id, name, category, address, city, state, \
     zip_code, phone, website, rating, review_count, latitude, longitude, scraped_at, updated_at";

/// A row from the `businesses` table.
///
/// This is also the record shape handed to the exporter.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct BusinessRow {
    pub place_id: String,
    pub name: String,
    pub category: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub rating: Option<f64>,
    pub review_count: i64,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub scraped_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Outcome of a batch insert.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InsertSummary {
    pub inserted: usize,
    pub failed: usize,
}

/// Upserts every business by `place_id` and appends its reviews.
///
/// The batch runs in one transaction. Each business gets its own savepoint,
/// so a record that violates a constraint is rolled back and counted in
/// [`InsertSummary::failed`] while the rest of the batch is kept.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the transaction itself cannot be started,
/// rolled back or committed.
pub async fn insert_businesses(
    pool: &SqlitePool,
    businesses: &[Business],
) -> Result<InsertSummary, DbError> {
    let mut summary = InsertSummary::default();
    let updated_at = Utc::now();
    let mut tx = pool.begin().await?;

    for business in businesses {
        let mut savepoint = tx.begin().await?;
        match upsert_business(&mut savepoint, business, updated_at).await {
            Ok(()) => {
                savepoint.commit().await?;
                summary.inserted += 1;
            }
            Err(error) => {
                savepoint.rollback().await?;
                summary.failed += 1;
                tracing::warn!(
                    place_id = %business.place_id,
                    name = %business.name,
                    error = %error,
                    "could not store business"
                );
            }
        }
    }

    tx.commit().await?;
    tracing::info!(
        inserted = summary.inserted,
        failed = summary.failed,
        "stored businesses"
    );
    Ok(summary)
}

async fn upsert_business(
    conn: &mut SqliteConnection,
    business: &Business,
    updated_at: DateTime<Utc>,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO businesses \
             (place_id, name, category, address, city, state, zip_code, phone, website, \
              rating, review_count, latitude, longitude, scraped_at, updated_at) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15) \
         ON CONFLICT (place_id) DO UPDATE SET \
             name         = excluded.name, \
             category     = excluded.category, \
             address      = excluded.address, \
             city         = excluded.city, \
             state        = excluded.state, \
             zip_code     = excluded.zip_code, \
             phone        = excluded.phone, \
             website      = excluded.website, \
             rating       = excluded.rating, \
             review_count = excluded.review_count, \
             latitude     = excluded.latitude, \
             longitude    = excluded.longitude, \
             scraped_at   = excluded.scraped_at, \
             updated_at   = excluded.updated_at",
    )
    .bind(&business.place_id)
    .bind(&business.name)
    .bind(&business.category)
    .bind(&business.address)
    .bind(&business.city)
    .bind(&business.state)
    .bind(&business.zip_code)
    .bind(&business.phone)
    .bind(&business.website)
    .bind(business.rating)
    .bind(i64::from(business.review_count))
    .bind(business.latitude)
    .bind(business.longitude)
    .bind(business.scraped_at)
    .bind(updated_at)
    .execute(&mut *conn)
    .await?;

    for review in &business.reviews {
        insert_review(conn, &business.place_id, review).await?;
    }
    Ok(())
}

async fn insert_review(
    conn: &mut SqliteConnection,
    place_id: &str,
    review: &Review,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO reviews (place_id, rating, text, author, review_date) \
         VALUES (?1, ?2, ?3, ?4, ?5)",
    )
    .bind(place_id)
    .bind(i64::from(review.rating))
    .bind(&review.text)
    .bind(&review.author)
    .bind(review.date)
    .execute(&mut *conn)
    .await?;
    Ok(())
}
