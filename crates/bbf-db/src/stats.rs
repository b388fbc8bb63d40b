use sqlx::SqlitePool;

use crate::DbError;

const TOP_CITIES: i64 = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct CityCount {
    pub city: String,
    pub count: i64,
}

/// Summary counts over the whole store.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreStats {
    pub total_businesses: i64,
    pub total_reviews: i64,
    /// Distinct non-empty categories, alphabetical.
    pub categories: Vec<String>,
    /// The ten cities with the most businesses.
    pub cities: Vec<CityCount>,
    /// `None` when no business has a rating.
    pub avg_rating: Option<f64>,
}

/// # Errors
///
/// Returns [`DbError::Sqlx`] if any of the summary queries fail.
pub async fn get_stats(pool: &SqlitePool) -> Result<StoreStats, DbError> {
    let total_businesses = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM businesses")
        .fetch_one(pool)
        .await?;
    let total_reviews = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM reviews")
        .fetch_one(pool)
        .await?;

    let categories = sqlx::query_scalar::<_, String>(
        "SELECT DISTINCT category FROM businesses WHERE category != '' ORDER BY category",
    )
    .fetch_all(pool)
    .await?;

    let cities = sqlx::query_as::<_, (String, i64)>(
        "SELECT city, COUNT(*) AS count \
         FROM businesses \
         GROUP BY city \
         ORDER BY count DESC, city \
         LIMIT ?1",
    )
    .bind(TOP_CITIES)
    .fetch_all(pool)
    .await?
    .into_iter()
    .map(|(city, count)| CityCount { city, count })
    .collect();

    let avg_rating = sqlx::query_scalar::<_, Option<f64>>(
        "SELECT AVG(rating) FROM businesses WHERE rating IS NOT NULL",
    )
    .fetch_one(pool)
    .await?;

    Ok(StoreStats {
        total_businesses,
        total_reviews,
        categories,
        cities,
        avg_rating,
    })
}
