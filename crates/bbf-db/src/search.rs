//! Filtered lead queries over `businesses`.

use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::businesses::{BusinessRow, BUSINESS_COLUMNS};
use crate::DbError;

pub const DEFAULT_SEARCH_LIMIT: i64 = 100;

/// Filters for [`search_businesses`]. Unset fields do not constrain the query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeadFilter {
    /// Substring match.
    pub category: Option<String>,
    /// Substring match.
    pub city: Option<String>,
    /// Exact match.
    pub state: Option<String>,
    pub min_rating: Option<f64>,
    pub max_rating: Option<f64>,
    /// `Some(false)` selects businesses with no (or an empty) website.
    pub has_website: Option<bool>,
    pub has_phone: Option<bool>,
    pub min_reviews: Option<i64>,
    /// Defaults to [`DEFAULT_SEARCH_LIMIT`].
    pub limit: Option<i64>,
}

impl LeadFilter {
    #[must_use]
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_SEARCH_LIMIT)
    }
}

/// Businesses matching `filter`, most-reviewed first.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn search_businesses(
    pool: &SqlitePool,
    filter: &LeadFilter,
) -> Result<Vec<BusinessRow>, DbError> {
    let mut qb: QueryBuilder<'_, Sqlite> =
        QueryBuilder::new(format!("SELECT {BUSINESS_COLUMNS} FROM businesses WHERE 1=1"));

    if let Some(category) = &filter.category {
        qb.push(" AND category LIKE ").push_bind(format!("%{category}%"));
    }
    if let Some(city) = &filter.city {
        qb.push(" AND city LIKE ").push_bind(format!("%{city}%"));
    }
    if let Some(state) = &filter.state {
        qb.push(" AND state = ").push_bind(state.clone());
    }
    if let Some(min) = filter.min_rating {
        qb.push(" AND rating >= ").push_bind(min);
    }
    if let Some(max) = filter.max_rating {
        qb.push(" AND rating <= ").push_bind(max);
    }
    push_presence(&mut qb, "website", filter.has_website);
    push_presence(&mut qb, "phone", filter.has_phone);
    if let Some(min) = filter.min_reviews {
        qb.push(" AND review_count >= ").push_bind(min);
    }

    qb.push(" ORDER BY review_count DESC LIMIT ")
        .push_bind(filter.limit());

    let rows = qb.build_query_as::<BusinessRow>().fetch_all(pool).await?;
    tracing::debug!(matches = rows.len(), ?filter, "lead search");
    Ok(rows)
}

fn push_presence(qb: &mut QueryBuilder<'_, Sqlite>, column: &str, wanted: Option<bool>) {
    match wanted {
        Some(true) => {
            qb.push(format!(" AND {column} IS NOT NULL AND {column} != ''"));
        }
        Some(false) => {
            qb.push(format!(" AND ({column} IS NULL OR {column} = '')"));
        }
        None => {}
    }
}
