use bbf_db::BusinessRow;

pub const DEFAULT_COLUMNS: [&str; 9] = [
    "name",
    "category",
    "address",
    "city",
    "state",
    "phone",
    "website",
    "rating",
    "review_count",
];

pub const OUTREACH_COLUMNS: [&str; 8] = [
    "name",
    "phone",
    "website",
    "city",
    "state",
    "rating",
    "review_count",
    "opportunity_notes",
];

const OUTREACH_REVIEW_FLOOR: i64 = 20;
const OUTREACH_RATING_FLOOR: f64 = 4.0;

/// Cell value for `column`, or `None` for a missing value or unknown column.
#[must_use]
pub fn field(row: &BusinessRow, column: &str) -> Option<String> {
    match column {
        "place_id" => Some(row.place_id.clone()),
        "name" => Some(row.name.clone()),
        "category" => Some(row.category.clone()),
        "address" => Some(row.address.clone()),
        "city" => Some(row.city.clone()),
        "state" => Some(row.state.clone()),
        "zip_code" => row.zip_code.clone(),
        "phone" => row.phone.clone(),
        "website" => row.website.clone(),
        "rating" => row.rating.map(format_float),
        "review_count" => Some(row.review_count.to_string()),
        "latitude" => row.latitude.map(format_float),
        "longitude" => row.longitude.map(format_float),
        "scraped_at" => Some(row.scraped_at.to_rfc3339()),
        "updated_at" => Some(row.updated_at.to_rfc3339()),
        _ => None,
    }
}

// Debug keeps the trailing ".0" on whole numbers ("4.0", not "4").
fn format_float(value: f64) -> String {
    format!("{value:?}")
}

/// Why a lead is worth contacting.
#[must_use]
pub fn opportunity_notes(row: &BusinessRow) -> String {
    let mut notes = Vec::new();
    if row.rating.is_some_and(|r| r < OUTREACH_RATING_FLOOR) {
        notes.push("Below avg rating - may want help");
    }
    if row.website.as_deref().map_or(true, str::is_empty) {
        notes.push("No website - digital marketing opportunity");
    }
    if row.review_count < OUTREACH_REVIEW_FLOOR {
        notes.push("Low review count - reputation management");
    }

    if notes.is_empty() {
        "Standard outreach".to_string()
    } else {
        notes.join("; ")
    }
}
