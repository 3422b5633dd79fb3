use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// One row exactly as it arrives in the batch CSV. Every field is optional
/// because nothing about the input can be trusted yet; the cleaning stage
/// turns this into a `CleanRecord` or rejects it.
#[derive(Debug, Deserialize)]
pub struct RawRow {
    pub review_id: Option<String>,
    pub product_id: Option<String>,
    pub customer_id: Option<String>,
    pub rating: Option<String>,
    pub review_date: Option<String>,
    pub review_text: Option<String>,
}

/// A review record after cleaning.
///
/// Invariants:
/// - `review_id` and `product_id` are non-empty, `product_id` uppercased,
/// - `rating` is 0 when the input had no usable rating,
/// - `review_date` is a real calendar date or `None`, never a junk string,
/// - `review_text` is never empty.
#[derive(Debug, Clone, Serialize)]
pub struct CleanRecord {
    pub review_id: String,
    pub product_id: String,
    pub customer_id: Option<String>,
    pub rating: i32,
    pub review_date: Option<NaiveDate>,
    pub review_text: String,
}

#[derive(Debug, Serialize, Tabled, Clone)]
pub struct ProductAnalyticsRow {
    pub product_id: String,
    pub average_rating: f64,
    pub review_count: usize,
}

#[derive(Debug, Serialize, Tabled, Clone)]
pub struct DateWiseReviewRow {
    pub review_date: NaiveDate,
    pub review_count: usize,
}

#[derive(Debug, Serialize, Tabled, Clone)]
pub struct TopCustomerRow {
    pub customer_id: String,
    pub total_reviews: usize,
    pub average_rating: f64,
}

#[derive(Debug, Serialize, Tabled, Clone)]
pub struct RatingDistributionRow {
    pub rating: i32,
    pub rating_count: usize,
    pub percentage: f64,
}

/// Batch-level statistics written to `summary.json` next to the reports.
#[derive(Debug, Serialize)]
pub struct SummaryStats {
    pub total_reviews: usize,
    pub total_products: usize,
    pub total_customers: usize,
    pub global_average_rating: f64,
    pub skipped_rows: usize,
}
