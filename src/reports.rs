// The four aggregate reports, each a pure group-by-then-reduce pass over
// the cleaned batch. The queries share no state and never fail; an empty
// eligible subset yields an empty report.
use crate::clean::CleanReport;
use crate::types::{
    CleanRecord, DateWiseReviewRow, ProductAnalyticsRow, RatingDistributionRow, SummaryStats,
    TopCustomerRow,
};
use crate::util::{average, round2};
use chrono::NaiveDate;
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

/// How many customers the activity ranking keeps.
pub const TOP_CUSTOMER_LIMIT: usize = 5;

/// Average rating and review count per product, best-rated products first.
/// Ties in the average break by first appearance in the batch so a rerun of
/// the same batch produces the same rows.
pub fn product_analytics(data: &[CleanRecord]) -> Vec<ProductAnalyticsRow> {
    struct Acc {
        first_seen: usize,
        ratings: Vec<i32>,
    }
    let mut map: HashMap<&str, Acc> = HashMap::new();
    for (idx, r) in data.iter().enumerate() {
        let e = map.entry(r.product_id.as_str()).or_insert_with(|| Acc {
            first_seen: idx,
            ratings: Vec::new(),
        });
        e.ratings.push(r.rating);
    }

    let mut rows: Vec<(usize, ProductAnalyticsRow)> = map
        .into_iter()
        .map(|(product_id, acc)| {
            (
                acc.first_seen,
                ProductAnalyticsRow {
                    product_id: product_id.to_string(),
                    average_rating: round2(average(&acc.ratings)),
                    review_count: acc.ratings.len(),
                },
            )
        })
        .collect();
    rows.sort_by(|a, b| {
        b.1.average_rating
            .partial_cmp(&a.1.average_rating)
            .unwrap_or(Ordering::Equal)
            .then(a.0.cmp(&b.0))
    });
    rows.into_iter().map(|(_, row)| row).collect()
}

/// Number of reviews submitted per day, most recent day first. Records with
/// no usable date are left out entirely.
pub fn date_wise_reviews(data: &[CleanRecord]) -> Vec<DateWiseReviewRow> {
    let mut map: HashMap<NaiveDate, usize> = HashMap::new();
    for r in data {
        if let Some(date) = r.review_date {
            *map.entry(date).or_insert(0) += 1;
        }
    }

    let mut rows: Vec<DateWiseReviewRow> = map
        .into_iter()
        .map(|(review_date, review_count)| DateWiseReviewRow {
            review_date,
            review_count,
        })
        .collect();
    rows.sort_by(|a, b| b.review_date.cmp(&a.review_date));
    rows
}

/// The most active reviewers: review count and average rating per customer,
/// truncated to the top `TOP_CUSTOMER_LIMIT`. Records without a customer id
/// are excluded; ties on the count break first-seen-wins.
pub fn top_customers(data: &[CleanRecord]) -> Vec<TopCustomerRow> {
    struct Acc {
        first_seen: usize,
        ratings: Vec<i32>,
    }
    let mut map: HashMap<&str, Acc> = HashMap::new();
    for (idx, r) in data.iter().enumerate() {
        let Some(customer_id) = r.customer_id.as_deref() else {
            continue;
        };
        let e = map.entry(customer_id).or_insert_with(|| Acc {
            first_seen: idx,
            ratings: Vec::new(),
        });
        e.ratings.push(r.rating);
    }

    let mut rows: Vec<(usize, TopCustomerRow)> = map
        .into_iter()
        .map(|(customer_id, acc)| {
            (
                acc.first_seen,
                TopCustomerRow {
                    customer_id: customer_id.to_string(),
                    total_reviews: acc.ratings.len(),
                    average_rating: round2(average(&acc.ratings)),
                },
            )
        })
        .collect();
    rows.sort_by(|a, b| b.1.total_reviews.cmp(&a.1.total_reviews).then(a.0.cmp(&b.0)));
    rows.into_iter()
        .take(TOP_CUSTOMER_LIMIT)
        .map(|(_, row)| row)
        .collect()
}

/// Count and share of each star rating, highest rating first. Rating 0 means
/// "no rating supplied" and is excluded from both the buckets and the
/// percentage denominator.
pub fn rating_distribution(data: &[CleanRecord]) -> Vec<RatingDistributionRow> {
    let mut map: HashMap<i32, usize> = HashMap::new();
    for r in data {
        if r.rating > 0 {
            *map.entry(r.rating).or_insert(0) += 1;
        }
    }

    let rated_total: usize = map.values().sum();
    if rated_total == 0 {
        return Vec::new();
    }

    let mut rows: Vec<RatingDistributionRow> = map
        .into_iter()
        .map(|(rating, rating_count)| RatingDistributionRow {
            rating,
            rating_count,
            percentage: round2(rating_count as f64 * 100.0 / rated_total as f64),
        })
        .collect();
    rows.sort_by(|a, b| b.rating.cmp(&a.rating));
    rows
}

/// Batch-level statistics for `summary.json`.
pub fn generate_summary(data: &[CleanRecord], clean_report: &CleanReport) -> SummaryStats {
    let products: HashSet<&str> = data.iter().map(|r| r.product_id.as_str()).collect();
    let customers: HashSet<&str> = data.iter().filter_map(|r| r.customer_id.as_deref()).collect();
    let ratings: Vec<i32> = data.iter().map(|r| r.rating).collect();
    SummaryStats {
        total_reviews: data.len(),
        total_products: products.len(),
        total_customers: customers.len(),
        global_average_rating: round2(average(&ratings)),
        skipped_rows: clean_report.skipped_rows,
    }
}
