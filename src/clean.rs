// Cleaning stage: normalizes a raw batch into well-formed records.
//
// This is a pure pass over the in-memory batch. Malformed fields are
// repaired with fixed defaults and counted; only records missing a
// mandatory id are dropped, and those are counted too rather than
// surfaced as errors.
use crate::types::{CleanRecord, RawRow};
use crate::util::{parse_date_safe, parse_i32_safe};

/// Placeholder stored when a review arrives with no text.
pub const NO_REVIEW_TEXT: &str = "No review text";

/// Diagnostics for one cleaning pass.
#[derive(Debug, Clone, Default)]
pub struct CleanReport {
    pub total_rows: usize,
    pub cleaned_rows: usize,
    pub skipped_rows: usize,
    pub defaulted_ratings: usize,
    pub defaulted_texts: usize,
    pub undated_rows: usize,
}

/// Clean one batch. Total: never fails, whatever the field contents.
///
/// Per-record rules:
/// - `review_id` and `product_id` are mandatory; a record missing either is
///   excluded and counted in `skipped_rows`.
/// - `product_id` is uppercased so grouping is stable across batches.
/// - `rating` parses as an integer; absent/unparseable becomes 0, meaning
///   "no rating supplied". Parsed values are not clamped.
/// - `review_date` parses as an ISO date; anything else becomes `None`.
/// - `review_text` falls back to `NO_REVIEW_TEXT` when absent or blank.
/// - `customer_id` passes through, with blank normalized to `None`.
pub fn clean_batch(batch: Vec<RawRow>) -> (Vec<CleanRecord>, CleanReport) {
    let mut report = CleanReport {
        total_rows: batch.len(),
        ..CleanReport::default()
    };
    let mut cleaned: Vec<CleanRecord> = Vec::with_capacity(batch.len());

    for row in batch {
        let review_id = match nonempty(row.review_id) {
            Some(id) => id,
            None => {
                report.skipped_rows += 1;
                continue;
            }
        };
        let product_id = match nonempty(row.product_id) {
            Some(id) => id.to_uppercase(),
            None => {
                report.skipped_rows += 1;
                continue;
            }
        };

        let rating = match parse_i32_safe(row.rating.as_deref()) {
            Some(r) => r,
            None => {
                report.defaulted_ratings += 1;
                0
            }
        };

        let review_date = parse_date_safe(row.review_date.as_deref());
        if review_date.is_none() {
            report.undated_rows += 1;
        }

        let review_text = match row.review_text {
            Some(text) if !text.trim().is_empty() => text,
            _ => {
                report.defaulted_texts += 1;
                NO_REVIEW_TEXT.to_string()
            }
        };

        cleaned.push(CleanRecord {
            review_id,
            product_id,
            customer_id: nonempty(row.customer_id),
            rating,
            review_date,
            review_text,
        });
    }

    report.cleaned_rows = cleaned.len();
    (cleaned, report)
}

/// Trim a field and treat the blank result as absent.
fn nonempty(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}
