use crate::error::Result;
use serde::Serialize;
use std::path::Path;
use tabled::{settings::Style, Table, Tabled};

/// Write one report (or the cleaned batch itself) as a CSV artifact.
/// An empty report produces an empty file rather than an error.
pub fn write_csv<T: Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    for r in rows {
        wtr.serialize(r)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let s = serde_json::to_string_pretty(value)?;
    std::fs::write(path, s)?;
    Ok(())
}

/// Print the first `max_rows` rows of a report as a markdown table, with the
/// numbered title block used for every console preview.
pub fn preview_table<T>(report_no: usize, title: &str, note: &str, rows: &[T], max_rows: usize)
where
    T: Tabled + Clone,
{
    println!("Report {}: {}", report_no, title);
    println!("({})\n", note);
    let slice: Vec<T> = rows.iter().cloned().take(max_rows).collect();
    if slice.is_empty() {
        println!("(no rows)\n");
        return;
    }
    let table_str = Table::new(slice).with(Style::markdown()).to_string();
    println!("{}\n", table_str);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ProductAnalyticsRow;
    use tempfile::tempdir;

    #[test]
    fn write_csv_emits_header_and_rows() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("product_analytics.csv");
        let rows = vec![ProductAnalyticsRow {
            product_id: "P-005".to_string(),
            average_rating: 5.0,
            review_count: 1,
        }];
        write_csv(&path, &rows).expect("write");
        let contents = std::fs::read_to_string(&path).expect("read back");
        let mut lines = contents.lines();
        assert_eq!(
            lines.next(),
            Some("product_id,average_rating,review_count")
        );
        assert_eq!(lines.next(), Some("P-005,5.0,1"));
    }

    #[test]
    fn write_csv_of_empty_report_produces_empty_file() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("empty.csv");
        let rows: Vec<ProductAnalyticsRow> = Vec::new();
        write_csv(&path, &rows).expect("write");
        let contents = std::fs::read_to_string(&path).expect("read back");
        assert!(contents.is_empty());
    }

    #[test]
    fn write_json_is_pretty_printed() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("summary.json");
        let summary = crate::types::SummaryStats {
            total_reviews: 2,
            total_products: 2,
            total_customers: 2,
            global_average_rating: 4.5,
            skipped_rows: 0,
        };
        write_json(&path, &summary).expect("write");
        let contents = std::fs::read_to_string(&path).expect("read back");
        assert!(contents.contains("\"total_reviews\": 2"));
        assert!(contents.contains("\"global_average_rating\": 4.5"));
    }
}
