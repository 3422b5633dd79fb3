use crate::error::{PipelineError, Result};
use crate::types::RawRow;
use csv::ReaderBuilder;
use std::path::Path;
use tracing::warn;

/// The header the batch contract requires. A payload without these columns
/// cannot be interpreted as a review batch at all.
const EXPECTED_COLUMNS: [&str; 6] = [
    "review_id",
    "product_id",
    "customer_id",
    "rating",
    "review_date",
    "review_text",
];

#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub total_rows: usize,
    pub malformed_rows: usize,
}

/// Read one batch file into raw rows.
///
/// An unreadable file or a header missing one of the six expected columns is
/// a hard error. Individual rows that fail CSV deserialization are skipped
/// and counted instead; the cleaning stage deals with everything else.
pub fn read_batch(path: &Path) -> Result<(Vec<RawRow>, LoadReport)> {
    let mut rdr = ReaderBuilder::new().flexible(true).from_path(path)?;

    let headers = rdr.headers()?.clone();
    for col in EXPECTED_COLUMNS {
        if !headers.iter().any(|h| h == col) {
            return Err(PipelineError::MissingColumn(col.to_string()));
        }
    }

    let mut report = LoadReport::default();
    let mut rows: Vec<RawRow> = Vec::new();
    for result in rdr.deserialize::<RawRow>() {
        report.total_rows += 1;
        match result {
            Ok(row) => rows.push(row),
            Err(err) => {
                report.malformed_rows += 1;
                warn!("skipping malformed row {}: {}", report.total_rows, err);
            }
        }
    }

    Ok((rows, report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn batch_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write batch");
        file
    }

    #[test]
    fn reads_a_well_formed_batch() {
        let file = batch_file(
            "review_id,product_id,customer_id,rating,review_date,review_text\n\
             106,p-005,c-142,5,2025-09-15,Excellent product!\n\
             107,p-011,c-221,4,2025-09-03,Good value for money.\n",
        );
        let (rows, report) = read_batch(file.path()).expect("read");
        assert_eq!(rows.len(), 2);
        assert_eq!(report.total_rows, 2);
        assert_eq!(report.malformed_rows, 0);
        assert_eq!(rows[0].review_id.as_deref(), Some("106"));
        assert_eq!(rows[0].product_id.as_deref(), Some("p-005"));
        assert_eq!(rows[1].rating.as_deref(), Some("4"));
    }

    #[test]
    fn empty_fields_deserialize_as_none() {
        let file = batch_file(
            "review_id,product_id,customer_id,rating,review_date,review_text\n\
             106,p-005,,,,\n",
        );
        let (rows, _) = read_batch(file.path()).expect("read");
        assert_eq!(rows[0].customer_id, None);
        assert_eq!(rows[0].rating, None);
        assert_eq!(rows[0].review_date, None);
        assert_eq!(rows[0].review_text, None);
    }

    #[test]
    fn header_only_batch_reads_as_empty() {
        let file = batch_file("review_id,product_id,customer_id,rating,review_date,review_text\n");
        let (rows, report) = read_batch(file.path()).expect("read");
        assert!(rows.is_empty());
        assert_eq!(report.total_rows, 0);
    }

    #[test]
    fn missing_column_is_a_hard_error() {
        let file = batch_file("review_id,customer_id,rating,review_date,review_text\n1,c,4,,x\n");
        let err = read_batch(file.path()).unwrap_err();
        assert!(matches!(err, PipelineError::MissingColumn(col) if col == "product_id"));
    }

    #[test]
    fn missing_file_is_a_hard_error() {
        let err = read_batch(Path::new("no_such_batch.csv")).unwrap_err();
        assert!(matches!(err, PipelineError::Csv(_)));
    }
}
