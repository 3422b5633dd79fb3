// Entry point and high-level CLI flow.
//
// One invocation processes one batch file end to end:
// - read the raw rows, clean them, and print diagnostics,
// - write the cleaned batch plus the four aggregate reports as CSV,
// - write a JSON summary and preview each report on the console.
mod clean;
mod error;
mod loader;
mod output;
mod reports;
mod types;
mod util;

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "review_analytics")]
#[command(about = "Cleans a batch of product review records and produces aggregate reports")]
#[command(version)]
struct Cli {
    /// Batch file to process (CSV with a header row)
    input: PathBuf,

    /// Directory the cleaned batch, reports and summary are written to
    #[arg(long, default_value = "output")]
    output_dir: PathBuf,

    /// Rows shown in each console preview
    #[arg(long, default_value_t = 3)]
    preview_rows: usize,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let (raw, load_report) = loader::read_batch(&cli.input)
        .with_context(|| format!("failed to read batch {}", cli.input.display()))?;
    let (data, clean_report) = clean::clean_batch(raw);

    println!(
        "Processing batch... ({} rows read, {} records cleaned)",
        util::format_int(load_report.total_rows as i64),
        util::format_int(clean_report.cleaned_rows as i64)
    );
    if load_report.malformed_rows > 0 {
        println!(
            "Note: {} rows could not be parsed and were skipped.",
            util::format_int(load_report.malformed_rows as i64)
        );
    }
    if clean_report.skipped_rows > 0 {
        println!(
            "Note: {} rows skipped (missing review or product id).",
            util::format_int(clean_report.skipped_rows as i64)
        );
    }
    if clean_report.defaulted_ratings > 0 {
        info!(
            "defaulted {} missing/unparseable ratings to 0",
            clean_report.defaulted_ratings
        );
    }
    if clean_report.undated_rows > 0 {
        info!("{} records have no usable review date", clean_report.undated_rows);
    }
    println!();

    std::fs::create_dir_all(&cli.output_dir)
        .with_context(|| format!("failed to create {}", cli.output_dir.display()))?;

    let cleaned_file = cli.output_dir.join("cleaned_reviews.csv");
    output::write_csv(&cleaned_file, &data)?;
    info!("wrote cleaned batch to {}", cleaned_file.display());

    let r1 = reports::product_analytics(&data);
    output::write_csv(&cli.output_dir.join("product_analytics.csv"), &r1)?;
    output::preview_table(
        1,
        "Average Rating Per Product",
        "Sorted by average rating",
        &r1,
        cli.preview_rows,
    );

    let r2 = reports::date_wise_reviews(&data);
    output::write_csv(&cli.output_dir.join("date_wise_reviews.csv"), &r2)?;
    output::preview_table(
        2,
        "Date-wise Review Count",
        "Most recent day first",
        &r2,
        cli.preview_rows,
    );

    let r3 = reports::top_customers(&data);
    output::write_csv(&cli.output_dir.join("top_customers.csv"), &r3)?;
    output::preview_table(
        3,
        "Top 5 Most Active Customers",
        "Ranked by total reviews",
        &r3,
        cli.preview_rows,
    );

    let r4 = reports::rating_distribution(&data);
    output::write_csv(&cli.output_dir.join("rating_distribution.csv"), &r4)?;
    output::preview_table(
        4,
        "Overall Rating Distribution",
        "Share of each star rating, unrated records excluded",
        &r4,
        cli.preview_rows,
    );

    let summary = reports::generate_summary(&data, &clean_report);
    output::write_json(&cli.output_dir.join("summary.json"), &summary)?;
    println!(
        "Summary: {} reviews across {} products from {} customers (avg rating {:.2}).",
        util::format_int(summary.total_reviews as i64),
        util::format_int(summary.total_products as i64),
        util::format_int(summary.total_customers as i64),
        summary.global_average_rating
    );
    println!("(All outputs written to {})", cli.output_dir.display());

    Ok(())
}
