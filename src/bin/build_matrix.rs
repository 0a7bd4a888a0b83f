//! Offline feature builder.
//!
//! Reads the raw series dataset, builds the fused-feature cosine similarity
//! matrix and writes it to CSV for the `recommend` CLI and the HTTP server.
//!
//! ```bash
//! build-matrix --input korean_drama.csv --output cosine_similarity_matrix.csv
//! ```

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use drama_recs::{
    logging,
    services::{build_matrix_file, RatingEncoding},
};
use tracing::info;

/// Build the series similarity matrix from raw records
#[derive(Parser, Debug)]
#[command(name = "build-matrix", version, about = "Build the series similarity matrix")]
struct BuildArgs {
    /// Raw series dataset (CSV with a header row)
    #[arg(short, long, value_name = "FILE", default_value = "korean_drama.csv")]
    input: PathBuf,

    /// Where to write the similarity matrix
    #[arg(short, long, value_name = "FILE", default_value = "cosine_similarity_matrix.csv")]
    output: PathBuf,

    /// Declared content-rating order; sorted observed ratings are used when omitted
    #[arg(long, value_name = "RATINGS", value_delimiter = ',')]
    rating_categories: Option<Vec<String>>,

    /// Logging verbosity level
    #[arg(long, value_name = "LEVEL", default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = BuildArgs::parse();
    logging::init_tracing(&args.log_level);

    let start = Instant::now();
    let encoding = args
        .rating_categories
        .map(RatingEncoding::Declared)
        .unwrap_or_default();

    let built = build_matrix_file(&args.input, &args.output, encoding).with_context(|| {
        format!(
            "Failed to build similarity matrix from {}",
            args.input.display()
        )
    })?;

    info!(
        series = built.report.series,
        dropped_missing_synopsis = built.report.dropped_missing_synopsis,
        dropped_duplicates = built.report.dropped_duplicates,
        output = %args.output.display(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Build complete"
    );

    Ok(())
}
