//! Terminal recommendation lookup.
//!
//! One-shot:
//! ```bash
//! recommend --matrix cosine_similarity_matrix.csv --title "Star Struck" --count 3
//! ```
//!
//! Without `--title`, titles are read from stdin, one per line.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use drama_recs::{
    logging,
    models::QueryError,
    services::{matrix_store, Recommender},
};

/// Recommend series similar to a title
#[derive(Parser, Debug)]
#[command(name = "recommend", version, about = "Recommend similar series")]
struct RecommendArgs {
    /// Similarity matrix produced by build-matrix
    #[arg(short, long, value_name = "FILE", default_value = "cosine_similarity_matrix.csv")]
    matrix: PathBuf,

    /// Series title; prompts interactively when omitted
    #[arg(short, long)]
    title: Option<String>,

    /// Number of recommendations
    #[arg(short, long, default_value_t = 2, value_parser = clap::value_parser!(u64).range(1..))]
    count: u64,

    /// Logging verbosity level
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = RecommendArgs::parse();
    logging::init_tracing(&args.log_level);

    let matrix = matrix_store::load_matrix(&args.matrix)
        .with_context(|| format!("Failed to load {}", args.matrix.display()))?;
    let recommender = Recommender::new(matrix);
    let count = args.count as usize;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Some(title) = &args.title {
        print_recommendations(&mut out, &recommender, title, count)?;
        return Ok(());
    }

    let stdin = io::stdin();
    loop {
        write!(out, "Choose a series: ")?;
        out.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let title = line.trim();
        if title.is_empty() {
            continue;
        }
        print_recommendations(&mut out, &recommender, title, count)?;
    }

    Ok(())
}

fn print_recommendations<W: Write>(
    out: &mut W,
    recommender: &Recommender,
    title: &str,
    count: usize,
) -> io::Result<()> {
    match recommender.recommend(title, count) {
        Ok(recs) => {
            writeln!(out, "Recommended series for {}:", recs.matched_title)?;
            for rec in &recs.recommendations {
                writeln!(out, "- {} ({:.3})", rec.title, rec.similarity)?;
            }
        }
        Err(err @ QueryError::NotFound { .. }) => writeln!(out, "{}", err)?,
        Err(err) => writeln!(out, "error: {}", err)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use drama_recs::models::SimilarityMatrix;

    fn recommender() -> Recommender {
        let labels = ["Star Struck", "Queenmaker", "Idol Days"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        #[rustfmt::skip]
        let values = vec![
            1.0, 0.2, 0.7,
            0.2, 1.0, 0.1,
            0.7, 0.1, 1.0,
        ];
        Recommender::new(SimilarityMatrix::new(labels, values).unwrap())
    }

    fn printed(title: &str, count: usize) -> String {
        let mut out = Vec::new();
        print_recommendations(&mut out, &recommender(), title, count).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_prints_ranked_titles_with_scores() {
        assert_eq!(
            printed("star-struck", 1),
            "Recommended series for Star Struck:\n- Idol Days (0.700)\n"
        );
    }

    #[test]
    fn test_prints_not_found_message() {
        assert_eq!(printed("Nope", 2), "Series 'Nope' not found in dataset\n");
    }

    #[test]
    fn test_prints_invalid_count_as_error() {
        assert_eq!(
            printed("Star Struck", 0),
            "error: count must be at least 1, got 0\n"
        );
    }
}
