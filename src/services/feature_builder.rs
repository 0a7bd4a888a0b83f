use std::collections::HashSet;
use std::path::Path;
use std::time::Instant;

use crate::{
    error::{AppError, AppResult},
    models::{Series, SeriesRecord, SimilarityMatrix},
    services::{dataset, matrix_store},
    services::features::{
        cosine_similarity_matrix, fuse, CategoryEncoder, DurationImputer, MinMaxScaler,
        TfidfVectorizer, NUMERIC_FEATURES,
    },
};

/// How content ratings are turned into integer codes
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RatingEncoding {
    /// Sorted distinct observed ratings
    #[default]
    Sorted,
    /// Caller-declared order; unknown ratings are rejected
    Declared(Vec<String>),
}

/// Counts describing one builder run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuildReport {
    pub loaded: usize,
    pub duration_fill_value: f64,
    pub durations_imputed: usize,
    pub dropped_missing_synopsis: usize,
    pub dropped_duplicates: usize,
    pub series: usize,
    pub vocabulary_size: usize,
}

/// Output of a successful build
#[derive(Debug, Clone)]
pub struct BuildOutput {
    pub matrix: SimilarityMatrix,
    pub report: BuildReport,
}

/// Turns raw series records into a title-labeled similarity matrix
///
/// Pipeline:
/// 1. Impute missing durations with the rounded mean of observed ones
/// 2. Drop records without a synopsis, then later duplicates of a title
/// 3. Encode content ratings, vectorize metadata text with TF-IDF
/// 4. Min-max scale the numeric columns and fuse them with the text weights
/// 5. Compute all-pairs cosine similarity
#[derive(Debug, Clone, Default)]
pub struct FeatureBuilder {
    rating_encoding: RatingEncoding,
    vectorizer: TfidfVectorizer,
}

impl FeatureBuilder {
    pub fn new(rating_encoding: RatingEncoding) -> Self {
        Self {
            rating_encoding,
            vectorizer: TfidfVectorizer::english(),
        }
    }

    pub fn build(&self, mut records: Vec<SeriesRecord>) -> AppResult<BuildOutput> {
        let start = Instant::now();
        let mut report = BuildReport {
            loaded: records.len(),
            ..Default::default()
        };

        if records.is_empty() {
            return Err(AppError::Data("empty dataset: no records to build from".to_string()));
        }

        // Mean is taken before any row is dropped
        let imputer = DurationImputer::fit(&records)?;
        report.duration_fill_value = imputer.fill_value();
        report.durations_imputed = imputer.transform(&mut records);

        // Keep each record's 1-based input position for error messages
        let records: Vec<(usize, SeriesRecord)> = records
            .into_iter()
            .enumerate()
            .filter(|(_, r)| r.synopsis.is_some())
            .map(|(i, r)| (i + 1, r))
            .collect();
        report.dropped_missing_synopsis = report.loaded - records.len();

        if records.is_empty() {
            return Err(AppError::Data(
                "empty dataset: no records with a synopsis".to_string(),
            ));
        }

        let series = self.complete_series(records, &mut report)?;
        report.series = series.len();

        tracing::info!(
            loaded = report.loaded,
            imputed = report.durations_imputed,
            fill_value = report.duration_fill_value,
            dropped_missing_synopsis = report.dropped_missing_synopsis,
            dropped_duplicates = report.dropped_duplicates,
            series = report.series,
            "Records cleaned"
        );

        let encoder = match &self.rating_encoding {
            RatingEncoding::Sorted => {
                CategoryEncoder::fit_sorted(series.iter().map(|s| s.content_rating.as_str()))
            }
            RatingEncoding::Declared(categories) => CategoryEncoder::declared(categories.clone())?,
        };
        tracing::debug!(categories = ?encoder.categories(), "Content ratings encoded");

        let documents: Vec<String> = series.iter().map(Series::metadata_text).collect();
        let tfidf = self.vectorizer.fit_transform(&documents);
        report.vocabulary_size = tfidf.vocabulary.len();

        let numeric = series
            .iter()
            .map(|s| {
                let rating = encoder.encode(&s.content_rating).map_err(|_| {
                    AppError::Data(format!(
                        "series '{}' has undeclared content rating '{}'",
                        s.name, s.content_rating
                    ))
                })?;
                Ok([
                    s.year,
                    s.total_episodes,
                    s.duration,
                    rating as f64,
                    s.rank,
                    s.popularity,
                ])
            })
            .collect::<AppResult<Vec<[f64; NUMERIC_FEATURES]>>>()?;
        let scaled = MinMaxScaler::fit_transform(&numeric)?;

        let vectors = fuse(tfidf.rows, scaled);
        let values = cosine_similarity_matrix(&vectors);
        let labels = series.into_iter().map(|s| s.name).collect();
        let matrix = SimilarityMatrix::new(labels, values)?;

        tracing::info!(
            series = matrix.len(),
            vocabulary = report.vocabulary_size,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Similarity matrix built"
        );

        Ok(BuildOutput { matrix, report })
    }

    /// Drops later duplicates of a title and rejects records with remaining gaps
    fn complete_series(
        &self,
        records: Vec<(usize, SeriesRecord)>,
        report: &mut BuildReport,
    ) -> AppResult<Vec<Series>> {
        let mut seen = HashSet::new();
        let mut series = Vec::with_capacity(records.len());

        for (position, record) in records {
            let name = record.drama_name.clone().ok_or_else(|| {
                AppError::Data(format!("input record {} is missing drama_name", position))
            })?;

            if !seen.insert(name.clone()) {
                tracing::warn!(title = %name, "Duplicate title, keeping first occurrence");
                report.dropped_duplicates += 1;
                continue;
            }

            let missing = |column: &str| {
                AppError::Data(format!("series '{}' is missing {}", name, column))
            };

            series.push(Series {
                country: record.country.ok_or_else(|| missing("country"))?,
                series_type: record.series_type.ok_or_else(|| missing("type"))?,
                synopsis: record.synopsis.ok_or_else(|| missing("synopsis"))?,
                year: record.year.ok_or_else(|| missing("year"))?,
                total_episodes: record.tot_eps.ok_or_else(|| missing("tot_eps"))?,
                duration: record.duration.ok_or_else(|| missing("duration"))?,
                content_rating: record.content_rt.unwrap_or_default(),
                rank: record.rank.ok_or_else(|| missing("rank"))?,
                popularity: record.pop.ok_or_else(|| missing("pop"))?,
                name,
            });
        }

        Ok(series)
    }
}

/// Loads raw records from `dataset`, builds the matrix and persists it to `output`
///
/// Nothing is written unless the whole build succeeds.
pub fn build_matrix_file(
    dataset: &Path,
    output: &Path,
    rating_encoding: RatingEncoding,
) -> AppResult<BuildOutput> {
    let records = dataset::load_records(dataset)?;
    let built = FeatureBuilder::new(rating_encoding).build(records)?;
    matrix_store::save_matrix(&built.matrix, output)?;
    Ok(built)
}
