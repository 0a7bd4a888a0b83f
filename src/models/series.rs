use serde::{Deserialize, Serialize};

/// Column names the feature builder requires in the raw dataset
pub const REQUIRED_COLUMNS: [&str; 10] = [
    "drama_name",
    "country",
    "type",
    "synopsis",
    "year",
    "tot_eps",
    "duration",
    "content_rt",
    "rank",
    "pop",
];

/// One raw row of the series dataset, as read from CSV
///
/// Every field is optional because the source data has gaps; the feature
/// builder decides which gaps are imputed, dropped or rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SeriesRecord {
    pub drama_name: Option<String>,
    pub country: Option<String>,
    #[serde(rename = "type")]
    pub series_type: Option<String>,
    pub synopsis: Option<String>,
    pub year: Option<f64>,
    pub tot_eps: Option<f64>,
    pub duration: Option<f64>,
    pub content_rt: Option<String>,
    pub rank: Option<f64>,
    pub pop: Option<f64>,
}

/// A fully populated series, ready for feature construction
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub country: String,
    pub series_type: String,
    pub synopsis: String,
    pub year: f64,
    pub total_episodes: f64,
    pub duration: f64,
    pub content_rating: String,
    pub rank: f64,
    pub popularity: f64,
}

impl Series {
    /// Name, country, type and synopsis joined into the document used for TF-IDF
    pub fn metadata_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.name, self.country, self.series_type, self.synopsis
        )
    }
}
