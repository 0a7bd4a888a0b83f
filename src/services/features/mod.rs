pub mod encoding;
pub mod imputation;
pub mod scaling;
pub mod similarity;
pub mod stop_words;
pub mod tfidf;

pub use encoding::CategoryEncoder;
pub use imputation::DurationImputer;
pub use scaling::MinMaxScaler;
pub use similarity::cosine_similarity_matrix;
pub use tfidf::{SparseVector, TfidfMatrix, TfidfVectorizer};

/// Number of numeric features: year, episodes, duration, rating code, rank, popularity
pub const NUMERIC_FEATURES: usize = 6;

/// Fused representation of one series: TF-IDF weights followed by scaled numeric features
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    pub text: SparseVector,
    pub numeric: [f64; NUMERIC_FEATURES],
}

impl FeatureVector {
    pub fn dot(&self, other: &FeatureVector) -> f64 {
        sparse_dot(&self.text, &other.text)
            + self
                .numeric
                .iter()
                .zip(other.numeric.iter())
                .map(|(a, b)| a * b)
                .sum::<f64>()
    }
}

/// Concatenates text rows with scaled numeric rows, series by series
pub fn fuse(text: Vec<SparseVector>, numeric: Vec<[f64; NUMERIC_FEATURES]>) -> Vec<FeatureVector> {
    text.into_iter()
        .zip(numeric)
        .map(|(text, numeric)| FeatureVector { text, numeric })
        .collect()
}

fn sparse_dot(a: &[(usize, f64)], b: &[(usize, f64)]) -> f64 {
    let (mut i, mut j, mut sum) = (0, 0, 0.0);
    while i < a.len() && j < b.len() {
        match a[i].0.cmp(&b[j].0) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                sum += a[i].1 * b[j].1;
                i += 1;
                j += 1;
            }
        }
    }
    sum
}
