use crate::error::{AppError, AppResult};

/// Square table of pairwise similarity scores, labeled on both axes by series title
///
/// Values are stored row-major. Row `i` and column `i` both belong to `labels[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    labels: Vec<String>,
    values: Vec<f64>,
}

impl SimilarityMatrix {
    /// Creates a matrix, checking that `values` holds exactly `labels.len()²` entries
    pub fn new(labels: Vec<String>, values: Vec<f64>) -> AppResult<Self> {
        let expected = labels.len() * labels.len();
        if values.len() != expected {
            return Err(AppError::Data(format!(
                "similarity matrix for {} titles needs {} values, got {}",
                labels.len(),
                expected,
                values.len()
            )));
        }
        Ok(Self { labels, values })
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Similarity scores of series `i` against every series, in label order
    pub fn row(&self, i: usize) -> &[f64] {
        let n = self.len();
        &self.values[i * n..(i + 1) * n]
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.len() + j]
    }

    /// Position of the first label exactly equal to `label`
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| l == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_new_rejects_non_square() {
        let result = SimilarityMatrix::new(labels(&["A", "B"]), vec![1.0, 0.5, 0.5]);
        assert!(matches!(result, Err(AppError::Data(_))));
    }

    #[test]
    fn test_row_and_get() {
        let matrix = SimilarityMatrix::new(
            labels(&["A", "B"]),
            vec![1.0, 0.25, 0.25, 1.0],
        )
        .unwrap();

        assert_eq!(matrix.len(), 2);
        assert_eq!(matrix.row(1), &[0.25, 1.0]);
        assert_eq!(matrix.get(0, 1), 0.25);
        assert_eq!(matrix.index_of("B"), Some(1));
        assert_eq!(matrix.index_of("C"), None);
    }

    #[test]
    fn test_empty_matrix() {
        let matrix = SimilarityMatrix::new(Vec::new(), Vec::new()).unwrap();
        assert!(matrix.is_empty());
    }
}
