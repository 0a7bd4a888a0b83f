use std::collections::HashMap;

use crate::models::{QueryError, Recommendation, Recommendations, SimilarityMatrix};

/// Folds a title to its lookup key: ASCII punctuation and whitespace removed, lowercased
///
/// "Star-Struck!!" and "star struck" share the key "starstruck".
pub fn normalize_title(title: &str) -> String {
    title
        .chars()
        .filter(|c| !c.is_ascii_punctuation() && !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Read-only recommendation service over a loaded similarity matrix
///
/// Built once per process and shared; nothing mutates it after construction.
#[derive(Debug)]
pub struct Recommender {
    matrix: SimilarityMatrix,
    /// Normalized label -> first matrix index carrying it
    lookup: HashMap<String, usize>,
}

impl Recommender {
    pub fn new(matrix: SimilarityMatrix) -> Self {
        let mut lookup = HashMap::with_capacity(matrix.len());
        for (i, label) in matrix.labels().iter().enumerate() {
            let key = normalize_title(label);
            if let Some(&first) = lookup.get(&key) {
                tracing::warn!(
                    title = %label,
                    shadowed_by = %matrix.labels()[first],
                    "Titles collide after normalization; queries resolve to the first"
                );
                continue;
            }
            lookup.insert(key, i);
        }

        Self { matrix, lookup }
    }

    pub fn titles(&self) -> &[String] {
        self.matrix.labels()
    }

    /// Matrix index of the title a query resolves to
    pub fn resolve(&self, query: &str) -> Option<usize> {
        self.lookup.get(&normalize_title(query)).copied()
    }

    /// Returns up to `count` other series ranked by descending similarity
    ///
    /// Ties keep label order. Asking for more than exist returns all of them.
    pub fn recommend(&self, query: &str, count: usize) -> Result<Recommendations, QueryError> {
        if count == 0 {
            return Err(QueryError::InvalidCount(count));
        }

        let index = self.resolve(query).ok_or_else(|| QueryError::NotFound {
            query: query.to_string(),
        })?;

        let mut ranked: Vec<(usize, f64)> = self
            .matrix
            .row(index)
            .iter()
            .copied()
            .enumerate()
            .filter(|&(j, _)| j != index)
            .collect();
        // Stable sort: equal scores stay in label order
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked.truncate(count);

        let labels = self.matrix.labels();
        let matched_title = labels[index].clone();

        tracing::debug!(
            query = %query,
            matched = %matched_title,
            returned = ranked.len(),
            "Recommendations ranked"
        );

        Ok(Recommendations {
            query: query.to_string(),
            matched_title,
            recommendations: ranked
                .into_iter()
                .map(|(j, similarity)| Recommendation {
                    title: labels[j].clone(),
                    similarity,
                })
                .collect(),
        })
    }
}
