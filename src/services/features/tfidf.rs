use std::collections::{BTreeMap, HashMap, HashSet};

use super::stop_words;

/// Sparse row: `(vocabulary index, weight)` pairs sorted by index
pub type SparseVector = Vec<(usize, f64)>;

/// TF-IDF weights for a corpus, one L2-normalized sparse row per document
#[derive(Debug, Clone, PartialEq)]
pub struct TfidfMatrix {
    pub vocabulary: Vec<String>,
    pub rows: Vec<SparseVector>,
}

/// Term-frequency / inverse-document-frequency vectorizer
///
/// tf is the raw count; idf(t) = ln((1 + n) / (1 + df(t))) + 1. Tokens are
/// lowercased runs of two or more word characters, minus stop words. The
/// vocabulary is sorted so column order does not depend on document order.
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    stop_words: HashSet<&'static str>,
}

impl Default for TfidfVectorizer {
    fn default() -> Self {
        Self::english()
    }
}

impl TfidfVectorizer {
    pub fn english() -> Self {
        Self {
            stop_words: stop_words::english(),
        }
    }

    pub fn tokenize(&self, text: &str) -> Vec<String> {
        text.to_lowercase()
            .split(|c: char| !(c.is_alphanumeric() || c == '_'))
            .filter(|token| token.chars().count() >= 2)
            .filter(|token| !self.stop_words.contains(token))
            .map(str::to_string)
            .collect()
    }

    pub fn fit_transform<S: AsRef<str>>(&self, documents: &[S]) -> TfidfMatrix {
        let counts: Vec<HashMap<String, usize>> = documents
            .iter()
            .map(|doc| {
                let mut tf = HashMap::new();
                for token in self.tokenize(doc.as_ref()) {
                    *tf.entry(token).or_insert(0) += 1;
                }
                tf
            })
            .collect();

        let mut doc_freq: BTreeMap<&str, usize> = BTreeMap::new();
        for tf in &counts {
            for term in tf.keys() {
                *doc_freq.entry(term.as_str()).or_insert(0) += 1;
            }
        }

        let n_docs = documents.len() as f64;
        let index: HashMap<&str, usize> = doc_freq
            .keys()
            .enumerate()
            .map(|(i, term)| (*term, i))
            .collect();
        let idf: Vec<f64> = doc_freq
            .values()
            .map(|&df| ((1.0 + n_docs) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        let rows = counts
            .iter()
            .map(|tf| {
                let mut row: SparseVector = tf
                    .iter()
                    .map(|(term, &count)| {
                        let i = index[term.as_str()];
                        (i, count as f64 * idf[i])
                    })
                    .collect();
                row.sort_unstable_by_key(|&(i, _)| i);

                let norm = row.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
                if norm > 0.0 {
                    for (_, w) in row.iter_mut() {
                        *w /= norm;
                    }
                }
                row
            })
            .collect();

        let vocabulary = doc_freq.keys().map(|t| t.to_string()).collect();

        TfidfMatrix { vocabulary, rows }
    }
}
