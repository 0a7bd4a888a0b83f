use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::AppError;

/// A single recommended series and how similar it is to the queried one
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    pub title: String,
    pub similarity: f64,
}

/// Successful answer to a recommendation query
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendations {
    /// Title exactly as the caller typed it
    pub query: String,
    /// Matrix label the query resolved to
    pub matched_title: String,
    /// Ranked by descending similarity, never containing `matched_title`
    pub recommendations: Vec<Recommendation>,
}

impl Recommendations {
    pub fn titles(&self) -> Vec<&str> {
        self.recommendations
            .iter()
            .map(|r| r.title.as_str())
            .collect()
    }
}

/// Recoverable query failures, returned as values to the caller
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("Series '{query}' not found in dataset")]
    NotFound { query: String },

    #[error("count must be at least 1, got {0}")]
    InvalidCount(usize),
}

impl From<QueryError> for AppError {
    fn from(err: QueryError) -> Self {
        match err {
            QueryError::NotFound { .. } => AppError::NotFound(err.to_string()),
            QueryError::InvalidCount(_) => AppError::InvalidInput(err.to_string()),
        }
    }
}
