use std::sync::Arc;

use crate::services::Recommender;

/// Shared application state
///
/// The recommender is immutable once loaded, so handlers share it without locking.
#[derive(Clone)]
pub struct AppState {
    pub recommender: Arc<Recommender>,
    /// Count used when a request does not specify one
    pub default_count: usize,
}

impl AppState {
    pub fn new(recommender: Recommender, default_count: usize) -> Self {
        Self {
            recommender: Arc::new(recommender),
            default_count,
        }
    }
}
