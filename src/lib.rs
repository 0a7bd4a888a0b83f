//! Content-based Korean drama recommendations.
//!
//! Offline, the feature builder turns raw series records into a title-labeled
//! cosine similarity matrix (TF-IDF over name, country, type and synopsis,
//! fused with min-max scaled numeric attributes) and persists it as CSV.
//! Online, a [`services::Recommender`] loads that matrix once and answers
//! "what is similar to this title" lookups for the HTTP API and the CLIs.

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod middleware;
pub mod models;
pub mod services;

pub use error::{AppError, AppResult};
