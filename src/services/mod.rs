pub mod dataset;
pub mod feature_builder;
pub mod features;
pub mod matrix_store;
pub mod recommender;

pub use feature_builder::{build_matrix_file, BuildOutput, BuildReport, FeatureBuilder, RatingEncoding};
pub use recommender::{normalize_title, Recommender};
