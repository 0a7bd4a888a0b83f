pub mod recommendation;
pub mod series;
pub mod similarity_matrix;

pub use recommendation::{QueryError, Recommendation, Recommendations};
pub use series::{Series, SeriesRecord, REQUIRED_COLUMNS};
pub use similarity_matrix::SimilarityMatrix;
