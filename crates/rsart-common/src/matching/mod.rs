pub mod pipeline;
pub mod rank;
pub mod similarity;
pub mod vectorize;

pub use pipeline::{MatchingError, MatchingService};
pub use similarity::cosine_similarity;
pub use vectorize::{TfidfMatrix, TfidfVectorizer, VectorizeError};
