pub mod idf;
pub mod model;
pub mod persist;
pub mod rank;
pub mod tf;
pub mod tokenizer;
pub mod vectors;

pub use idf::build_idf;
pub use model::{CoreError, Movie, TermWeights};
pub use rank::{rank, Ranked};
pub use tf::{build_term_frequency, query_term_frequency};
pub use vectors::build_tfidf_vectors;
