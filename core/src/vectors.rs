use crate::model::{Movie, TermWeights};

/// One TF-IDF map per movie, order-preserving. Every output map is keyed
/// by the full corpus vocabulary with explicit zeros for terms the movie
/// lacks, so cosine similarity downstream can walk a fixed vocabulary
/// without per-movie key checks.
pub fn build_tfidf_vectors(movies: &[Movie], idf: &TermWeights) -> Vec<TermWeights> {
    movies
        .iter()
        .map(|movie| {
            idf.iter()
                .map(|(term, &idf_value)| {
                    let weight = movie
                        .term_frequency
                        .get(term)
                        .map_or(0.0, |tf| tf * idf_value);
                    (term.clone(), weight)
                })
                .collect()
        })
        .collect()
}
