use crate::model::{CoreError, Movie, TermWeights};
use std::collections::HashMap;

/// Inverse document frequency for every distinct term in the corpus:
/// `ln(num_movies / document_frequency)`. Document frequency counts the
/// movies containing a term, not its occurrences; a term present in
/// every movie gets an IDF of exactly 0, which is valid output.
pub fn build_idf(movies: &[Movie]) -> Result<TermWeights, CoreError> {
    if movies.is_empty() {
        return Err(CoreError::EmptyCorpus);
    }
    let num_movies = movies.len() as f32;
    let mut document_frequency: HashMap<&str, u32> = HashMap::new();
    for movie in movies {
        // term_frequency keys are already distinct per movie, so each
        // movie contributes at most one count per term.
        for term in movie.term_frequency.keys() {
            *document_frequency.entry(term).or_insert(0) += 1;
        }
    }
    tracing::debug!(
        num_movies = movies.len(),
        vocabulary = document_frequency.len(),
        "computed document frequencies"
    );
    Ok(document_frequency
        .into_iter()
        .map(|(term, df)| (term.to_string(), (num_movies / df as f32).ln()))
        .collect())
}
