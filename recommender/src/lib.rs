use anyhow::Result;
use core::persist::{load_index, IndexPaths};
use core::{query_term_frequency, rank};
use std::path::Path;

/// One recommendation, ready for presentation.
#[derive(Debug, Clone)]
pub struct Recommendation {
    pub title: String,
    pub release_year: String,
    pub rating: String,
    pub score: f32,
}

/// Load a persisted index and rank every movie against the query,
/// returning the `top_n` best matches. An empty query is legal: all
/// scores are 0 and the corpus order is preserved.
pub fn recommend<P: AsRef<Path>>(index_dir: P, query: &str, top_n: usize) -> Result<Vec<Recommendation>> {
    let paths = IndexPaths::new(index_dir);
    let (movies, vectors, _meta) = load_index(&paths)?;

    let query_tf = query_term_frequency(query);
    tracing::debug!(query, terms = query_tf.len(), "scoring query");
    let ranked = rank(&vectors, &query_tf)?;

    Ok(ranked
        .into_iter()
        .take(top_n)
        .map(|r| {
            let movie = &movies[r.index];
            Recommendation {
                title: movie.title.clone(),
                release_year: movie.release_year.clone(),
                rating: movie.rating.clone(),
                score: r.score,
            }
        })
        .collect())
}
