use crate::model::{CoreError, TermWeights};
use std::cmp::Ordering;

/// A movie's position in the corpus paired with its similarity to the
/// query. `index` points back into the corpus the vectors were built
/// from.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranked {
    pub index: usize,
    pub score: f32,
}

/// Rank every movie against a raw query term-frequency map, descending
/// by cosine similarity. Ties keep original corpus order via the index
/// as an explicit secondary sort key. The result always has one entry
/// per corpus vector; callers truncate to top-N.
pub fn rank(corpus_vectors: &[TermWeights], query_tf: &TermWeights) -> Result<Vec<Ranked>, CoreError> {
    if corpus_vectors.is_empty() {
        return Err(CoreError::EmptyCorpus);
    }
    let vocab = vocabulary(corpus_vectors, query_tf);
    let mut ranked: Vec<Ranked> = corpus_vectors
        .iter()
        .enumerate()
        .map(|(index, vector)| Ranked {
            index,
            score: cosine_similarity(query_tf, vector, &vocab),
        })
        .collect();
    ranked.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then(a.index.cmp(&b.index))
    });
    Ok(ranked)
}

/// Union vocabulary for scoring: all corpus vectors share one key set by
/// construction, so vector 0 stands in for the corpus side; query-only
/// terms are appended after.
fn vocabulary(corpus_vectors: &[TermWeights], query_tf: &TermWeights) -> Vec<String> {
    let corpus_terms = &corpus_vectors[0];
    let mut vocab: Vec<String> = corpus_terms.keys().cloned().collect();
    for term in query_tf.keys() {
        if !corpus_terms.contains_key(term) {
            vocab.push(term.clone());
        }
    }
    vocab
}

/// Cosine similarity over a fixed vocabulary order; missing terms read
/// as 0. A zero norm on either side resolves to a score of 0.0, not an
/// error.
pub fn cosine_similarity(query: &TermWeights, movie: &TermWeights, vocab: &[String]) -> f32 {
    let mut dot = 0.0f32;
    let mut query_sq = 0.0f32;
    let mut movie_sq = 0.0f32;
    for term in vocab {
        let q = query.get(term).copied().unwrap_or(0.0);
        let m = movie.get(term).copied().unwrap_or(0.0);
        dot += q * m;
        query_sq += q * q;
        movie_sq += m * m;
    }
    let query_norm = query_sq.sqrt();
    let movie_norm = movie_sq.sqrt();
    if query_norm == 0.0 || movie_norm == 0.0 {
        0.0
    } else {
        dot / (query_norm * movie_norm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{build_idf, build_tfidf_vectors, query_term_frequency, Movie};

    fn corpus() -> Vec<Movie> {
        vec![
            Movie::new("Space Wars", "1977", "action scifi", "a hero fights in space", "8.1")
                .unwrap(),
            Movie::new("Love Story", "1970", "romance", "two people fall in love", "6.9")
                .unwrap(),
        ]
    }

    fn corpus_vectors(movies: &[Movie]) -> Vec<TermWeights> {
        let idf = build_idf(movies).unwrap();
        build_tfidf_vectors(movies, &idf)
    }

    #[test]
    fn relevant_movie_ranks_first() {
        let movies = corpus();
        let vectors = corpus_vectors(&movies);
        let query = query_term_frequency("space action");
        let ranked = rank(&vectors, &query).unwrap();
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].index, 0);
        assert!(ranked[0].score > 0.0);
        // No term overlap with the second movie.
        assert!(ranked[1].score.abs() < 1e-6);
    }

    #[test]
    fn scores_stay_within_cosine_bounds() {
        let movies = corpus();
        let vectors = corpus_vectors(&movies);
        for query in ["space", "love story", "space hero love", "unseen words"] {
            let query_tf = query_term_frequency(query);
            for r in rank(&vectors, &query_tf).unwrap() {
                assert!(r.score >= 0.0 && r.score <= 1.0 + 1e-6);
            }
        }
    }

    #[test]
    fn no_overlap_query_scores_zero_everywhere() {
        let movies = corpus();
        let vectors = corpus_vectors(&movies);
        let query = query_term_frequency("xylophone zeppelin");
        for r in rank(&vectors, &query).unwrap() {
            assert_eq!(r.score, 0.0);
        }
    }

    #[test]
    fn empty_query_preserves_corpus_order() {
        let movies = corpus();
        let vectors = corpus_vectors(&movies);
        let query = query_term_frequency("");
        let ranked = rank(&vectors, &query).unwrap();
        let order: Vec<usize> = ranked.iter().map(|r| r.index).collect();
        assert_eq!(order, vec![0, 1]);
        assert!(ranked.iter().all(|r| r.score == 0.0));
    }

    #[test]
    fn ties_keep_original_corpus_order() {
        // Identical movies score identically against any query.
        let movies = vec![
            Movie::new("Twin", "2001", "drama", "a quiet town secret", "7.0").unwrap(),
            Movie::new("Twin", "2001", "drama", "a quiet town secret", "7.0").unwrap(),
            Movie::new("Twin", "2001", "drama", "a quiet town secret", "7.0").unwrap(),
        ];
        let vectors = corpus_vectors(&movies);
        let query = query_term_frequency("quiet town");
        let ranked = rank(&vectors, &query).unwrap();
        let order: Vec<usize> = ranked.iter().map(|r| r.index).collect();
        assert_eq!(order, vec![0, 1, 2]);
    }

    #[test]
    fn ranking_is_deterministic() {
        let movies = corpus();
        let vectors = corpus_vectors(&movies);
        let query = query_term_frequency("space hero love");
        let first = rank(&vectors, &query).unwrap();
        for _ in 0..5 {
            assert_eq!(rank(&vectors, &query).unwrap(), first);
        }
    }

    #[test]
    fn empty_corpus_is_an_error() {
        let query = query_term_frequency("space");
        assert!(rank(&[], &query).is_err());
    }
}
