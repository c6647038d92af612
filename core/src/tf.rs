use crate::model::{CoreError, TermWeights};
use crate::tokenizer::normalize;

/// Weighted term frequencies for one movie: title and plot tokens count
/// once, genre tokens twice. Every counter is divided by the title+plot
/// token count only. Genre weighting inflates the numerator but not the
/// denominator; golden scores depend on this exact asymmetry, so do not
/// "fix" it.
pub fn build_term_frequency(
    title: &str,
    plot: &str,
    genre: &str,
) -> Result<TermWeights, CoreError> {
    let mut base_terms = normalize(title);
    base_terms.extend(normalize(plot));
    let genre_terms = normalize(genre);
    let num_terms = base_terms.len();

    let mut tf = TermWeights::new();
    for term in base_terms {
        *tf.entry(term).or_insert(0.0) += 1.0;
    }
    for term in genre_terms {
        *tf.entry(term).or_insert(0.0) += 2.0;
    }

    if tf.is_empty() {
        // All three fields empty: an all-zero vector, not an error.
        return Ok(tf);
    }
    if num_terms == 0 {
        return Err(CoreError::EmptyTitleAndPlot);
    }
    for weight in tf.values_mut() {
        *weight /= num_terms as f32;
    }
    Ok(tf)
}

/// Raw term frequencies for a free-text query: weight 1, no genre boost.
/// An empty query yields an empty map, never an error.
pub fn query_term_frequency(query: &str) -> TermWeights {
    let terms = normalize(query);
    let num_terms = terms.len();
    let mut tf = TermWeights::new();
    for term in terms {
        *tf.entry(term).or_insert(0.0) += 1.0;
    }
    for weight in tf.values_mut() {
        *weight /= num_terms as f32;
    }
    tf
}
