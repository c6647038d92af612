use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Term -> weight mapping used for term frequencies, IDF values and
/// TF-IDF vectors alike.
pub type TermWeights = HashMap<String, f32>;

/// One corpus entry. Fields are kept as the raw strings from the dataset;
/// `term_frequency` is derived once at construction and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,
    pub release_year: String,
    /// Whitespace-delimited genre tags, e.g. "action scifi".
    pub genre: String,
    pub plot: String,
    pub rating: String,
    /// Weighted, normalized term frequencies over title, plot and genre.
    pub term_frequency: TermWeights,
}

impl Movie {
    /// Builds a movie together with its derived term-frequency map.
    ///
    /// Fails when title and plot normalize to zero tokens while genre
    /// terms remain, since those would have no denominator to divide by.
    pub fn new(
        title: &str,
        release_year: &str,
        genre: &str,
        plot: &str,
        rating: &str,
    ) -> Result<Self, CoreError> {
        let term_frequency = crate::tf::build_term_frequency(title, plot, genre)?;
        Ok(Self {
            title: title.to_string(),
            release_year: release_year.to_string(),
            genre: genre.to_string(),
            plot: plot.to_string(),
            rating: rating.to_string(),
            term_frequency,
        })
    }
}

/// Contract violations in the scoring pipeline. Zero-norm cosine
/// similarity is deliberately NOT here: it resolves to a 0.0 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreError {
    /// A movie has genre terms to weight but zero title+plot tokens,
    /// leaving nothing to normalize by.
    EmptyTitleAndPlot,
    /// IDF or ranking was requested over zero movies.
    EmptyCorpus,
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::EmptyTitleAndPlot => {
                write!(f, "movie has no title or plot terms to normalize by")
            }
            CoreError::EmptyCorpus => write!(f, "corpus contains no movies"),
        }
    }
}

impl std::error::Error for CoreError {}
