use lazy_static::lazy_static;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    static ref PUNCT: Regex = Regex::new(r"[^\w\s]").expect("valid regex");
}

/// Normalize text into query/document terms: NFKC normalization,
/// lowercase, split on whitespace, then strip punctuation from each
/// token (Unicode word characters and underscore survive).
///
/// A token that is punctuation-only collapses to the empty string and is
/// kept; downstream counting treats "" like any other term.
pub fn normalize(text: &str) -> Vec<String> {
    let lowered = text.nfkc().collect::<String>().to_lowercase();
    lowered
        .split_whitespace()
        .map(|token| PUNCT.replace_all(token, "").into_owned())
        .collect()
}
