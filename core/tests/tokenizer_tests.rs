use core::tokenizer::normalize;

#[test]
fn it_normalizes_case_and_punctuation() {
    let terms = normalize("The CAFE's Menu, revisited.");
    assert_eq!(terms, vec!["the", "cafes", "menu", "revisited"]);
}

#[test]
fn it_keeps_every_word_including_stopwords() {
    // No stopword filtering and no stemming in this pipeline: every
    // word participates in the tf-idf scores.
    let terms = normalize("The quick brown fox and the lazy dog");
    assert!(terms.contains(&"the".to_string()));
    assert!(terms.contains(&"and".to_string()));
    assert!(terms.contains(&"quick".to_string()));
}

#[test]
fn it_splits_on_runs_of_whitespace() {
    let terms = normalize("  space \t  wars \n episode  ");
    assert_eq!(terms, vec!["space", "wars", "episode"]);
}
