use sift_core::tokenizer::tokenize;

#[test]
fn it_splits_on_punctuation_and_folds_case() {
    let words = tokenize("Hello, World! a ab");
    assert_eq!(words, vec!["hello", "world", "ab"]);
}

#[test]
fn it_drops_single_character_tokens() {
    let words = tokenize("I saw a cat & 1 dog");
    assert!(!words.contains(&"i".to_string()));
    assert!(!words.contains(&"a".to_string()));
    assert!(!words.contains(&"1".to_string()));
    assert_eq!(words, vec!["saw", "cat", "dog"]);
}

#[test]
fn it_does_not_stem_or_filter_stopwords() {
    let words = tokenize("The runners were running");
    assert_eq!(words, vec!["the", "runners", "were", "running"]);
}

#[test]
fn it_keeps_unicode_letters() {
    let words = tokenize("Café Über straße");
    assert_eq!(words, vec!["café", "über", "straße"]);
}
