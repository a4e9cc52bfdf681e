//! Word tokenizer with attached Porter stems.

use regex::Regex;
use std::sync::LazyLock;

use super::stemmer;

// Anything that is not a Latin/Cyrillic letter, a digit or an underscore splits words.
// NOTE: expect() is acceptable here, the pattern is a compile-time constant.
static WORD_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^A-Za-zА-Яа-я0-9_]+").expect("Invalid regex: word separator pattern")
});

/// A lowercase word and its stem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub word: String,
    pub stem: String,
}

/// Split text into lowercase word tokens, each paired with its stem.
///
/// Empty or punctuation-only input yields an empty vector.
pub fn tokenize(text: &str) -> Vec<Token> {
    words(text)
        .into_iter()
        .map(|word| {
            let stem = stemmer::stem(&word);
            Token { word, stem }
        })
        .collect()
}

/// Split text into lowercase word tokens without stemming.
pub fn words(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    WORD_SEPARATOR
        .split(&lower)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}
