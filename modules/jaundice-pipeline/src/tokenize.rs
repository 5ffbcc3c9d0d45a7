use std::sync::LazyLock;

use regex::Regex;

static WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{Alphabetic}+").expect("valid regex"));

/// Words shorter than this carry no sentiment signal and are dropped.
const MIN_WORD_LEN: usize = 3;

/// Converts plain text into a sequence of normalized word tokens.
///
/// Tokenization is CPU-bound; the pipeline runs it on the blocking pool
/// under its own deadline. Implementations must be reentrant (`Send +
/// Sync`); an engine that is not should wrap its own serialization (an
/// instance pool or a queue) behind this trait.
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<String>;
}

/// Default tokenizer: splits on non-alphabetic characters, lowercases, and
/// drops tokens shorter than three characters. Stateless, so freely shared
/// across pipeline tasks.
pub struct WordTokenizer;

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        WORD_RE
            .find_iter(text)
            .filter(|m| m.as_str().chars().count() >= MIN_WORD_LEN)
            .map(|m| m.as_str().to_lowercase())
            .collect()
    }
}
