use serde::{Deserialize, Serialize};

/// Terminal outcome of one article's trip through the pipeline.
///
/// Exactly one value per article, chosen by the first stage that fails.
/// The wire tokens (`"OK"`, `"FETCH_ERROR"`, ...) are a contract with the
/// JSON interface and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProcessingStatus {
    Ok,
    FetchError,
    ParsingError,
    Timeout,
}

impl std::fmt::Display for ProcessingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProcessingStatus::Ok => write!(f, "OK"),
            ProcessingStatus::FetchError => write!(f, "FETCH_ERROR"),
            ProcessingStatus::ParsingError => write!(f, "PARSING_ERROR"),
            ProcessingStatus::Timeout => write!(f, "TIMEOUT"),
        }
    }
}

/// One article's scored (or failed) outcome. Immutable once constructed.
///
/// `score` and `words_count` are both `Some` iff `status == Ok`; the
/// constructors are the only way to build one, so the invariant holds by
/// construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleResult {
    pub status: ProcessingStatus,
    pub url: String,
    pub score: Option<f64>,
    pub words_count: Option<usize>,
}

impl ArticleResult {
    pub fn ok(url: impl Into<String>, score: f64, words_count: usize) -> Self {
        Self {
            status: ProcessingStatus::Ok,
            url: url.into(),
            score: Some(score),
            words_count: Some(words_count),
        }
    }

    pub fn failed(url: impl Into<String>, status: ProcessingStatus) -> Self {
        debug_assert!(status != ProcessingStatus::Ok, "failed result cannot carry Ok");
        Self {
            status,
            url: url.into(),
            score: None,
            words_count: None,
        }
    }
}
