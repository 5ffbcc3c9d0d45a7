/// Result type alias for startup/configuration operations.
pub type Result<T> = std::result::Result<T, JaundiceError>;

/// Process-fatal failures. Per-article failures never appear here; they are
/// classified into an `ArticleResult` inside the pipeline.
#[derive(Debug, thiserror::Error)]
pub enum JaundiceError {
    #[error("Failed to read charged words file {path}: {source}")]
    VocabularyIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Charged words file {0} contains no words")]
    EmptyVocabulary(String),

    #[error("Configuration error: {0}")]
    Config(String),
}
