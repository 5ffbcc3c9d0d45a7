use jaundice_common::ProcessingStatus;

/// Result type alias for individual pipeline stages.
pub type StageResult<T> = std::result::Result<T, StageError>;

/// Classified failure of one pipeline stage.
///
/// This is the closed per-article taxonomy: every variant maps onto a
/// non-`Ok` `ProcessingStatus`, and every one is recovered inside the
/// pipeline — none escapes to the orchestrator.
#[derive(Debug, thiserror::Error)]
pub enum StageError {
    #[error("Fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("Page does not match a known article template")]
    NotAnArticle,

    #[error("Stage deadline exceeded")]
    Timeout,
}

impl StageError {
    /// The terminal status this failure classifies the article into.
    pub fn status(&self) -> ProcessingStatus {
        match self {
            StageError::Fetch(_) => ProcessingStatus::FetchError,
            StageError::NotAnArticle => ProcessingStatus::ParsingError,
            StageError::Timeout => ProcessingStatus::Timeout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_into_statuses() {
        assert_eq!(StageError::NotAnArticle.status(), ProcessingStatus::ParsingError);
        assert_eq!(StageError::Timeout.status(), ProcessingStatus::Timeout);
    }
}
